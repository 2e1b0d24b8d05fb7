use crate::common::*;

use crate::dto::{aggregate_options::*, chart_fragments::*, group_summary::*};
use crate::enums::render_mode::*;
use crate::env_configuration::env_config::*;
use crate::errors::DashboardError;
use crate::model::configs::{dashboard_config::*, total_config::*};
use crate::model::record::record_set::*;
use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, ingestion_service::*,
};
use crate::utils_modules::io_utils::*;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

/* Uploads are small HR extracts; anything bigger is almost certainly a
mistake. */
const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

const EMBED_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
body { font-family: sans-serif; margin: 24px; }
.pie-chart-container { max-width: 640px; }
</style>
</head>
<body>
<h1>__TITLE__</h1>
__CONTAINER__
__SCRIPT__
<p><a href="/">Upload another file</a></p>
</body>
</html>
"#;

#[derive(Debug, new)]
pub struct MainController<I: IngestionService, A: AggregationService, C: ChartService> {
    ingestion_service: I,
    aggregation_service: A,
    chart_service: C,
}

impl<I, A, C> MainController<I, A, C>
where
    I: IngestionService + 'static,
    A: AggregationService + 'static,
    C: ChartService + 'static,
{
    #[doc = r#"
        Binds the HTTP server and serves the two routes until the process is
        stopped.

        1. Create the upload directory when absent
        2. Register `GET /` (upload form) and `POST /upload` (dashboard generation)
        3. Serve on the configured listen address

        # Returns
        * `anyhow::Result<()>` - Err only on bind/serve failure
    "#]
    pub async fn run(self) -> anyhow::Result<()> {
        let dashboard_config: &DashboardConfig = get_dashboard_config_info();
        fs::create_dir_all(dashboard_config.upload_dir())?;

        let listen_addr: String = get_server_config_info().listen_addr().clone();

        let app: Router = Router::new()
            .route("/", get(Self::home))
            .route("/upload", post(Self::upload))
            .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
            .with_state(Arc::new(self));

        let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(&listen_addr).await?;
        info!("Dashboard server listening on {}", listen_addr);

        axum::serve(listener, app).await?;

        Ok(())
    }

    #[doc = "Upload form page, served from the configured HTML template."]
    async fn home(State(_controller): State<Arc<Self>>) -> Response {
        match fs::read_to_string(&*UPLOAD_TEMPLATE_PATH) {
            Ok(body) => Html(body).into_response(),
            Err(e) => {
                error!(
                    "[MainController->home] Failed to read upload template {}: {:?}",
                    &*UPLOAD_TEMPLATE_PATH, e
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "upload page unavailable").into_response()
            }
        }
    }

    async fn upload(State(controller): State<Arc<Self>>, multipart: Multipart) -> Response {
        match controller.handle_upload(multipart).await {
            Ok(response) => response,
            Err(e) => Self::error_response(e),
        }
    }

    #[doc = r#"
        Full upload-to-chart pipeline for one request.

        1. Pull the `file` part (and optional `render` mode) out of the form
        2. Store the upload under its sanitized filename
        3. Ingest -> aggregate -> render per the configured dashboard settings
        4. Answer with either a downloadable document or an embedding page
    "#]
    async fn handle_upload(&self, mut multipart: Multipart) -> Result<Response, DashboardError> {
        let mut file_part: Option<(String, Vec<u8>)> = None;
        let mut render_mode: RenderMode = RenderMode::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| DashboardError::InvalidMultipart(e.to_string()))?
        {
            /* `bytes()` consumes the field, so copy the part name out first. */
            let field_name: Option<String> = field.name().map(str::to_string);

            match field_name.as_deref() {
                Some("file") => {
                    let client_filename: String =
                        field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| DashboardError::InvalidMultipart(e.to_string()))?;
                    file_part = Some((client_filename, bytes.to_vec()));
                }
                Some("render") => {
                    let value: String = field
                        .text()
                        .await
                        .map_err(|e| DashboardError::InvalidMultipart(e.to_string()))?;
                    render_mode = RenderMode::from_form_value(&value);
                }
                _ => {}
            }
        }

        let (client_filename, bytes) = file_part.ok_or(DashboardError::NoFileProvided)?;
        if client_filename.trim().is_empty() {
            return Err(DashboardError::EmptyFilename);
        }

        let stored_name: String = sanitize_filename(&client_filename);
        if stored_name.is_empty() {
            return Err(DashboardError::EmptyFilename);
        }

        let config: &DashboardConfig = get_dashboard_config_info();
        let upload_dir: &Path = Path::new(config.upload_dir());

        let stored_path: PathBuf = upload_dir.join(&stored_name);
        tokio::fs::write(&stored_path, &bytes).await?;
        info!("Stored upload {:?} ({} bytes)", stored_path, bytes.len());

        let records: RecordSet = self.ingestion_service.load_records(&stored_path).await?;

        let options: AggregateOptions = AggregateOptions::new(
            config.group_column().clone(),
            config.exclusion_column().clone(),
            config.color_palette().clone(),
        );
        let summary: GroupSummary = self.aggregation_service.summarize(&records, &options)?;

        match render_mode {
            RenderMode::Download => {
                let document_path: PathBuf = self
                    .chart_service
                    .render_standalone(
                        &summary,
                        config.chart_title(),
                        upload_dir,
                        config.base_filename(),
                    )
                    .await?;
                Self::attachment_response(&document_path).await
            }
            RenderMode::Embed => {
                let fragments: ChartFragments = self
                    .chart_service
                    .render_fragments(&summary, config.chart_title())
                    .await?;
                Ok(Html(Self::embed_page(config.chart_title(), &fragments)).into_response())
            }
        }
    }

    #[doc = "Streams the generated document back as a downloadable attachment."]
    async fn attachment_response(document_path: &Path) -> Result<Response, DashboardError> {
        let bytes: Vec<u8> = tokio::fs::read(document_path).await?;

        let file_name: &str = document_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("dashboard.html");

        let response: Response = (
            StatusCode::OK,
            [
                (
                    header::CONTENT_TYPE,
                    "text/html; charset=utf-8".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file_name),
                ),
            ],
            bytes,
        )
            .into_response();

        Ok(response)
    }

    fn embed_page(title: &str, fragments: &ChartFragments) -> String {
        EMBED_PAGE_TEMPLATE
            .replace("__TITLE__", title)
            .replace("__CONTAINER__", fragments.container())
            .replace("__SCRIPT__", fragments.script())
    }

    #[doc = r#"
        Maps pipeline errors onto HTTP statuses: bad uploads answer 4xx with a
        plain-text body, processing faults answer 500 and are logged.
    "#]
    fn error_response(err: DashboardError) -> Response {
        let status: StatusCode = match &err {
            DashboardError::NoFileProvided
            | DashboardError::EmptyFilename
            | DashboardError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            DashboardError::UnsupportedFormat { .. }
            | DashboardError::MissingColumn { .. }
            | DashboardError::NoData => StatusCode::UNPROCESSABLE_ENTITY,
            DashboardError::Parse(_)
            | DashboardError::Render(_)
            | DashboardError::Configuration(_)
            | DashboardError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if err.is_client_fault() {
            warn!("[MainController->error_response] rejected upload: {}", err);
        } else {
            error!("[MainController->error_response] {:?}", err);
        }

        (status, err.to_string()).into_response()
    }
}
