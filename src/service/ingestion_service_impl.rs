use crate::common::*;

use crate::enums::input_format::*;
use crate::errors::DashboardError;
use crate::model::record::{cell_value::*, record_set::*};
use crate::traits::service_traits::ingestion_service::*;

use calamine::{Data, Reader, Xlsx, open_workbook};

#[derive(Debug, Clone, new)]
pub struct IngestionServiceImpl;

impl IngestionServiceImpl {
    #[doc = r#"
        Tags one raw delimited-text cell.

        Resolution order: blank -> `Empty`, numeric -> `Number`, a recognized
        date form -> `Date`, anything else -> `Text`. Happens once at load
        time; nothing downstream re-parses cell text.
    "#]
    fn parse_cell(raw: &str) -> CellValue {
        let trimmed: &str = raw.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if let Ok(num) = trimmed.parse::<f64>() {
            return CellValue::Number(num);
        }

        for date_format in ["%Y-%m-%d", "%m/%d/%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, date_format) {
                if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
                    return CellValue::Date(datetime);
                }
            }
        }

        CellValue::Text(trimmed.to_string())
    }

    fn load_delimited_text(path: &Path) -> Result<RecordSet, DashboardError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DashboardError::Parse(e.to_string()))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| DashboardError::Parse(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows: Vec<Vec<CellValue>> = Vec::new();

        for record in reader.records() {
            let record = record.map_err(|e| DashboardError::Parse(e.to_string()))?;

            /* Short rows are padded with empty cells so every row stays
            aligned to the header. */
            let row: Vec<CellValue> = (0..columns.len())
                .map(|idx| Self::parse_cell(record.get(idx).unwrap_or("")))
                .collect();

            rows.push(row);
        }

        Ok(RecordSet::new(columns, rows))
    }

    fn convert_spreadsheet_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(text) => {
                if text.trim().is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(text.trim().to_string())
                }
            }
            Data::Float(num) => CellValue::Number(*num),
            Data::Int(num) => CellValue::Number(*num as f64),
            Data::Bool(flag) => CellValue::Text(flag.to_string()),
            Data::DateTime(datetime) => match datetime.as_datetime() {
                Some(parsed) => CellValue::Date(parsed),
                None => CellValue::Number(datetime.as_f64()),
            },
            Data::DateTimeIso(text) | Data::DurationIso(text) => {
                CellValue::Text(text.clone())
            }
            Data::Error(_) => CellValue::Empty,
        }
    }

    fn load_spreadsheet(path: &Path) -> Result<RecordSet, DashboardError> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| DashboardError::Parse(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DashboardError::Parse("workbook contains no sheets".to_string()))?
            .map_err(|e| DashboardError::Parse(e.to_string()))?;

        let mut row_iter = range.rows();

        let columns: Vec<String> = match row_iter.next() {
            Some(header) => header.iter().map(|cell| cell.to_string().trim().to_string()).collect(),
            None => Vec::new(),
        };

        let rows: Vec<Vec<CellValue>> = row_iter
            .map(|row| {
                (0..columns.len())
                    .map(|idx| {
                        row.get(idx)
                            .map(Self::convert_spreadsheet_cell)
                            .unwrap_or(CellValue::Empty)
                    })
                    .collect()
            })
            .collect();

        Ok(RecordSet::new(columns, rows))
    }
}

#[async_trait]
impl IngestionService for IngestionServiceImpl {
    async fn load_records(&self, path: &Path) -> Result<RecordSet, DashboardError> {
        let format: InputFormat = InputFormat::from_path(path)?;
        let path: PathBuf = path.to_path_buf();

        /* Both parsers are synchronous whole-file readers; keep them off the
        request thread. */
        let handle = tokio::task::spawn_blocking(move || match format {
            InputFormat::DelimitedText => Self::load_delimited_text(&path),
            InputFormat::Spreadsheet => Self::load_spreadsheet(&path),
        });

        let records: RecordSet = handle
            .await
            .map_err(|e| {
                DashboardError::Parse(format!(
                    "[IngestionServiceImpl->load_records] blocking load task failed: {}",
                    e
                ))
            })??;

        info!(
            "Loaded {} rows x {} columns",
            records.row_count(),
            records.columns().len()
        );

        Ok(records)
    }
}
