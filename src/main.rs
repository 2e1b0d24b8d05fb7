use people_analytics_dashboard::common::*;

use people_analytics_dashboard::controller::main_controller::*;
use people_analytics_dashboard::service::{
    aggregation_service_impl::*, chart_service_impl::*, ingestion_service_impl::*,
};
use people_analytics_dashboard::utils_modules::logger_utils::*;

#[tokio::main]
async fn main() {
    /* Global logger and environment setup */
    dotenv().ok();
    set_global_logger();

    info!("People analytics dashboard server start!");

    /* Dependency injection */
    let ingestion_service: IngestionServiceImpl = IngestionServiceImpl::new();
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();

    let main_controller: MainController<
        IngestionServiceImpl,
        AggregationServiceImpl,
        ChartServiceImpl,
    > = MainController::new(ingestion_service, aggregation_service, chart_service);

    main_controller.run().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
