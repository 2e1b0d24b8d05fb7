pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod ingestion_service_impl;
