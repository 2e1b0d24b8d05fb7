pub mod dashboard_config;
pub mod server_config;
pub mod total_config;
