use crate::common::*;

use crate::model::configs::{dashboard_config::*, server_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
}

#[doc = "HTTP server config information"]
pub fn get_server_config_info() -> &'static ServerConfig {
    &TOTAL_CONFIG.server
}

#[doc = "Dashboard generation config information"]
pub fn get_dashboard_config_info() -> &'static DashboardConfig {
    &TOTAL_CONFIG.dashboard
}

impl TotalConfig {
    fn new() -> Self {
        let config: TotalConfig = match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        };

        /* An empty palette would leave wedges without colors; refuse to start. */
        if config.dashboard.color_palette.is_empty() {
            error!("[TotalConfig->new] dashboard.color_palette must contain at least one color");
            std::process::exit(1);
        }

        config
    }
}
