use std::sync::Arc;

use poolscore::{
    apis::ApiManager,
    arguments::{config_path, host_override, is_help_requested, port_override, print_help},
    config::{load_config_with_overrides, ConfigOverrides, CONFIG_FILE_PATH},
    logger::{self, LogTag},
    pools::PoolService,
    webserver::{self, AppState},
};

/// Main entry point for the poolscore API server
///
/// Loads configuration (file plus --host/--port overrides, validated together), builds the API
/// clients and pool service, and serves until Ctrl+C.
#[tokio::main]
async fn main() {
    logger::init();

    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "poolscore starting up...");

    let path = config_path().unwrap_or_else(|| CONFIG_FILE_PATH.to_string());
    let config = match port_override().and_then(|port| {
        load_config_with_overrides(
            &path,
            ConfigOverrides {
                host: host_override(),
                port,
            },
        )
    }) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let apis = match ApiManager::from_config(&config.sources) {
        Ok(apis) => Arc::new(apis),
        Err(e) => {
            logger::error(LogTag::Api, &e);
            std::process::exit(1);
        }
    };
    let pools = Arc::new(PoolService::from_api_manager(&apis, &config.sources));
    let state = Arc::new(AppState::new(config.webserver.clone(), apis, pools));

    if let Err(e) = ctrlc::set_handler(|| {
        logger::info(LogTag::System, "Shutdown requested (Ctrl+C)");
        webserver::shutdown();
    }) {
        logger::warning(
            LogTag::System,
            &format!("Failed to install Ctrl+C handler: {}", e),
        );
    }

    if let Err(e) = webserver::start_server(state).await {
        logger::error(LogTag::Webserver, &e);
        std::process::exit(1);
    }

    logger::info(LogTag::System, "poolscore stopped");
}
