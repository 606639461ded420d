//! Roster API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` when present).

use roster_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env, config.log.format);
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        strategy = config.paging.strategy.as_str(),
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = roster_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
