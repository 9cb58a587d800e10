//! Chartsignal API Server
//!
//! Stateless HTTP API that turns price history into buy/sell/neutral
//! indicator reports. Safe to scale horizontally.

use chartsignal::config::{self, AppConfig};
use chartsignal::core::http::start_server;
use chartsignal::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let app_config = AppConfig::from_env();
    app_config.analysis.validate()?;
    let port = app_config.port;

    info!("Starting Chartsignal API Server");
    info!(environment = %config::get_environment(), "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(
        rsi_overbought = app_config.analysis.thresholds.rsi_overbought,
        rsi_oversold = app_config.analysis.thresholds.rsi_oversold,
        history = app_config.market_data.history_limit,
        "Analysis configuration"
    );

    // Errors are stringified so the task output is Send
    let server_handle =
        tokio::spawn(async move { start_server(app_config).await.map_err(|e| e.to_string()) });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            Ok(())
        }
        result = server_handle => match result {
            Ok(Ok(())) => {
                error!("HTTP server stopped unexpectedly");
                Err("HTTP server stopped unexpectedly".into())
            }
            Ok(Err(e)) => {
                error!(error = %e, "HTTP server error");
                Err(e.into())
            }
            Err(e) => {
                error!(error = %e, "HTTP server task failed");
                Err(e.into())
            }
        }
    }
}
