//! Vaidya Doctor Search (VDS)
//!
//! A searchable, filterable doctor listing service.

use std::time::Duration;

use clap::Parser;
use tracing::info;

use vaidya_engine::{HttpSource, load_or_empty};
use vaidya_rest::{ServerConfig, create_app_with_config, init_logging};

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        data_url = %config.data_url,
        "Starting Vaidya Doctor Search"
    );

    // Fetch the dataset once. A failed fetch degrades to an empty
    // directory; the service still starts and serves empty listings.
    let source =
        HttpSource::new(&config.data_url).with_timeout(Duration::from_secs(config.fetch_timeout));
    let directory = load_or_empty(&source).await;

    let app = create_app_with_config(directory, config.clone());
    serve(app, &config).await
}
