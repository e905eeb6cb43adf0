use anyhow::Result;
use clap::Parser;
use scribe_relay::http::{create_router, AppState};
use scribe_relay::recognition::DeepgramClient;
use scribe_relay::session::{SessionConfig, SessionRegistry};
use scribe_relay::store::HttpStore;
use scribe_relay::Config;
use std::sync::Arc;
use tracing::info;

/// Relays live client audio to a streaming recognition provider and
/// streams transcript events back.
#[derive(Debug, Parser)]
#[command(name = "scribe-relay")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/scribe-relay")]
    config: String,

    /// Override the HTTP port from the configuration
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} starting", cfg.service.name);
    info!("Recognition endpoint: {}", cfg.recognition.endpoint);
    info!("Storage collaborator: {}", cfg.storage.base_url);

    let state = AppState {
        registry: Arc::new(SessionRegistry::new()),
        recognition: Arc::new(DeepgramClient::new(
            cfg.recognition.endpoint.clone(),
            cfg.recognition.api_key.clone(),
        )),
        store: Arc::new(HttpStore::new(cfg.storage.base_url.clone())),
        session_config: SessionConfig {
            recognition: cfg.recognition.options(),
            ..SessionConfig::default()
        },
    };

    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
