//! noid-proxy: relay server between the chat widget and the Gemini API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use noid_ai::{GeminiClient, GeminiConfig};
use noid_common::NoidError;
use noid_config::NoidConfig;
use noid_proxy::{build_router, AppState};

#[derive(Parser)]
#[command(name = "noid-proxy", version, about = "Gemini relay for the NOID chat widget")]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `proxy.bind`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), NoidError> {
    let args = Args::parse();

    let (config, load_error) = match noid_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (NoidConfig::default(), Some(e)),
    };

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(format!(
            "noid_proxy={level},noid_ai={level},tower_http={level}"
        )),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{},{},tower_http=info",
                config.logging.directive("noid_proxy"),
                config.logging.directive("noid_ai")
            ))
        }),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = load_error {
        if args.config.is_some() {
            return Err(e.into());
        }
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let gemini = GeminiConfig::from_env()
        .map_err(|e| NoidError::Proxy(e.to_string()))?
        .with_proxy_config(&config.proxy);
    tracing::info!(model = %gemini.model, "Upstream configured");
    let client = GeminiClient::new(gemini).map_err(|e| NoidError::Proxy(e.to_string()))?;

    let app = build_router(AppState::new(Arc::new(client)));

    let addr = args.bind.unwrap_or(config.proxy.bind);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("noid-proxy listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
