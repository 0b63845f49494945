mod cli;
mod command;
mod repl;
mod view;

use std::io::IsTerminal;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use noid_ai::{ChatSession, HttpCompletionClient};
use noid_common::NoidError;
use noid_config::NoidConfig;

use crate::view::TerminalView;

#[tokio::main]
async fn main() -> Result<(), NoidError> {
    let args = cli::parse();

    let (mut config, load_error) = match noid_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (NoidConfig::default(), Some(e)),
    };

    // Logs go to stderr; stdout carries the conversation.
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(format!("noid={level},noid_ai={level}")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{},{}",
                config.logging.directive("noid"),
                config.logging.directive("noid_ai")
            ))
        }),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("NOID v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        if args.config.is_some() {
            return Err(e.into());
        }
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(url) = args.endpoint {
        config.endpoint.url = url;
    }
    tracing::info!(endpoint = %config.endpoint.url, "Config loaded");

    let client = HttpCompletionClient::from_config(&config.endpoint)?;
    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let session = ChatSession::new(client, TerminalView::new(stdout, color), config.messages);

    session.open();
    let input = BufReader::new(tokio::io::stdin());
    repl::run(&session, input, || session.view().prompt()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
