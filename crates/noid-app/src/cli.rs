use std::path::PathBuf;

use clap::Parser;

/// NOID: chat with the AI-NOID assistant from your terminal.
#[derive(Parser, Debug)]
#[command(name = "noid", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Completion endpoint URL, overriding `endpoint.url`.
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
