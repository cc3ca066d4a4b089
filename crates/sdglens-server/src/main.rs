//! SDG Lens Server binary
//!
//! Starts the HTTP classification service.

use anyhow::Context;
use clap::Parser;
use sdglens_server::{config::ServerConfig, init_tracing, start_server};
use std::path::PathBuf;

/// SDG Lens classification server
#[derive(Debug, Parser)]
#[command(name = "sdglens-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "SDGLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    config.apply_env()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    start_server(config).await?;
    Ok(())
}
