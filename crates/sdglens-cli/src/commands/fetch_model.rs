//! Fetch-model command implementation.

use crate::cli::FetchModelArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use sdglens_model::{ArtifactFetcher, FetchOutcome, ModelConfig};

/// Execute the fetch-model command.
pub async fn execute_fetch_model(
    args: FetchModelArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let model_config = match &config.model_directory {
        Some(dir) => ModelConfig::with_directory(dir.clone()),
        None => ModelConfig::default(),
    };
    let destination = args.dest.unwrap_or_else(|| model_config.artifact_path());

    let fetcher = ArtifactFetcher::new(args.url, &destination, model_config.download_timeout())?;

    match fetcher.fetch_if_missing().await? {
        FetchOutcome::AlreadyPresent { bytes } => println!(
            "{}",
            formatter.info(&format!(
                "Model already present at {} ({} bytes)",
                destination.display(),
                bytes
            ))
        ),
        FetchOutcome::Downloaded { bytes } => println!(
            "{}",
            formatter.success(&format!(
                "Model saved to {} ({} bytes)",
                destination.display(),
                bytes
            ))
        ),
    }

    Ok(())
}
