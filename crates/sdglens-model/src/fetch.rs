//! Artifact download

use crate::artifact::LoadedArtifact;
use crate::config::ModelConfig;
use crate::error::ModelError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

const PROGRESS_STEP_BYTES: u64 = 10 * 1024 * 1024;

/// Result of [`ArtifactFetcher::fetch_if_missing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination already existed; nothing was downloaded
    AlreadyPresent {
        /// Size of the existing file
        bytes: u64,
    },
    /// The artifact was downloaded and verified
    Downloaded {
        /// Bytes written
        bytes: u64,
    },
}

/// Downloads the model artifact when it is not on disk
///
/// The body is streamed into `<destination>.part` and renamed into place
/// once complete, so a crashed download never leaves a truncated artifact
/// at the real path. The renamed file is then parsed; if it does not load,
/// it is deleted and the fetch fails.
#[derive(Debug, Clone)]
pub struct ArtifactFetcher {
    client: Client,
    url: String,
    destination: PathBuf,
}

impl ArtifactFetcher {
    /// Fetcher for `url` writing to `destination`
    pub fn new(
        url: impl Into<String>,
        destination: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::Download(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            destination: destination.into(),
        })
    }

    /// Fetcher built from configuration; `None` when no download URL is set
    pub fn from_config(config: &ModelConfig) -> Result<Option<Self>, ModelError> {
        match config.download_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Some(Self::new(
                url,
                config.artifact_path(),
                config.download_timeout(),
            )?)),
            _ => Ok(None),
        }
    }

    /// Source URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Destination path
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Download the artifact unless the destination already exists
    pub async fn fetch_if_missing(&self) -> Result<FetchOutcome, ModelError> {
        if let Ok(meta) = tokio::fs::metadata(&self.destination).await {
            if meta.is_file() {
                debug!("Model artifact already present at {}", self.destination.display());
                return Ok(FetchOutcome::AlreadyPresent { bytes: meta.len() });
            }
        }

        if let Some(parent) = self.destination.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        info!("Downloading model artifact from {}", self.url);
        let partial = self.partial_path();
        let bytes = match self.download_to(&partial).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        tokio::fs::rename(&partial, &self.destination).await?;

        if let Err(e) = self.verify().await {
            warn!(
                "Downloaded artifact at {} failed to load, removing it: {}",
                self.destination.display(),
                e
            );
            let _ = tokio::fs::remove_file(&self.destination).await;
            return Err(e);
        }

        info!(
            "Model artifact saved to {} ({} bytes)",
            self.destination.display(),
            bytes
        );
        Ok(FetchOutcome::Downloaded { bytes })
    }

    async fn download_to(&self, partial: &Path) -> Result<u64, ModelError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ModelError::Download(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Download(format!(
                "server returned {} for {}",
                status, self.url
            )));
        }

        let mut file = tokio::fs::File::create(partial).await?;
        let mut written: u64 = 0;
        let mut next_report = PROGRESS_STEP_BYTES;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ModelError::Download(format!("body read failed: {}", e)))?
        {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            if written >= next_report {
                info!("Downloaded {} MiB", written / (1024 * 1024));
                next_report += PROGRESS_STEP_BYTES;
            }
        }

        file.flush().await?;
        Ok(written)
    }

    async fn verify(&self) -> Result<(), ModelError> {
        let path = self.destination.clone();
        tokio::task::spawn_blocking(move || LoadedArtifact::from_file(path).map(|_| ()))
            .await
            .map_err(|e| ModelError::Download(format!("verification task failed: {}", e)))?
    }

    fn partial_path(&self) -> PathBuf {
        let mut name = self
            .destination
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".part");
        self.destination.with_file_name(name)
    }
}
