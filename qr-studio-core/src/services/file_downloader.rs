//! Saves generated images into the download directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::traits::Downloader;

/// Fallback name when the requested file name is empty
pub const DEFAULT_FILENAME: &str = "qr-code.png";

/// Reduce `filename` to a safe file name inside the download directory.
///
/// Keeps only the last path component. An empty name becomes `qr-code.png`,
/// a name without extension gets `.png`.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return DEFAULT_FILENAME.to_string();
    }

    if Path::new(name).extension().is_none() {
        format!("{name}.png")
    } else {
        name.to_string()
    }
}

/// HTTP-backed [`Downloader`]
#[derive(Debug, Clone)]
pub struct FileDownloader {
    client: Client,
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>, timeout: Duration) -> StudioResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StudioError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            dir: dir.into(),
        })
    }

    pub fn from_config(config: &StudioConfig) -> StudioResult<Self> {
        Self::new(config.resolved_download_dir(), config.request_timeout())
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Downloader for FileDownloader {
    async fn download(&self, image_url: &str, filename: &str) -> StudioResult<PathBuf> {
        debug!("[Download] GET {image_url}");

        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|e| StudioError::Download(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StudioError::Download(format!(
                "HTTP {} from {image_url}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StudioError::Download(format!("failed to read body: {e}")))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StudioError::Download(format!("{}: {e}", self.dir.display())))?;

        let path = self.dir.join(sanitize_filename(filename));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| StudioError::Download(format!("{}: {e}", path.display())))?;

        info!("[Download] Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
