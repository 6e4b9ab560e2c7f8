//! Downloads a contents index to transient storage.

use crate::http::HttpClient;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use tempfile::NamedTempFile;

/// Downloads the resource at `url` into a named temporary file.
///
/// The file is deleted when the returned handle is dropped, so the artifact
/// never outlives the caller's scope unless it is explicitly persisted.
#[tracing::instrument(skip(http_client))]
pub async fn download_to_temp(http_client: &HttpClient, url: &str) -> Result<NamedTempFile> {
    info!("Downloading contents index from {}...", url);

    let temp = NamedTempFile::new().context("Failed to create temporary file for download")?;
    let temp_path = temp.path().to_path_buf();

    // Reopen the path per attempt so a retry truncates any partial write.
    http_client
        .download_file(url, || {
            File::create(&temp_path)
                .with_context(|| format!("Failed to open temporary file at {:?}", temp_path))
        })
        .await?;

    info!("Download complete.");
    Ok(temp)
}
