//! Top-packages use case: fetch a contents index and rank packages by the
//! number of files they own.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::Client;
use std::path::PathBuf;

use crate::contents::ContentsReader;
use crate::download::download_to_temp;
use crate::http::HttpClient;
use crate::mirror;
use crate::stats::{PackageCount, PackageCounts};

/// Options controlling where the contents index is fetched from and whether
/// the downloaded artifact is kept.
#[derive(Debug, Clone)]
pub struct TopPackagesOptions {
    /// Mirror base URL.
    pub mirror: String,
    /// Distribution suite.
    pub suite: String,
    /// Persist the downloaded index as `Contents-<arch>.gz` in the current
    /// directory instead of deleting it.
    pub keep_download: bool,
}

impl Default for TopPackagesOptions {
    fn default() -> Self {
        Self {
            mirror: mirror::DEFAULT_MIRROR.to_string(),
            suite: mirror::DEFAULT_SUITE.to_string(),
            keep_download: false,
        }
    }
}

/// Result of a run: the ranked packages plus summary figures.
#[derive(Debug)]
pub struct PackageStatistics {
    /// The requested number of packages (or fewer), best first.
    pub top: Vec<PackageCount>,
    /// Distinct packages seen in the index.
    pub distinct_packages: usize,
    /// Total (file, package) associations counted.
    pub total_associations: u64,
    /// Malformed lines skipped during parsing.
    pub skipped_lines: u64,
}

/// Downloads the contents index for `arch` and returns the `limit` packages
/// owning the most files.
///
/// The architecture is validated before any network activity. The downloaded
/// index lives in a temporary file that is removed when the function returns,
/// on success and on error alike, unless `keep_download` is set.
#[tracing::instrument(skip(options))]
pub async fn top_packages(
    arch: &str,
    limit: usize,
    options: &TopPackagesOptions,
) -> Result<PackageStatistics> {
    mirror::validate_architecture(arch)?;
    let url = mirror::contents_url(&options.mirror, &options.suite, arch);

    let http_client = HttpClient::new(Client::new());
    let download = download_to_temp(&http_client, &url).await?;

    let file = download
        .reopen()
        .context("Failed to reopen downloaded contents index")?;
    let mut reader = ContentsReader::from_gzip(file);

    let mut counts = PackageCounts::new();
    for entry in &mut reader {
        let entry = entry.context("Failed to read contents index")?;
        counts.observe(&entry);
    }

    let skipped_lines = reader.skipped_lines();
    if skipped_lines > 0 {
        warn!("Skipped {} malformed lines in contents index", skipped_lines);
    }
    debug!(
        "Counted {} associations across {} distinct packages",
        counts.total_associations(),
        counts.len()
    );

    let statistics = PackageStatistics {
        distinct_packages: counts.len(),
        total_associations: counts.total_associations(),
        skipped_lines,
        top: counts.top(limit),
    };

    if options.keep_download {
        let dest = PathBuf::from(format!("Contents-{}.gz", arch));
        download
            .persist(&dest)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to keep downloaded index at {:?}", dest))?;
        info!("Kept downloaded index at {:?}", dest);
    }

    Ok(statistics)
}
