//! On-disk quirk catalog
//!
//! The catalog is a pretty-printed JSON array of [`QuirkSummary`] records,
//! one per registered quirk, so consecutive runs can be diffed.

use crate::registry::QuirkSummary;
use std::io::{Error, ErrorKind};
use std::path::Path;
use tokio::fs;

async fn read_catalog(path: &Path) -> Result<Vec<QuirkSummary>, Error> {
    let contents = fs::read(path).await?;
    serde_json::from_slice(&contents).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

/// Catalog written by a previous run.
///
/// A missing or unreadable catalog yields an empty list.
pub async fn load_catalog(path: &Path) -> Vec<QuirkSummary> {
    match read_catalog(path).await {
        Ok(summaries) => {
            tracing::debug!("Previous catalog {:?} lists {} quirks", path, summaries.len());
            summaries
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No previous catalog at {:?}", path);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Ignoring previous catalog {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Replace the catalog at `path`.
///
/// The JSON is staged next to the target and renamed over it, so readers
/// never see a partial file.
#[allow(clippy::missing_errors_doc)]
pub async fn save_catalog(path: &Path, summaries: &[QuirkSummary]) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }

    let json = serde_json::to_vec_pretty(summaries)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json).await?;
    fs::rename(&staging, path).await?;

    tracing::debug!("Catalog {:?} now lists {} quirks", path, summaries.len());
    Ok(())
}
