//! File-system catalog of protocol definition files
//!
//! Protocol definition files are opaque; only the file-stem-derived
//! version identifier matters here. Listing a directory yields the
//! candidate versions the resolver can hand out, in no particular order.

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Extension protocol definition files are stored with.
const PROTOCOL_FILE_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read protocol directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of candidate protocol versions.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// List the version identifiers available from this source.
    ///
    /// Ordering is not guaranteed; callers must not assume sorted input.
    async fn list_candidate_versions(&self) -> Result<Vec<String>, CatalogError>;
}

/// Directory-backed candidate source.
///
/// Each regular file under the base path contributes its file stem as a
/// candidate version, e.g. `0.5.1-beta.rc2.json` -> `0.5.1-beta.rc2`.
pub struct FsCatalog {
    base_path: PathBuf,
}

impl FsCatalog {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Map a resolved version identifier back to its file path.
    pub fn resolve_file_path(&self, version: &str) -> PathBuf {
        self.base_path
            .join(format!("{version}.{PROTOCOL_FILE_EXTENSION}"))
    }
}

#[async_trait]
impl CandidateSource for FsCatalog {
    async fn list_candidate_versions(&self) -> Result<Vec<String>, CatalogError> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await?;
        let mut versions = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(stem) = entry.path().file_stem().and_then(|stem| stem.to_str()) {
                versions.push(stem.to_string());
            }
        }
        Ok(versions)
    }
}
