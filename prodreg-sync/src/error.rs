//! Error types for prodreg-sync.

use std::path::PathBuf;

use thiserror::Error;

use prodreg_core::RegistryError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the registry store, including a corrupt store file.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A candidate record failed validation; nothing was merged.
    #[error("invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// An I/O error while reading a registration artifact.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registration artifact is not a `{"name", "description"}` record.
    #[error("malformed registration at {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    /// `true` when the underlying registry file could not be trusted.
    pub fn is_corrupt_registry(&self) -> bool {
        matches!(self, Self::Registry(e) if e.is_corrupt())
    }
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
