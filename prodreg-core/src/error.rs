//! Error types for prodreg-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry store operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Underlying I/O failure (permission denied, missing directory, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not JSON of the shape `{"products": [...]}`.
    #[error("corrupt registry at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store file parses but breaks a registry invariant.
    #[error("corrupt registry at {path}: {reason}")]
    Inconsistent { path: PathBuf, reason: String },

    /// JSON serialization error (save path).
    #[error("registry serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RegistryError {
    /// `true` when the store file exists but cannot be trusted as a registry.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. } | Self::Inconsistent { .. })
    }
}

/// Convenience constructor for [`RegistryError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.into(),
        source,
    }
}
