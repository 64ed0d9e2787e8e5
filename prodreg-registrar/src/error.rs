//! Error types for prodreg-registrar.

use thiserror::Error;

use prodreg_core::RegistryError;

/// All errors that can arise while bootstrapping a product repository.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// The product name is empty or whitespace.
    #[error("product name must not be empty")]
    EmptyName,

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization error (template context or registration artifact).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing an artifact failed.
    #[error("write error: {0}")]
    Store(#[from] RegistryError),
}
