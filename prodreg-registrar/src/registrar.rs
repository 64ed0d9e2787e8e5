//! Product repository bootstrap.
//!
//! Writes, relative to the repository root:
//!
//! ```text
//! .github/
//!   workflows/ci.yaml              (CI hooked into the org reusable workflow)
//!   product-registration.json      {"name": ..., "description": ...}
//! ```
//!
//! The registrar never touches the org registry itself; the sync discovers
//! the registration file later.

use std::path::{Path, PathBuf};

use prodreg_core::{paths, write_atomic, ProductName, ProductRecord};

use crate::context::{RegistrarConfig, WorkflowContext};
use crate::engine::WorkflowRenderer;
use crate::error::RegistrarError;

/// Files produced by [`start`].
#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    pub record: ProductRecord,
    pub workflow_path: PathBuf,
    pub registration_path: PathBuf,
}

/// Render the CI workflow for `product` into `<repo_root>/.github/workflows/ci.yaml`.
pub fn write_workflow(
    repo_root: &Path,
    product: &ProductName,
    config: &RegistrarConfig,
) -> Result<PathBuf, RegistrarError> {
    let renderer = WorkflowRenderer::new()?;
    let content = renderer.render(&WorkflowContext::new(product, config))?;
    let path = paths::workflow_path(repo_root);
    write_atomic(&path, content.as_bytes())?;
    tracing::info!("wrote workflow: {}", path.display());
    Ok(path)
}

/// Write `record` to `<repo_root>/.github/product-registration.json`.
pub fn register_product(repo_root: &Path, record: &ProductRecord) -> Result<PathBuf, RegistrarError> {
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    let path = paths::registration_path(repo_root);
    write_atomic(&path, json.as_bytes())?;
    tracing::info!("wrote registration: {}", path.display());
    Ok(path)
}

/// Bootstrap the product repository at `repo_root`.
///
/// Produces exactly one [`ProductRecord`]. Non-slug names are accepted with a
/// warning; blank names are rejected before anything is written.
pub fn start(
    repo_root: &Path,
    name: &str,
    description: &str,
    config: &RegistrarConfig,
) -> Result<StartOutcome, RegistrarError> {
    let name = ProductName::from(name);
    if name.is_blank() {
        return Err(RegistrarError::EmptyName);
    }
    if !name.is_slug() {
        tracing::warn!("product name '{name}' is not a lowercase hyphenated slug");
    }

    let record = ProductRecord::new(name, description);
    let workflow_path = write_workflow(repo_root, &record.name, config)?;
    let registration_path = register_product(repo_root, &record)?;

    Ok(StartOutcome {
        record,
        workflow_path,
        registration_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn blank_name_writes_nothing() {
        let repo = TempDir::new().unwrap();
        let err = start(repo.path(), "  ", "desc", &RegistrarConfig::default()).unwrap_err();
        assert!(matches!(err, RegistrarError::EmptyName));
        assert!(!repo.path().join(".github").exists());
    }

    #[test]
    fn rerun_overwrites_previous_registration() {
        let repo = TempDir::new().unwrap();
        let config = RegistrarConfig::default();
        start(repo.path(), "widget", "old", &config).unwrap();
        let outcome = start(repo.path(), "widget", "new", &config).unwrap();

        let text = fs::read_to_string(&outcome.registration_path).unwrap();
        assert!(text.contains("\"new\""));
        assert!(!text.contains("\"old\""));
    }

    #[test]
    fn non_slug_name_is_accepted() {
        let repo = TempDir::new().unwrap();
        let outcome = start(repo.path(), "Widget Pro", "", &RegistrarConfig::default()).unwrap();
        assert_eq!(outcome.record.name.as_str(), "Widget Pro");
    }
}
