//! Discovery — reads registration artifacts out of product repositories.
//!
//! Each registered repository carries `.github/product-registration.json`
//! holding a single `{"name", "description"}` record.

use std::path::{Path, PathBuf};

use prodreg_core::{paths, ProductRecord};

use crate::error::{io_err, SyncError};

/// `<repo_root>/.github/product-registration.json`
pub fn registration_path(repo_root: &Path) -> PathBuf {
    paths::registration_path(repo_root)
}

/// Parse a single registration artifact.
///
/// A record without a name parses fine here; the sync engine rejects it.
pub fn read_registration(path: &Path) -> Result<ProductRecord, SyncError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&contents).map_err(|e| SyncError::Artifact {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Collect the registration record of every repository in `repo_roots`.
///
/// Order follows `repo_roots`. Repositories without an artifact are skipped.
pub fn collect<P: AsRef<Path>>(repo_roots: &[P]) -> Result<Vec<ProductRecord>, SyncError> {
    let mut records = Vec::new();
    for root in repo_roots {
        let path = registration_path(root.as_ref());
        if !path.is_file() {
            tracing::debug!("no registration in {}", root.as_ref().display());
            continue;
        }
        let record = read_registration(&path)?;
        tracing::debug!("found registration for '{}' at {}", record.name, path.display());
        records.push(record);
    }
    Ok(records)
}
