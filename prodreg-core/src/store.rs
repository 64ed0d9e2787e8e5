//! Registry store — the single JSON file that holds every registered product.
//!
//! # Storage layout
//!
//! ```text
//! <dir>/
//!   products.json       {"products": [{"name": ..., "description": ...}, ...]}
//!   products.json.tmp   (only present while a save is in flight)
//! ```
//!
//! `load` reads the whole file; `save` rewrites the whole file through a
//! `.tmp` sibling and a rename, so a reader sees either the old or the new
//! registry. There is no locking: two concurrent saves race and the last
//! rename wins.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{io_err, RegistryError};
use crate::paths;
use crate::types::Registry;

// ---------------------------------------------------------------------------
// 1. Atomic write
// ---------------------------------------------------------------------------

/// `<path>.tmp`, always in the same directory as the target.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically replace `path` with `contents`.
///
/// Write flow: create parent dirs → write `<path>.tmp` → `rename`.
/// The `.tmp` file is removed if the rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), RegistryError> {
    write_atomic_with_tmp(path, contents, &tmp_path(path))
}

fn write_atomic_with_tmp(path: &Path, contents: &[u8], tmp: &Path) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, contents).map_err(|e| io_err(tmp, e))?;
    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 2. Store
// ---------------------------------------------------------------------------

/// Handle on a registry file. Holds no registry state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/products.json`.
    pub fn default_in(dir: &Path) -> Self {
        Self::new(paths::registry_path(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the registry.
    ///
    /// Returns an empty registry if the file does not exist,
    /// [`RegistryError::Corrupt`] if it is not a registry document, and
    /// [`RegistryError::Inconsistent`] if it holds blank or duplicate names.
    pub fn load(&self) -> Result<Registry, RegistryError> {
        let present = self.path.try_exists().map_err(|e| io_err(&self.path, e))?;
        if !present {
            tracing::debug!("no registry at {}, starting empty", self.path.display());
            return Ok(Registry::default());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| io_err(&self.path, e))?;
        let registry: Registry =
            serde_json::from_str(&contents).map_err(|e| RegistryError::Corrupt {
                path: self.path.clone(),
                source: e,
            })?;
        self.check_invariants(&registry)?;
        Ok(registry)
    }

    /// Serialize the full registry and atomically replace the store file.
    pub fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        let mut json = serde_json::to_string_pretty(registry)?;
        json.push('\n');
        write_atomic(&self.path, json.as_bytes())?;
        tracing::info!(
            "saved {} product(s) to {}",
            registry.len(),
            self.path.display()
        );
        Ok(())
    }

    fn check_invariants(&self, registry: &Registry) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        for (index, product) in registry.products.iter().enumerate() {
            if product.name.is_blank() {
                return Err(self.inconsistent(format!("product #{index} has no name")));
            }
            if !seen.insert(&product.name) {
                return Err(self.inconsistent(format!(
                    "product '{}' is registered more than once",
                    product.name
                )));
            }
        }
        Ok(())
    }

    fn inconsistent(&self, reason: String) -> RegistryError {
        RegistryError::Inconsistent {
            path: self.path.clone(),
            reason,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
