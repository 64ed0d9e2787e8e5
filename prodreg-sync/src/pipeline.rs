//! Shared sync pipeline entrypoint used by the CLI.

use std::path::PathBuf;

use prodreg_core::{ProductRecord, RegistryStore};

use crate::{discover, engine, SyncError, SyncReport};

/// Where a sync batch comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncSource {
    /// Records supplied directly by the caller.
    Records(Vec<ProductRecord>),
    /// Product repositories to read registration artifacts from.
    Repos(Vec<PathBuf>),
}

/// Batch synced when the caller supplies nothing.
pub fn default_batch() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new("starter", "Loudbinary Starter Package"),
        ProductRecord::new("pro", "Loudbinary Pro Package"),
    ]
}

/// Resolve `source` into a batch and sync it into `store`.
pub fn run(
    store: &RegistryStore,
    source: SyncSource,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let items = match source {
        SyncSource::Records(items) => items,
        SyncSource::Repos(roots) => discover::collect(roots.as_slice())?,
    };
    engine::sync_with(store, items, dry_run)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use prodreg_core::{paths, ProductName};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn run_records_syncs_default_batch() {
        let dir = TempDir::new().expect("dir");
        let store = RegistryStore::default_in(dir.path());
        let report = run(&store, SyncSource::Records(default_batch()), false).expect("run");
        assert_eq!(report.added.len(), 2);
        assert_eq!(report.total, 2);
    }

    #[test]
    fn run_repos_reads_registrations() {
        let dir = TempDir::new().expect("dir");
        let repo = dir.path().join("widget");
        let artifact = paths::registration_path(&repo);
        fs::create_dir_all(artifact.parent().unwrap()).expect("mkdir");
        fs::write(&artifact, r#"{"name": "widget", "description": "W"}"#).expect("write");

        let store = RegistryStore::default_in(dir.path());
        let report = run(&store, SyncSource::Repos(vec![repo]), false).expect("run");
        assert_eq!(report.added, vec![ProductName::from("widget")]);
        assert_eq!(store.load().expect("load").products[0].description, "W");
    }
}
