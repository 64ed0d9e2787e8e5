//! Sync engine — merges a batch of candidate records into the registry.
//!
//! ## `sync` — 5-step protocol
//!
//! 1. Trim surrounding whitespace off every candidate name, then validate
//!    every candidate (non-blank name) before touching anything.
//! 2. Load the registry from the store.
//! 3. Build the set of existing names once.
//! 4. Append candidates whose name is unseen, in input order; the name joins
//!    the set so later duplicates in the same batch are dropped too.
//! 5. Save the full registry (skipped in dry-run).
//!
//! First occurrence of a name always wins. Existing records are never
//! updated, reordered or removed.

use std::collections::HashSet;

use prodreg_core::{ProductName, ProductRecord, Registry, RegistryStore};

use crate::error::SyncError;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of the in-memory merge step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Names appended to the registry, in the order they were appended.
    pub added: Vec<ProductName>,
    /// Names of candidates dropped because the name was already taken.
    pub skipped: Vec<ProductName>,
}

/// Outcome of a full sync against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<ProductName>,
    pub skipped: Vec<ProductName>,
    /// Product count after the merge.
    pub total: usize,
    /// `true` if the store was left untouched on purpose.
    pub dry_run: bool,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Strip surrounding whitespace from every candidate name.
///
/// `" pro "` and `"pro"` name the same product.
pub fn normalize_batch(items: Vec<ProductRecord>) -> Vec<ProductRecord> {
    items
        .into_iter()
        .map(|mut item| {
            let trimmed = item.name.0.trim().to_string();
            if trimmed.len() != item.name.0.len() {
                item.name = ProductName(trimmed);
            }
            item
        })
        .collect()
}

/// Reject the batch if any candidate has a blank name.
pub fn validate_batch(items: &[ProductRecord]) -> Result<(), SyncError> {
    match items.iter().position(|item| item.name.is_blank()) {
        Some(index) => Err(SyncError::InvalidRecord {
            index,
            reason: "record has no name".to_string(),
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Append every candidate whose name is not yet in `registry`.
///
/// Does not validate; callers go through [`validate_batch`] first.
pub fn merge(registry: &mut Registry, items: Vec<ProductRecord>) -> MergeOutcome {
    let mut existing: HashSet<ProductName> = registry.names().cloned().collect();
    let mut outcome = MergeOutcome::default();

    for item in items {
        if existing.contains(&item.name) {
            tracing::debug!("already registered: {}", item.name);
            outcome.skipped.push(item.name);
            continue;
        }
        existing.insert(item.name.clone());
        outcome.added.push(item.name.clone());
        registry.products.push(item);
    }
    outcome
}

// ---------------------------------------------------------------------------
// sync
// ---------------------------------------------------------------------------

/// Merge `items` into the registry held by `store` and persist the result.
pub fn sync(store: &RegistryStore, items: Vec<ProductRecord>) -> Result<SyncReport, SyncError> {
    sync_with(store, items, false)
}

/// [`sync`], optionally without writing the store.
pub fn sync_with(
    store: &RegistryStore,
    items: Vec<ProductRecord>,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let items = normalize_batch(items);
    validate_batch(&items)?;

    let mut registry = store.load()?;
    let MergeOutcome { added, skipped } = merge(&mut registry, items);

    for name in &added {
        if dry_run {
            tracing::info!("[dry-run] would add: {name}");
        } else {
            tracing::info!("added: {name}");
        }
    }

    if !dry_run {
        store.save(&registry)?;
    }

    Ok(SyncReport {
        added,
        skipped,
        total: registry.len(),
        dry_run,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rec(name: &str, description: &str) -> ProductRecord {
        ProductRecord::new(name, description)
    }

    fn names(list: &[ProductName]) -> Vec<&str> {
        list.iter().map(ProductName::as_str).collect()
    }

    #[test]
    fn merge_into_empty_registry_adds_all_in_order() {
        let mut reg = Registry::default();
        let outcome = merge(&mut reg, vec![rec("b", ""), rec("a", ""), rec("c", "")]);
        assert_eq!(names(&outcome.added), ["b", "a", "c"]);
        assert!(outcome.skipped.is_empty());
        let stored: Vec<&str> = reg.names().map(ProductName::as_str).collect();
        assert_eq!(stored, ["b", "a", "c"]);
    }

    #[test]
    fn merge_keeps_existing_description() {
        let mut reg = Registry::default();
        merge(&mut reg, vec![rec("a", "first")]);
        let outcome = merge(&mut reg, vec![rec("a", "second")]);
        assert!(outcome.added.is_empty());
        assert_eq!(names(&outcome.skipped), ["a"]);
        assert_eq!(reg.products, vec![rec("a", "first")]);
    }

    #[test]
    fn merge_drops_in_batch_duplicates() {
        let mut reg = Registry::default();
        let outcome = merge(&mut reg, vec![rec("x", "A"), rec("x", "B")]);
        assert_eq!(names(&outcome.added), ["x"]);
        assert_eq!(names(&outcome.skipped), ["x"]);
        assert_eq!(reg.products, vec![rec("x", "A")]);
    }

    #[test]
    fn merge_empty_batch_is_noop() {
        let mut reg = Registry::default();
        merge(&mut reg, vec![rec("a", "")]);
        let before = reg.clone();
        let outcome = merge(&mut reg, vec![]);
        assert_eq!(outcome, MergeOutcome::default());
        assert_eq!(reg, before);
    }

    #[test]
    fn normalize_trims_names_only() {
        let items = normalize_batch(vec![rec(" pro\t", " keep "), rec("lite", "")]);
        assert_eq!(items[0], rec("pro", " keep "));
        assert_eq!(items[1], rec("lite", ""));
    }

    #[test]
    fn validate_reports_first_blank_index() {
        let err = validate_batch(&[rec("a", ""), rec("  ", ""), rec("", "")]).unwrap_err();
        assert!(matches!(err, SyncError::InvalidRecord { index: 1, .. }), "got: {err}");
    }

    #[test]
    fn invalid_batch_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let store = RegistryStore::default_in(dir.path());
        sync(&store, vec![rec("a", "")]).unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = sync(&store, vec![rec("b", ""), rec("", "nameless")]).unwrap_err();
        assert!(matches!(err, SyncError::InvalidRecord { index: 1, .. }));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn invalid_batch_does_not_create_store() {
        let dir = TempDir::new().unwrap();
        let store = RegistryStore::default_in(dir.path());
        assert!(sync(&store, vec![rec("", "")]).is_err());
        assert!(!store.exists());
    }

    #[test]
    fn empty_batch_against_missing_store_writes_empty_registry() {
        let dir = TempDir::new().unwrap();
        let store = RegistryStore::default_in(dir.path());
        let report = sync(&store, vec![]).unwrap();
        assert!(report.is_noop());
        assert_eq!(report.total, 0);
        assert!(store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn dry_run_does_not_write_store() {
        let dir = TempDir::new().unwrap();
        let store = RegistryStore::default_in(dir.path());
        let report = sync_with(&store, vec![rec("a", "")], true).unwrap();
        assert!(report.dry_run);
        assert_eq!(names(&report.added), ["a"]);
        assert_eq!(report.total, 1);
        assert!(!store.exists(), "dry-run must not create files");
    }

    #[test]
    fn corrupt_store_is_propagated_and_preserved() {
        let dir = TempDir::new().unwrap();
        let store = RegistryStore::default_in(dir.path());
        fs::write(store.path(), "not json at all").unwrap();

        let err = sync(&store, vec![rec("a", "")]).unwrap_err();
        assert!(err.is_corrupt_registry(), "got: {err}");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json at all");
    }
}
