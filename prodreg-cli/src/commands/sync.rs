//! `prodreg sync` — merge product records into the registry.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use prodreg_core::{paths::REGISTRY_FILE, ProductName, ProductRecord, RegistryStore};
use prodreg_sync::{
    pipeline::{self, SyncSource},
    SyncReport,
};

/// Arguments for `prodreg sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Registry file to merge into.
    #[arg(long, value_name = "PATH", default_value = REGISTRY_FILE)]
    pub registry: PathBuf,

    /// Product to register, as `name` or `name=description`. Repeatable.
    #[arg(long = "item", value_name = "NAME[=DESC]")]
    pub items: Vec<ItemArg>,

    /// Product repository to read `.github/product-registration.json` from. Repeatable.
    #[arg(long = "repo", value_name = "DIR", conflicts_with = "items")]
    pub repos: Vec<PathBuf>,

    /// Show what would be added without writing the registry.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let store = RegistryStore::new(&self.registry);
        let source = if !self.repos.is_empty() {
            SyncSource::Repos(self.repos)
        } else if !self.items.is_empty() {
            SyncSource::Records(self.items.into_iter().map(ProductRecord::from).collect())
        } else {
            SyncSource::Records(pipeline::default_batch())
        };

        let report = pipeline::run(&store, source, self.dry_run)
            .with_context(|| format!("sync failed for '{}'", self.registry.display()))?;
        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &SyncReport) {
    let prefix = if report.dry_run { "[dry-run] " } else { "" };
    if report.added.is_empty() {
        println!("{prefix}Products already up to date, nothing to sync");
    } else {
        let names: Vec<&str> = report.added.iter().map(ProductName::as_str).collect();
        println!(
            "{prefix}Synced {} product(s): {}",
            report.added.len(),
            names.join(", ")
        );
    }
    println!("{prefix}Sync complete");
}

// ---------------------------------------------------------------------------
// `--item name=description`
// ---------------------------------------------------------------------------

/// A product record parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub name: String,
    pub description: String,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, description) = s.split_once('=').unwrap_or((s, ""));
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}

impl fmt::Display for ItemArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.description)
    }
}

impl From<ItemArg> for ProductRecord {
    fn from(item: ItemArg) -> Self {
        ProductRecord::new(item.name, item.description)
    }
}
