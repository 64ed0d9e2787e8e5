//! `prodreg list` — show the registered products.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use prodreg_core::{paths::REGISTRY_FILE, RegistryStore};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Registry file to read.
    #[arg(long, value_name = "PATH", default_value = REGISTRY_FILE)]
    pub registry: PathBuf,

    /// Emit the registry as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "product")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let store = RegistryStore::new(&self.registry);
        let registry = store
            .load()
            .with_context(|| format!("failed to load '{}'", self.registry.display()))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&registry).context("failed to serialize registry")?
            );
            return Ok(());
        }

        if registry.is_empty() {
            println!("No products registered.");
            return Ok(());
        }

        let rows: Vec<ProductRow> = registry
            .products
            .into_iter()
            .map(|p| ProductRow {
                name: p.name.0,
                description: p.description,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
