//! `prodreg start --product-name <name> [--description <desc>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use prodreg_registrar::{context::DEFAULT_WORKFLOW_REF, registrar, RegistrarConfig};

/// Bootstrap a product repository.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Product name (slug), e.g. "starter".
    #[arg(long)]
    pub product_name: String,

    /// Short product description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Product repository root.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Org-level reusable workflow the CI delegates to.
    #[arg(long, value_name = "REF", default_value = DEFAULT_WORKFLOW_REF)]
    pub workflow_ref: String,
}

impl StartArgs {
    pub fn run(self) -> Result<()> {
        let config = RegistrarConfig {
            workflow_ref: self.workflow_ref,
            ..RegistrarConfig::default()
        };
        let outcome = registrar::start(&self.dir, &self.product_name, &self.description, &config)
            .with_context(|| {
                format!(
                    "failed to start '{}' in '{}'",
                    self.product_name,
                    self.dir.display()
                )
            })?;

        println!("Created workflow: {}", outcome.workflow_path.display());
        println!(
            "Wrote product registration: {}",
            outcome.registration_path.display()
        );
        println!("Product start complete");
        Ok(())
    }
}
