//! Workflow template context and registrar configuration.

use serde::{Deserialize, Serialize};

use prodreg_core::ProductName;

use crate::error::RegistrarError;

/// Org-level reusable workflow every product CI delegates to.
pub const DEFAULT_WORKFLOW_REF: &str =
    "loudbinary/.github/.github/workflows/loudbinary-start.yaml@main";

/// Branch whose pushes trigger the product CI.
pub const DEFAULT_BRANCH: &str = "main";

/// Settings for bootstrapping a product repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarConfig {
    /// `uses:` reference of the org-level reusable workflow.
    pub workflow_ref: String,
    pub branch: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            workflow_ref: DEFAULT_WORKFLOW_REF.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Rendering payload for the CI workflow template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowContext {
    pub product_name: String,
    pub branch: String,
    pub workflow_ref: String,
}

impl WorkflowContext {
    pub fn new(product: &ProductName, config: &RegistrarConfig) -> Self {
        Self {
            product_name: product.0.clone(),
            branch: config.branch.clone(),
            workflow_ref: config.workflow_ref.clone(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RegistrarError> {
        tera::Context::from_serialize(self).map_err(RegistrarError::from)
    }
}
