//! Tera rendering engine for the product CI workflow.

use tera::Tera;

use crate::context::WorkflowContext;
use crate::error::RegistrarError;

const WORKFLOW_TEMPLATE: &str = "ci.yaml.tera";

// Embedded template, baked into the binary at compile time.
const TPLS: &[(&str, &str)] = &[(WORKFLOW_TEMPLATE, include_str!("templates/ci.yaml.tera"))];

/// Renders the CI workflow. Create once with [`WorkflowRenderer::new`] and reuse.
pub struct WorkflowRenderer {
    tera: Tera,
}

impl WorkflowRenderer {
    pub fn new() -> Result<Self, RegistrarError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TPLS.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render the workflow YAML for `ctx`.
    pub fn render(&self, ctx: &WorkflowContext) -> Result<String, RegistrarError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(WORKFLOW_TEMPLATE, &tera_ctx)?)
    }
}
