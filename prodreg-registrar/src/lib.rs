//! # prodreg-registrar
//!
//! Bootstraps a product repository: renders the CI workflow that hooks the
//! repository into the org-level reusable workflow, and writes the
//! registration artifact that the sync later picks up.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use prodreg_registrar::{start, RegistrarConfig};
//!
//! let outcome = start(Path::new("."), "widget", "Widget service", &RegistrarConfig::default());
//! if let Ok(outcome) = outcome {
//!     println!("registered {}", outcome.record.name);
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod registrar;

pub use context::{RegistrarConfig, WorkflowContext};
pub use engine::WorkflowRenderer;
pub use error::RegistrarError;
pub use registrar::{register_product, start, write_workflow, StartOutcome};
