//! Well-known file locations, relative to the directory they live in.

use std::path::{Path, PathBuf};

/// Registry store file, relative to the directory the sync runs in.
pub const REGISTRY_FILE: &str = "products.json";

/// Registration artifact written by the registrar inside a product repository.
pub const REGISTRATION_FILE: &str = "product-registration.json";

/// Workflow file written by the registrar inside a product repository.
pub const WORKFLOW_FILE: &str = "ci.yaml";

pub fn github_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(".github")
}

pub fn workflows_dir(repo_root: &Path) -> PathBuf {
    github_dir(repo_root).join("workflows")
}

/// `<repo>/.github/product-registration.json`
pub fn registration_path(repo_root: &Path) -> PathBuf {
    github_dir(repo_root).join(REGISTRATION_FILE)
}

/// `<repo>/.github/workflows/ci.yaml`
pub fn workflow_path(repo_root: &Path) -> PathBuf {
    workflows_dir(repo_root).join(WORKFLOW_FILE)
}

/// `<dir>/products.json`
pub fn registry_path(dir: &Path) -> PathBuf {
    dir.join(REGISTRY_FILE)
}
