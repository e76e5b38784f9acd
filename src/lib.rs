/// scaffold-ml library crate.
///
/// Exposes the workspace-provisioning modules as a public API so that
/// integration tests in tests/ can import them via `scaffold_ml::`.
///
/// The binary entry point (src/main.rs) uses these same modules.
pub mod artifact;
pub mod config;
pub mod error;
pub mod requirements;
pub mod workspace;

pub use error::{Error, Result};
