//! Shared test fixtures for the devtools workspace.
//!
//! Dev-dependency only. The fixtures are plain text so that any crate,
//! including `devtools-catalog` itself, can use them without a dependency
//! cycle.
//!
//! # Modules
//!
//! - [`fixtures`] - catalog and config documents in every supported format
//! - [`workspace`] - [`TestWorkspace`] temp directory for file-based tests

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
