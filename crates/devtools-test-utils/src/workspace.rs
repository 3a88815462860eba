//! [`TestWorkspace`] temp directory for file-based tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for writing fixture files.
///
/// # Example
///
/// ```rust
/// use devtools_test_utils::{TestWorkspace, fixtures};
///
/// let ws = TestWorkspace::new();
/// let path = ws.write("catalog.toml", fixtures::SCENARIO_CATALOG_TOML);
/// assert!(path.is_file());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestWorkspace::new: failed to create temp dir"),
        }
    }

    /// Root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path for a relative name inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories, and return the path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestWorkspace::write: failed to create dirs");
        }
        fs::write(&path, content).expect("TestWorkspace::write: failed to write file");
        path
    }
}
