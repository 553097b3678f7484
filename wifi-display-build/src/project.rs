//! Project layout.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// File marking the project root directory.
pub const MARKER: &str = "platformio.ini";

/// Developer override file.
pub const ENV_LOCAL: &str = ".env.local";

/// Example override file shipped with the project.
pub const ENV_EXAMPLE: &str = ".env.example";

/// Finds the project root by walking upwards from `start` until a directory
/// containing `marker` is found.
pub fn find_root(start: &Path, marker: &str) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::ProjectRootNotFound { start: start.to_path_buf(), marker: marker.to_string() })
}

/// Paths of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project root directory.
    pub root: PathBuf,
}

impl Project {
    /// Project rooted at the specified directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project containing the specified directory.
    pub fn discover(start: &Path) -> Result<Self> {
        Ok(Self::new(find_root(start, MARKER)?))
    }

    /// Path of the developer override file.
    pub fn env_local(&self) -> PathBuf {
        self.root.join(ENV_LOCAL)
    }

    /// Path of the example override file.
    pub fn env_example(&self) -> PathBuf {
        self.root.join(ENV_EXAMPLE)
    }

    /// Override file to read settings from.
    ///
    /// Uses `.env.local` if present, otherwise `.env.example`.
    pub fn env_file(&self) -> PathBuf {
        let local = self.env_local();
        if local.is_file() {
            local
        } else {
            self.env_example()
        }
    }

    /// Path of the generated header.
    pub fn header(&self) -> PathBuf {
        self.root.join("include").join("configs.h")
    }
}
