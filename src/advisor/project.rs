//! Locating the React Native project relative to the executable.

use std::path::{Path, PathBuf};

use crate::error::{PackagerError, Result};

/// Marker file whose presence identifies the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Project root and manifest location for one session.
///
/// The root is the parent of the directory holding the executable, so a
/// binary installed at `<project>/tools/app-packager` inspects
/// `<project>/package.json` no matter where it is launched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    manifest: PathBuf,
}

impl ProjectLayout {
    /// Compute the layout for an executable path.
    ///
    /// A relative path is resolved against the current directory first.
    /// When the executable sits directly in a filesystem root, that root
    /// is also the project root.
    pub fn from_executable(exe: &Path) -> Result<Self> {
        let exe = std::path::absolute(exe)?;
        let exe_dir = exe.parent().ok_or_else(|| PackagerError::ExecutableLocation {
            message: format!("{} has no parent directory", exe.display()),
        })?;
        let root = exe_dir.parent().unwrap_or(exe_dir).to_path_buf();
        let manifest = root.join(MANIFEST_FILE);

        Ok(Self { root, manifest })
    }

    /// Compute the layout for the running executable.
    ///
    /// The path comes from `std::env::current_exe`, which on Linux resolves
    /// symlinks: a symlinked install is located relative to the link's
    /// target, not the link itself.
    pub fn current() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| PackagerError::ExecutableLocation {
            message: e.to_string(),
        })?;
        Self::from_executable(&exe)
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the manifest file.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    /// Whether the manifest file exists.
    pub fn manifest_exists(&self) -> bool {
        self.manifest.exists()
    }
}
