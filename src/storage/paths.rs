//! Cache directory resolution.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{KubectxError, Result};

/// Hidden cache subdirectory under the user's home.
pub const CACHE_DIR_NAME: &str = ".kubectx-git";

/// Resolve the default cache directory (`~/.kubectx-git/`).
///
/// # Errors
///
/// Returns [`KubectxError::HomeDirUnavailable`] if the environment cannot
/// supply a home directory. Callers treat this as a fatal initialization
/// failure unless they have a configured fallback location.
pub fn default_cache_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(CACHE_DIR_NAME))
        .ok_or(KubectxError::HomeDirUnavailable)
}
