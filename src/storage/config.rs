//! Local config file reading.
//!
//! The config file is TOML with a `contexts` array naming the kubeconfig
//! sources known to the tool, e.g.:
//!
//! ```toml
//! contexts = ["https://example.com/team/config.yaml"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{KubectxError, Result};

/// Parsed configuration: the kubeconfig sources known to the tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Named kubeconfig sources, in precedence order.
    #[serde(default)]
    pub contexts: Vec<String>,
}

impl Config {
    /// Parse a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns [`KubectxError::ConfigParse`] if the contents are not valid
    /// TOML; the message names the originating path.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| KubectxError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KubectxError::ConfigLoad`] if the file cannot be read, or
    /// [`KubectxError::ConfigParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_config(path)?;
        Self::parse(path, &contents)
    }
}

/// Read an entire config file as text.
///
/// # Errors
///
/// Returns [`KubectxError::ConfigLoad`] carrying the path and the
/// underlying I/O error if the file is missing or unreadable.
pub fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| KubectxError::ConfigLoad {
        path: path.display().to_string(),
        source: e,
    })
}
