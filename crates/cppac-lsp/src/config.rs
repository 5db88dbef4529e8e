//! Engine configuration (`cppac.json`).

use std::path::{Path, PathBuf};

use cppac_common::limits::{DEFAULT_SYSTEM_INCLUDE_ROOT, MAX_INCLUDE_DEPTH};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// File name looked up by `EngineConfig::discover`.
pub const CONFIG_FILE_NAME: &str = "cppac.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Directory that `<name>` includes are resolved against.
    pub system_include_root: String,
    /// Longest include chain followed while populating the document graph.
    pub max_include_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            system_include_root: DEFAULT_SYSTEM_INCLUDE_ROOT.to_string(),
            max_include_depth: MAX_INCLUDE_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Load a config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse config text; `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<EngineConfig, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `cppac.json` from `root` if it exists, defaults otherwise.
    pub fn discover(root: &Path) -> Result<EngineConfig, ConfigError> {
        match find_config(root) {
            Some(path) => {
                debug!(path = %path.display(), "loading engine config");
                Self::load(&path)
            }
            None => Ok(EngineConfig::default()),
        }
    }
}

pub fn find_config(root: &Path) -> Option<PathBuf> {
    let candidate = root.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
