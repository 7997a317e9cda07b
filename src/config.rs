//! Poet configuration file
//!
//! ```yaml
//! corpus: /path/to/corpus.txt
//! tie_break: largest
//! ```

use crate::poet::{PoetError, PoetResult, TieBreak};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings read from a YAML config file. Missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoetConfig {
    /// Corpus file used when none is given on the command line
    pub corpus: Option<PathBuf>,
    /// Rule for equal-score bridge candidates
    pub tie_break: TieBreak,
}

impl PoetConfig {
    /// Parse a config from YAML text. `origin` names the source in errors.
    pub fn from_yaml(text: &str, origin: impl Into<PathBuf>) -> PoetResult<Self> {
        // An empty file deserializes as YAML null rather than an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| PoetError::Config {
            path: origin.into(),
            source,
        })
    }

    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> PoetResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PoetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read the config at `path` if it exists, else fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> PoetResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Default config location (`<config dir>/graph-poet/config.yaml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("graph-poet").join("config.yaml"))
}
