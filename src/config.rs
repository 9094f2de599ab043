use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::{Context, Result};

use crate::utils::limits::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_STRING_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Bytes reserved up front by a new encoder
    pub initial_capacity: usize,
    /// Longest prefixed string accepted on append or read, in UTF-8 bytes
    pub max_string_len: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading codec config {:?}", path))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing codec config {:?}", path))?;
        tracing::debug!(?path, ?config, "loaded codec config");
        Ok(config)
    }

    /// Load from `config_path` when given and present, otherwise use defaults
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}
