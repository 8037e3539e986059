//! TOML configuration for converter lookup and conversion limits

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::IconPortResult;

/// Default wall-clock limit for one converter run
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// IconPort configuration
///
/// Everything is optional; an absent config file means defaults. Example:
///
/// ```toml
/// timeout_secs = 30
/// scratch_dir = "/var/tmp"
///
/// [tools]
/// icon2icon = "/opt/hvif-tools/bin/icon2icon"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Wall-clock limit for each converter run, in seconds
    pub timeout_secs: u64,
    /// Directory for conversion temp files (system temp dir when unset)
    pub scratch_dir: Option<PathBuf>,
    /// Explicit converter executable locations
    pub tools: ToolPaths,
}

/// Per-tool executable path overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub hvif2svg: Option<PathBuf>,
    pub svg2hvif: Option<PathBuf>,
    pub icon2icon: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            scratch_dir: None,
            tools: ToolPaths::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconPortResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse config {}: {}", path.display(), e),
            )
        })?;
        Ok(config)
    }

    /// Configured timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Tool overrides keyed by executable name, for the inspector
    pub fn tool_overrides(&self) -> HashMap<String, PathBuf> {
        let mut map = HashMap::new();
        if let Some(path) = &self.tools.hvif2svg {
            map.insert("hvif2svg".to_string(), path.clone());
        }
        if let Some(path) = &self.tools.svg2hvif {
            map.insert("svg2hvif".to_string(), path.clone());
        }
        if let Some(path) = &self.tools.icon2icon {
            map.insert("icon2icon".to_string(), path.clone());
        }
        map
    }
}
