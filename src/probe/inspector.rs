//! Converter tool discovery

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::error::{IconPortError, IconPortResult};
use crate::probe::CONVERTER_TOOLS;

/// Availability of one converter executable
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    /// Executable name
    pub name: String,
    /// Resolved location, if the tool was found
    pub path: Option<PathBuf>,
}

impl ToolStatus {
    /// Whether the tool resolved to an executable
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolves converter executables, honoring configured override paths
/// before falling back to the search path.
#[derive(Debug, Clone, Default)]
pub struct ToolInspector {
    overrides: HashMap<String, PathBuf>,
}

impl ToolInspector {
    /// Create an inspector that resolves purely from PATH
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inspector with explicit per-tool executable paths
    pub fn with_overrides(overrides: HashMap<String, PathBuf>) -> Self {
        Self { overrides }
    }

    /// Resolve a converter to an executable path.
    ///
    /// An override that points at a missing file is reported as the tool
    /// being absent rather than silently falling back to PATH; a configured
    /// location is authoritative.
    pub fn resolve(&self, tool: &str) -> IconPortResult<PathBuf> {
        if let Some(path) = self.overrides.get(tool) {
            if path.is_file() {
                debug!("Resolved {} via configured path {}", tool, path.display());
                return Ok(path.clone());
            }
            return Err(IconPortError::ToolNotFound {
                tool: tool.to_string(),
            });
        }

        which::which(tool).map_err(|_| IconPortError::ToolNotFound {
            tool: tool.to_string(),
        })
    }

    /// Availability of a single tool, without failing
    pub fn status(&self, tool: &str) -> ToolStatus {
        ToolStatus {
            name: tool.to_string(),
            path: self.resolve(tool).ok(),
        }
    }

    /// Availability report over all converter executables
    pub fn report(&self) -> Vec<ToolStatus> {
        CONVERTER_TOOLS.iter().map(|&tool| self.status(tool)).collect()
    }
}
