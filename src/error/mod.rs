//! Error handling module for IconPort

use thiserror::Error;

/// Main error type for IconPort conversions
///
/// Every failure an adapter can report maps onto one of these variants, and
/// the `Display` text is the message the host (or the CLI user) sees.
#[derive(Error, Debug)]
pub enum IconPortError {
    /// Required converter executable is not installed or not on the search path
    #[error("Converter tool not found: {tool}. Install HVIF-Tools and make sure it is on PATH")]
    ToolNotFound { tool: String },

    /// Converter did not finish within the wall-clock limit
    #[error("Converter '{tool}' timed out after {seconds}s")]
    ToolTimeout { tool: String, seconds: u64 },

    /// Converter exited with a non-zero status; carries its stderr text
    #[error("Converter '{tool}' failed: {stderr}")]
    ToolFailed { tool: String, stderr: String },

    /// I/O error while staging, running, or reading back a conversion
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for IconPort operations
pub type IconPortResult<T> = std::result::Result<T, IconPortError>;
