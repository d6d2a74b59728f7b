//! Error types for the role graph
//!
//! Graph operations themselves never fail: unknown names and inactive edges
//! surface as `false`, `None` or an empty list. These errors only cover the
//! boundary where host input is parsed (timestamps, configuration files).

use thiserror::Error;

/// Role graph errors
#[derive(Debug, Error)]
pub enum RoleGraphError {
    /// Timestamp string is not a decimal nanosecond counter
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for role graph operations
pub type Result<T> = std::result::Result<T, RoleGraphError>;
