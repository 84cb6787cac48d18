//! Tool-specific error types.
//!
//! Every tool operation returns [`ToolResult`]. Both failure kinds render to
//! the exact message shown to the caller after the `Error: ` prefix.

use std::fmt::Display;

use thiserror::Error;
use tracing::{error, warn};

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The caller supplied invalid or out-of-policy input.
    /// Detected before any remote call.
    #[error("{0}")]
    Validation(String),

    /// The remote call itself failed.
    #[error("Failed to {action}: {message}")]
    Remote { action: String, message: String },

    /// The tool failed after a successful remote call, e.g. while rendering.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),
}

impl ToolError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        warn!("Validation failed: {}", msg);
        Self::Validation(msg)
    }

    /// Wrap a remote failure with the operation's verb phrase.
    ///
    /// `action` reads as "Failed to <action>", e.g. `"save albums"`.
    pub fn remote(action: impl Into<String>, err: impl Display) -> Self {
        let action = action.into();
        let message = err.to_string();
        error!("Spotify call failed ({}): {}", action, message);
        Self::Remote { action, message }
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        error!("Internal tool error: {}", msg);
        Self::Internal(msg)
    }

    /// Create a "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Whether the error was raised before reaching Spotify.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
