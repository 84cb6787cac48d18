//! Errors raised by the Spotify Web API client.

use thiserror::Error;

/// Result type for remote client calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the Spotify Web API.
///
/// The `Display` output is the "underlying message" embedded in
/// `Failed to <action>: <message>` tool errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// No access token is configured.
    #[error("No Spotify access token configured (set SPOTIFY_ACCESS_TOKEN)")]
    MissingToken,

    /// Any other failure, carried as its stringified form.
    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an opaque error from anything printable.
    pub fn other(msg: impl ToString) -> Self {
        Self::Other(msg.to_string())
    }
}
