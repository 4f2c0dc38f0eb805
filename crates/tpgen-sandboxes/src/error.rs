//! Sandbox client and listing error types.

use thiserror::Error;

/// Errors from the CodeSandbox wire client.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// HTTP transport or body-decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body did not carry the expected payload.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from the aggregate listing operation.
///
/// Any wire-level failure collapses into [`Transport`](Self::Transport):
/// the by-far most common cause is a bad or expired token, so the message
/// leads with that. No retry is attempted; one failure is terminal for the
/// whole call.
#[derive(Debug, Error)]
pub enum ListError {
    /// A page fetch failed; carries the underlying error's description.
    #[error("invalid CodeSandbox token or transport failure: {details}")]
    Transport { details: String },

    /// A sandbox matching the assignment is not publicly visible.
    #[error("sandbox {id} is not public")]
    NotPublic { id: String },
}

impl From<SandboxError> for ListError {
    fn from(error: SandboxError) -> Self {
        Self::Transport {
            details: error.to_string(),
        }
    }
}
