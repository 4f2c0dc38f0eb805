//! Report assembly error types.

use thiserror::Error;
use tpgen_assignment::MatcherError;
use tpgen_sandboxes::{ListError, SandboxError};

/// Errors raised while assembling a report's link list.
///
/// Every variant is a user-facing rejection for the caller to render, not
/// a condition to retry.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The user-supplied custom pattern did not compile.
    #[error("invalid custom pattern: {0}")]
    Pattern(#[from] MatcherError),

    /// Listing failed: transport trouble or a non-public match.
    #[error(transparent)]
    List(#[from] ListError),

    /// Paging completed but nothing matched the assignment.
    #[error("no sandboxes matched the assignment")]
    NoMatches,
}

impl From<SandboxError> for ReportError {
    fn from(error: SandboxError) -> Self {
        Self::List(error.into())
    }
}
