//! Matcher error types.

use thiserror::Error;

/// Errors raised while building an [`AssignmentMatcher`](crate::AssignmentMatcher).
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A title pattern failed to compile (user-supplied custom patterns
    /// are the realistic source; built-in grammars are generated from
    /// numeric coordinates).
    #[error("invalid title pattern: {0}")]
    Pattern(#[from] regex::Error),
}
