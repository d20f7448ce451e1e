//! Error types for linter registration.

use thiserror::Error;

/// Errors raised while building a linter's declaration record.
///
/// These only occur at registration time; parsing checker output never
/// fails, whatever shape the output has.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The diagnostic pattern is not a valid regular expression.
    #[error("invalid diagnostic pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The diagnostic pattern lacks a required named capture group.
    #[error("diagnostic pattern is missing the `{0}` capture group")]
    MissingCaptureGroup(&'static str),
}
