//! Error types for the rewrite pipeline.

use thiserror::Error;

/// Errors surfaced while building a transformer or a rule set.
///
/// Regex compilation is the only fallible step, and it happens entirely in
/// constructors — `Transformer::transform` itself never fails.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid rewrite pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
