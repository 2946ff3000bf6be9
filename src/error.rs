use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorizerError>;

/// Error type for the vectorizer
/// Out-of-vocabulary tokens and duplicate vocabulary terms are defined
/// behavior, not errors; the only failure mode is a malformed argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizerError {
    /// A required argument was malformed, e.g. an output buffer whose
    /// length differs from the vocabulary size.
    #[error("invalid argument: {reason} (expected {expected}, got {actual})")]
    InvalidArgument {
        reason: &'static str,
        expected: usize,
        actual: usize,
    },
}
