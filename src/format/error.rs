use thiserror::Error;

/// Error returned by [`Formatter::try_format`](super::Formatter::try_format).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("value nesting exceeds the limit of {limit} levels")]
    DepthExceeded { limit: usize },
}

/// Result type for fallible formatting.
pub type Result<T> = std::result::Result<T, FormatError>;
