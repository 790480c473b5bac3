//! Theme validation and loading errors.

use thiserror::Error;

/// Error returned when a theme role holds markup the registry cannot apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// A role names a style the registry doesn't have
    UnknownStyle { role: String, token: String },
    /// A role contains a close token, which would unbalance the output
    CloseInRole { role: String, token: String },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnknownStyle { role, token } => {
                write!(f, "role '{}' uses unknown style '{}'", role, token)
            }
            StyleValidationError::CloseInRole { role, token } => {
                write!(f, "role '{}' contains close token '{}'", role, token)
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}

/// Error returned when loading a theme file fails.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] StyleValidationError),
}
