//! Error types for navigation configuration.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building or loading navigation options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grid topology needs at least one column.
    #[error("Invalid column count: {columns} (grid needs at least one column)")]
    InvalidColumns { columns: usize },

    /// Builder was missing a required field.
    #[error("Invalid navigation options: {0}")]
    Builder(String),

    /// Options could not be parsed.
    #[error("Failed to parse navigation options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<UninitializedFieldError> for ConfigError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::Builder(format!("missing field `{}`", err.field_name()))
    }
}

/// An action name that does not match any known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action '{name}' (expected one of: up, down, left, right, continue)")]
pub struct ParseActionError {
    /// The name that failed to parse.
    pub name: String,
}

impl ParseActionError {
    /// Create a parse error for the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_columns_message() {
        let err = ConfigError::InvalidColumns { columns: 0 };
        assert!(err.to_string().contains("at least one column"));
    }

    #[test]
    fn test_parse_action_error_lists_names() {
        let err = ParseActionError::new("jump");
        let message = err.to_string();
        assert!(message.contains("'jump'"));
        assert!(message.contains("continue"));
    }
}
