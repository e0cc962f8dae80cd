//! Service Layer Error Types
//!
//! This module defines error types for builder and registry operations,
//! chaining node validation and serialization failures.

use crate::models::ValidationError;
use thiserror::Error;

/// Action registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No callback registered under the id
    #[error("Action not found: {action_id}")]
    NotFound { action_id: String },
}

impl ActionError {
    /// Create an action not found error
    pub fn not_found(action_id: impl Into<String>) -> Self {
        Self::NotFound {
            action_id: action_id.into(),
        }
    }
}

/// Builder operation errors
///
/// Wraps every failure the facade can surface, with error chaining from the
/// model and registry layers.
#[derive(Error, Debug)]
pub enum BlockKitError {
    /// A node failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A node could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Registry lookup failed
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl BlockKitError {
    /// Whether this wraps a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The wrapped validation error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ActionError::not_found("approve");
        assert_eq!(err.to_string(), "Action not found: approve");
    }

    #[test]
    fn test_from_validation_error() {
        let err: BlockKitError = ValidationError::invalid_value("submit", "missing").into();
        assert!(err.is_validation());
        assert_eq!(err.as_validation().map(ValidationError::field), Some("submit"));
        assert_eq!(err.to_string(), "Validation failed: submit: missing");
    }

    #[test]
    fn test_action_error_is_transparent() {
        let err: BlockKitError = ActionError::not_found("x").into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Action not found: x");
    }
}
