//! Custom error types for primer
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::user::EmailValidationError;

/// The main error type for primer operations
#[derive(Error, Debug)]
pub enum PrimerError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failures raised inside a bracketed backup task
    #[error("Backup error: {0}")]
    Backup(String),
}

impl PrimerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a backup error
    pub fn is_backup(&self) -> bool {
        matches!(self, Self::Backup(_))
    }
}

impl From<EmailValidationError> for PrimerError {
    fn from(err: EmailValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for primer operations
pub type PrimerResult<T> = Result<T, PrimerError>;
