//! Error types for the employee directory.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing the directory.

use thiserror::Error;

use crate::models::EmployeeId;

/// A submitted record failed the validation gate.
///
/// Both variants are recoverable: the caller keeps the entered text and the
/// user re-submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of name, position, department or email is empty.
    #[error("missing fields")]
    MissingFields,

    /// The email does not match the accepted pattern.
    #[error("invalid email")]
    InvalidEmail,
}

impl ValidationError {
    /// Returns the message shown to the user when a submission is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::error::ValidationError;
    ///
    /// assert_eq!(
    ///     ValidationError::InvalidEmail.user_message(),
    ///     "Please enter a valid email address"
    /// );
    /// ```
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// The main error type for the employee directory.
///
/// # Example
///
/// ```
/// use employee_directory::error::DirectoryError;
///
/// let error = DirectoryError::ConfigNotFound {
///     path: "/missing/directory.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/directory.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A create or update was rejected by the validator.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No employee has the given id.
    ///
    /// Only raised when the store is configured to reject unknown ids.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that did not match any employee.
        id: EmployeeId,
    },

    /// Every employee id has been issued; no new employee can be added.
    #[error("No employee ids left to assign")]
    IdsExhausted,

    /// A seeded employee record was invalid or duplicated an id.
    #[error("Invalid seed employee {id}: {message}")]
    InvalidSeed {
        /// The id of the offending seed record.
        id: EmployeeId,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl DirectoryError {
    /// Returns a message suitable for an alert in the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            DirectoryError::Validation(err) => err.user_message().to_string(),
            DirectoryError::EmployeeNotFound { .. } => "Employee not found".to_string(),
            other => other.to_string(),
        }
    }
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
