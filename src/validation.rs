//! Field validation applied before every create and update.
//!
//! Checks run in a fixed order: presence of all four fields first, then the
//! email pattern. The first failing check decides the error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::{EmployeeFields, Field};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid email regex")
});

/// Returns true if `email` has the shape `local@domain.tld`.
///
/// None of the three parts may contain whitespace or `@`. The byte order
/// mark U+FEFF counts as whitespace here.
///
/// # Examples
///
/// ```
/// use employee_directory::validation::is_valid_email;
///
/// assert!(is_valid_email("john@company.com"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates a candidate record.
///
/// Emptiness means the empty string; surrounding whitespace is not trimmed.
///
/// # Errors
///
/// - [`ValidationError::MissingFields`] if any field is empty.
/// - [`ValidationError::InvalidEmail`] if the email does not match.
pub fn validate(fields: &EmployeeFields) -> Result<(), ValidationError> {
    if Field::ALL.iter().any(|&field| fields.get(field).is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
