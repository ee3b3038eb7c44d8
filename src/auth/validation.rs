//! Shared field-validation rules for auth inputs.
//!
//! Validation failures are a distinct "bad input" signal, separate from
//! "wrong credentials": callers map them to a 400 with the field message,
//! not to an authentication rejection.

use thiserror::Error;

/// Upper bound applied to credential fields.
pub const MAX_CREDENTIAL_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required.")]
    Required { field: &'static str },
    #[error("{field} cannot exceed {max} characters.")]
    TooLong { field: &'static str, max: usize },
}

/// A required string must be non-blank and within `max` characters.
///
/// # Errors
/// Returns the failing rule, carrying the field name for the caller's
/// response body.
pub fn required_string(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// An optional string may be blank, but when present must fit within `max`.
///
/// # Errors
/// Returns `ValidationError::TooLong` when a non-blank value exceeds `max`.
pub fn optional_string(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), ValidationError> {
    if !value.trim().is_empty() && value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
