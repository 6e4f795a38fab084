//! Error types for credit card validation.
//!
//! Validation only has one way to fail locally: the input is not a run of
//! digits once formatting characters are stripped. Brand misses and failed
//! checksums are ordinary outcomes reported through
//! [`ValidationResult`](crate::ValidationResult), not errors.

use std::fmt;

/// Errors that can occur while validating a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The input was empty, or contained something other than digits,
    /// whitespace and hyphens.
    InvalidCharacters,
}

impl ValidationError {
    /// Returns the user-facing message for this error.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidCharacters => "card must contain only digits",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::InvalidCharacters.to_string(),
            "card must contain only digits"
        );
    }

    #[test]
    fn test_error_message_matches_display() {
        let err = ValidationError::InvalidCharacters;
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
