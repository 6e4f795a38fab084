//! Main validation orchestration for credit card numbers.
//!
//! This module provides the primary `validate` function that combines
//! normalization, brand detection and the Luhn checksum into a single
//! operation.
//!
//! The pipeline is:
//! 1. Strip whitespace and hyphens
//! 2. Reject empty or non-numeric input (short-circuit)
//! 3. Detect the card brand
//! 4. Run the Luhn checksum, whatever the brand
//!
//! Only step 2 can produce an error, and it is reported inside the returned
//! [`ValidationResult`] rather than as an `Err`.

use crate::card::ValidationResult;
use crate::detect::detect_brand;
use crate::luhn;
use crate::normalize::parse_digits;
use tracing::trace;

/// Validates a credit card number string.
///
/// # Arguments
///
/// * `input` - The card number as typed. May contain whitespace or hyphens.
///
/// # Returns
///
/// A [`ValidationResult`] with the detected brand and checksum outcome. If
/// the input is empty or not numeric after normalization, the result carries
/// [`ValidationError::InvalidCharacters`](crate::ValidationError::InvalidCharacters),
/// an unknown brand and `is_valid() == false`.
///
/// # Example
///
/// ```
/// use cardcheck::{validate, CardBrand};
///
/// let result = validate("4532-0151-1283-0366");
/// assert_eq!(result.brand(), CardBrand::Visa);
/// assert!(result.is_valid());
/// assert!(result.error().is_none());
///
/// // Recognised brand, bad checksum
/// let result = validate("4532015112830367");
/// assert_eq!(result.brand(), CardBrand::Visa);
/// assert!(!result.is_valid());
///
/// // Rejected before detection
/// let result = validate("4532 0151 ABCD 0366");
/// assert_eq!(result.brand(), CardBrand::Unknown);
/// assert_eq!(result.error_message(), Some("card must contain only digits"));
/// ```
pub fn validate(input: &str) -> ValidationResult {
    let digits = match parse_digits(input) {
        Ok(digits) => digits,
        Err(err) => {
            trace!(error = %err, "card number rejected");
            return ValidationResult::rejected(err);
        }
    };

    let brand = detect_brand(&digits);
    let is_valid = luhn::validate(&digits);

    trace!(%brand, is_valid, length = digits.len(), "card number checked");

    ValidationResult::checked(brand, is_valid)
}

/// Quickly checks if a card number passes validation.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}
