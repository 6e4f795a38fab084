//! Input normalization.
//!
//! Card numbers arrive the way people type them: `4532 0151 1283 0366`,
//! `4532-0151-1283-0366`, or with a stray tab. Normalization removes
//! whitespace and hyphens and nothing else, so dots, slashes and letters
//! survive and are rejected by the digit check.
//!
//! # Example
//!
//! ```
//! use cardcheck::normalize::{parse_digits, strip_formatting};
//!
//! assert_eq!(strip_formatting("4532-0151 1283-0366"), "4532015112830366");
//!
//! let digits = parse_digits("4111 1111 1111 1111").unwrap();
//! assert_eq!(digits.len(), 16);
//! assert_eq!(digits[0], 4);
//!
//! assert!(parse_digits("4111.1111.1111.1111").is_err());
//! ```

use crate::error::ValidationError;
use zeroize::Zeroizing;

/// Digit values (0-9, not ASCII) of a normalized card number.
///
/// The buffer is wiped when dropped.
pub type Digits = Zeroizing<Vec<u8>>;

/// Returns true for the characters normalization removes.
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Removes all whitespace and hyphen characters from the input.
///
/// Any other character, digit or not, is kept as-is.
#[inline]
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|&c| !is_separator(c)).collect()
}

/// Normalizes the input and converts it to digit values.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacters`] if nothing is left after
/// normalization, or if anything other than ASCII `0`-`9` remains.
pub fn parse_digits(input: &str) -> Result<Digits, ValidationError> {
    let normalized = Zeroizing::new(strip_formatting(input));

    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(Zeroizing::new(
        normalized.bytes().map(|b| b - b'0').collect(),
    ))
}
