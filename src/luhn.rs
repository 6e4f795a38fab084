//! Mod-10 (Luhn) checksum over digit values.
//!
//! Every second digit counting leftward from the check digit is doubled, with
//! doubled values above 9 reduced by 9, and the total must end in 0. The walk
//! here goes left to right: with `parity = len % 2`, index `i` is doubled when
//! `i % 2 == parity`.
//!
//! All functions take digit values (`0..=9`), not ASCII bytes. See
//! [`crate::normalize::parse_digits`].

/// Fewest digits a number may have and still pass [`validate`].
pub const MIN_LUHN_DIGITS: usize = 13;

/// `DOUBLE_TABLE[d]` is `2 * d` with 9 subtracted when it exceeds 9.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

#[inline]
fn weighted_sum(digits: &[u8], parity: usize) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == parity {
                u32::from(DOUBLE_TABLE[usize::from(digit)])
            } else {
                u32::from(digit)
            }
        })
        .sum()
}

/// Returns true if the number has at least [`MIN_LUHN_DIGITS`] digits and
/// its checksum is a multiple of 10.
///
/// ```
/// use cardcheck::luhn::validate;
///
/// // 5555 5555 5555 4444
/// assert!(validate(&[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4]));
/// assert!(!validate(&[5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 5]));
///
/// // Twelve zeros sum to 0 but are too short.
/// assert!(!validate(&[0; 12]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    digits.len() >= MIN_LUHN_DIGITS && compute_checksum(digits) % 10 == 0
}

/// Luhn sum of `digits`, before the modulo and without any length check.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    weighted_sum(digits, digits.len() % 2)
}

/// Returns the digit that, appended to `partial`, makes a Luhn-valid number.
///
/// ```
/// use cardcheck::luhn::check_digit;
///
/// // 3782 822463 1000 + 5
/// assert_eq!(check_digit(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0]), 5);
/// ```
#[inline]
pub fn check_digit(partial: &[u8]) -> u8 {
    // Parity of the completed number; the missing check digit contributes 0.
    let sum = weighted_sum(partial, (partial.len() + 1) % 2);
    ((10 - sum % 10) % 10) as u8
}
