//! Card brand detection using BIN/IIN prefix and length matching.
//!
//! Each brand is a predicate over the whole normalized number: a prefix rule
//! plus the exact lengths that brand accepts. Predicates are tried in a fixed
//! order and the first match wins, so the order of [`BRAND_PATTERNS`] is part
//! of the behavior. In particular Visa is tried before Elo, so a 16-digit
//! `4011...` number is Visa, and Elo is tried before Aura, so a 16-digit
//! `504706...` number is Elo.

use crate::CardBrand;

/// Predicate deciding whether a digit sequence belongs to a brand.
pub type BrandPattern = fn(&[u8]) -> bool;

/// Brand patterns in detection priority order.
pub const BRAND_PATTERNS: [(CardBrand, BrandPattern); 8] = [
    (CardBrand::Visa, is_visa),
    (CardBrand::Mastercard, is_mastercard),
    (CardBrand::Amex, is_amex),
    (CardBrand::Discover, is_discover),
    (CardBrand::Jcb, is_jcb),
    (CardBrand::DinersClub, is_diners_club),
    (CardBrand::Elo, is_elo),
    (CardBrand::Aura, is_aura),
];

/// Elo issuer prefixes.
const ELO_PREFIXES: [&[u8]; 9] = [
    &[4, 0, 1, 1],
    &[4, 3, 1, 2, 7, 4],
    &[4, 3, 8, 9, 3, 5],
    &[4, 5, 1, 4, 1, 6],
    &[4, 5, 7, 3, 9, 3],
    &[5, 0, 4, 7, 0, 6],
    &[6, 2, 7, 7, 8, 0],
    &[6, 3, 6, 2, 9, 7],
    &[6, 3, 6, 3, 6, 8],
];

/// Detects the card brand from a sequence of digits.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the whole card number.
///
/// # Returns
///
/// The first brand whose pattern matches, or [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use cardcheck::detect::detect_brand;
/// use cardcheck::CardBrand;
///
/// // Visa starts with 4
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_brand(&visa), CardBrand::Visa);
///
/// // Right prefix, wrong length
/// let short_visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_brand(&short_visa), CardBrand::Unknown);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> CardBrand {
    BRAND_PATTERNS
        .iter()
        .find(|(_, matches)| matches(digits))
        .map_or(CardBrand::Unknown, |&(brand, _)| brand)
}

/// Reads the first `n` digits as a number, or `None` if there are fewer.
#[inline]
fn prefix_value(digits: &[u8], n: usize) -> Option<u32> {
    digits
        .get(..n)
        .map(|prefix| prefix.iter().fold(0, |acc, &d| acc * 10 + d as u32))
}

fn is_visa(digits: &[u8]) -> bool {
    matches!(digits, [4, ..]) && matches!(digits.len(), 13 | 16)
}

fn is_mastercard(digits: &[u8]) -> bool {
    if digits.len() != 16 {
        return false;
    }

    match digits {
        // 51-55
        [5, 1..=5, ..] => true,
        // 2221-2720
        [2, ..] => matches!(prefix_value(digits, 4), Some(2221..=2720)),
        _ => false,
    }
}

fn is_amex(digits: &[u8]) -> bool {
    digits.len() == 15 && matches!(digits, [3, 4, ..] | [3, 7, ..])
}

fn is_discover(digits: &[u8]) -> bool {
    if digits.len() != 16 {
        return false;
    }

    match digits {
        [6, 0, 1, 1, ..] | [6, 5, ..] | [6, 4, 4..=9, ..] => true,
        [6, 2, 2, ..] => matches!(prefix_value(digits, 6), Some(622126..=622925)),
        _ => false,
    }
}

fn is_jcb(digits: &[u8]) -> bool {
    match digits {
        [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..] => digits.len() == 15,
        [3, 5, ..] => digits.len() == 16,
        _ => false,
    }
}

fn is_diners_club(digits: &[u8]) -> bool {
    digits.len() == 14 && matches!(digits, [3, 0, 0..=5, ..] | [3, 6, ..] | [3, 8, ..])
}

fn is_elo(digits: &[u8]) -> bool {
    digits.len() == 16 && ELO_PREFIXES.iter().any(|prefix| digits.starts_with(prefix))
}

fn is_aura(digits: &[u8]) -> bool {
    digits.len() == 16 && matches!(digits, [5, 0, ..])
}
