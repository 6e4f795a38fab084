//! Masking for display and logging.
//!
//! Only the last four characters of a card number may be shown. The mask is
//! applied to the raw input, so whatever the user typed is what gets
//! truncated.

/// Prefix shown in place of the hidden part of a card number.
pub const MASK: &str = "****";

/// Masks a card number showing only the last 4 characters.
///
/// Format: `****1234`. Inputs shorter than four characters are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_last_four;
///
/// assert_eq!(mask_last_four("4532015112830366"), "****0366");
/// assert_eq!(mask_last_four("4532-0151-1283-0366"), "****0366");
/// assert_eq!(mask_last_four("123"), "123");
/// ```
pub fn mask_last_four(input: &str) -> String {
    let count = input.chars().count();
    if count < 4 {
        return input.to_string();
    }

    let tail: String = input.chars().skip(count - 4).collect();
    format!("{}{}", MASK, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_16_digits() {
        assert_eq!(mask_last_four("4111111111111111"), "****1111");
    }

    #[test]
    fn test_mask_15_digits() {
        assert_eq!(mask_last_four("374245455400126"), "****0126");
    }

    #[test]
    fn test_mask_keeps_raw_tail() {
        assert_eq!(mask_last_four("4111 1111 1111 11 11"), "****1 11");
        assert_eq!(mask_last_four("card"), "****card");
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask_last_four(""), "");
        assert_eq!(mask_last_four("123"), "123");
        assert_eq!(mask_last_four("1234"), "****1234");
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask_last_four("4111１２３４"), "****１２３４");
    }

    #[test]
    fn test_mask_never_shows_full_number() {
        let masked = mask_last_four("4532015112830366");
        assert!(!masked.contains("4532015112830366"));
        assert!(!masked.contains("4532"));
    }
}
