//! # cardcheck
//!
//! Credit card number validation for Rust: strip formatting, reject
//! non-numeric input, detect the card brand and check the Luhn checksum.
//!
//! This is a format check only. A number that validates is well-formed, not
//! necessarily issued or active.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate, is_valid, CardBrand};
//!
//! let result = validate("4532-0151-1283-0366");
//! assert_eq!(result.brand(), CardBrand::Visa);
//! assert!(result.is_valid());
//!
//! // Unknown brands are still checksum-tested
//! let result = validate("1234567890123456");
//! assert_eq!(result.brand(), CardBrand::Unknown);
//! assert!(!result.is_valid());
//!
//! // Non-numeric input short-circuits
//! let result = validate("4532-0151-1283-036X");
//! assert_eq!(result.error_message(), Some("card must contain only digits"));
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! ```
//!
//! ## Masking
//!
//! ```rust
//! use cardcheck::mask_last_four;
//!
//! assert_eq!(mask_last_four("4111111111111111"), "****1111");
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardcheck::batch;
//!
//! let cards = vec!["4111111111111111", "5555555555554444", "invalid"];
//!
//! let results = batch::validate_batch(&cards);
//! assert_eq!(results.len(), 3);
//!
//! let (valid_count, _) = batch::count_valid(&cards);
//! assert_eq!(valid_count, 2);
//! ```
//!
//! ## Supported Card Brands
//!
//! Brands are tried in this order; the first match wins.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Discover | 6011, 65, 644-649, 622126-622925 | 16 |
//! | JCB | 2131, 1800 / 35 | 15 / 16 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | Elo | 4011, 431274, 438935, 451416, 457393, 504706, 627780, 636297, 636368 | 16 |
//! | Aura | 50 | 16 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for `CardBrand` and `ValidationResult` |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | Command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardBrand, ValidationResult};
pub use error::ValidationError;
pub use mask::mask_last_four;
pub use validate::{is_valid, validate};

#[cfg(test)]
mod tests {
    use super::*;

    const VISA_16: &str = "4532015112830366";
    const VISA_16_ALT: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5555555555554444";
    const AMEX: &str = "374245455400126";
    const DISCOVER: &str = "6011111111111117";
    const JCB: &str = "3530111333300000";
    const DINERS: &str = "30569309025904";

    #[test]
    fn test_known_cards() {
        for (card, brand) in [
            (VISA_16, CardBrand::Visa),
            (VISA_16_ALT, CardBrand::Visa),
            (VISA_13, CardBrand::Visa),
            (MASTERCARD, CardBrand::Mastercard),
            (AMEX, CardBrand::Amex),
            (DISCOVER, CardBrand::Discover),
            (JCB, CardBrand::Jcb),
            (DINERS, CardBrand::DinersClub),
        ] {
            let result = validate(card);
            assert_eq!(result.brand(), brand, "{}", card);
            assert!(result.is_valid(), "{} should pass", card);
        }
    }

    #[test]
    fn test_formatted_input() {
        let plain = validate(VISA_16_ALT);
        assert_eq!(validate("4111-1111-1111-1111"), plain);
        assert_eq!(validate("4111 1111 1111 1111"), plain);
        assert_eq!(validate("4111-1111 1111-1111"), plain);
    }

    #[test]
    fn test_invalid_character() {
        let result = validate("4111-1111-1111-111X");
        assert_eq!(result.error(), Some(ValidationError::InvalidCharacters));
        assert_eq!(result.brand(), CardBrand::Unknown);
    }

    #[test]
    fn test_dots_are_not_separators() {
        let result = validate("4111.1111.1111.1111");
        assert_eq!(result.error(), Some(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VISA_16));
        assert!(is_valid(MASTERCARD));
        assert!(is_valid(AMEX));
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_mask_last_four() {
        let masked = mask_last_four(VISA_16);
        assert!(!masked.contains(VISA_16));
        assert!(masked.ends_with("0366"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationResult>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<CardBrand>();
        assert_send_sync::<batch::BatchSummary>();
    }
}
