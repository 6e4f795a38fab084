//! Fuzz target for card validation.
//!
//! validate() must never panic, and its result must agree with the
//! lower-level pieces it is built from.

#![no_main]

use cardcheck::{
    detect::detect_brand, luhn, mask_last_four, normalize::parse_digits, validate, CardBrand,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate(data);
    let _ = mask_last_four(data);

    match parse_digits(data) {
        Ok(digits) => {
            assert!(result.error().is_none());
            assert_eq!(result.brand(), detect_brand(&digits));
            assert_eq!(result.is_valid(), luhn::validate(&digits));
        }
        Err(err) => {
            assert_eq!(result.error(), Some(err));
            assert_eq!(result.brand(), CardBrand::Unknown);
            assert!(!result.is_valid());
        }
    }
});
