//! Core types: the `CardBrand` enum and the `ValidationResult` returned by
//! [`validate`](crate::validate).

use crate::error::ValidationError;
use std::fmt;

/// Card networks recognised by brand detection.
///
/// `Unknown` is the sentinel for numbers that match no known pattern. It is
/// also the brand reported when validation short-circuits on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Discover - Prefix 6011, 65, 644-649, 622126-622925, length 16
    Discover,
    /// JCB - Prefix 2131, 1800 (length 15) or 35 (length 16)
    Jcb,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// Elo - Brazilian payment system, fixed list of prefixes, length 16
    Elo,
    /// Aura - Brazilian payment system, Prefix 50, length 16
    Aura,
    /// No pattern matched.
    #[default]
    Unknown,
}

impl CardBrand {
    /// Every known brand, in detection priority order.
    pub const KNOWN: [CardBrand; 8] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::Elo,
        Self::Aura,
    ];

    /// Returns the card lengths this brand's pattern accepts.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::Jcb => &[15, 16],
            Self::DinersClub => &[14],
            Self::Elo => &[16],
            Self::Aura => &[16],
            Self::Unknown => &[],
        }
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns false only for [`CardBrand::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the display name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "MasterCard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Elo => "Elo",
            Self::Aura => "Aura",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Outcome of validating a single card number.
///
/// Built fresh by every call to [`validate`](crate::validate) and never
/// mutated afterwards. If `error()` is `Some`, the input was rejected before
/// brand detection ran: `brand()` is `Unknown` and `is_valid()` is false.
///
/// The result never holds the card number itself, so it is safe to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    brand: CardBrand,
    is_valid: bool,
    error: Option<ValidationError>,
}

impl ValidationResult {
    /// Result for input that got past the digit check.
    #[inline]
    pub(crate) const fn checked(brand: CardBrand, is_valid: bool) -> Self {
        Self {
            brand,
            is_valid,
            error: None,
        }
    }

    /// Result for input rejected by the digit check.
    #[inline]
    pub(crate) const fn rejected(error: ValidationError) -> Self {
        Self {
            brand: CardBrand::Unknown,
            is_valid: false,
            error: Some(error),
        }
    }

    /// Returns the detected card brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns true if the number passed the Luhn checksum.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the rejection error, if the input was not numeric.
    #[inline]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Returns the rejection message, if the input was not numeric.
    #[inline]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(ValidationError::message)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            Some(err) => write!(f, "rejected: {}", err),
            None if self.is_valid => write!(f, "{} (valid)", self.brand),
            None => write!(f, "{} (invalid)", self.brand),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("brand", &self.brand)?;
        state.serialize_field("is_valid", &self.is_valid)?;
        state.serialize_field("error_message", &self.error_message())?;
        state.end()
    }
}
