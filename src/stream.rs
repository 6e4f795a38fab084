//! Lazy validation over iterators of card numbers.
//!
//! Useful when numbers arrive one at a time, for example line by line from
//! stdin, and collecting them into a slice for [`crate::batch`] is not wanted.
//!
//! # Example
//!
//! ```
//! use cardcheck::stream::ValidateExt;
//!
//! let lines = ["4111 1111 1111 1111", "5555-5555-5555-4444", "not a card"];
//! let passing: Vec<_> = lines.iter().copied().valid_only().map(|(line, _)| line).collect();
//!
//! assert_eq!(passing, ["4111 1111 1111 1111", "5555-5555-5555-4444"]);
//! ```

use std::iter::FusedIterator;

use crate::card::ValidationResult;
use crate::validate::validate;

/// Yields each input together with its [`ValidationResult`].
///
/// Returned by [`ValidateExt::validate_pairs`].
#[derive(Debug, Clone)]
pub struct Validated<I> {
    iter: I,
}

impl<I> Iterator for Validated<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = (I::Item, ValidationResult);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.iter.next()?;
        let result = validate(card.as_ref());
        Some((card, result))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> ExactSizeIterator for Validated<I>
where
    I: ExactSizeIterator,
    I::Item: AsRef<str>,
{
}

impl<I> FusedIterator for Validated<I>
where
    I: FusedIterator,
    I::Item: AsRef<str>,
{
}

/// Yields only the [`ValidationResult`] for each input.
///
/// Returned by [`ValidateExt::validate_cards`].
#[derive(Debug, Clone)]
pub struct Results<I> {
    inner: Validated<I>,
}

impl<I> Iterator for Results<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = ValidationResult;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, result)| result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for Results<I>
where
    I: ExactSizeIterator,
    I::Item: AsRef<str>,
{
}

/// Skips every input that is not a valid card number.
///
/// Returned by [`ValidateExt::valid_only`]. Rejected input and checksum
/// failures are both dropped.
#[derive(Debug, Clone)]
pub struct Passing<I> {
    inner: Validated<I>,
}

impl<I> Iterator for Passing<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = (I::Item, ValidationResult);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|(_, result)| result.is_valid())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Card validation adapters, available on every iterator.
///
/// The adapters only do work when polled, and only for items whose type
/// implements `AsRef<str>`.
pub trait ValidateExt: Iterator + Sized {
    /// Maps each card number to its [`ValidationResult`].
    ///
    /// ```
    /// use cardcheck::{stream::ValidateExt, CardBrand};
    ///
    /// let brands: Vec<_> = ["4111111111111111", "378282246310005"]
    ///     .iter()
    ///     .validate_cards()
    ///     .map(|result| result.brand())
    ///     .collect();
    /// assert_eq!(brands, [CardBrand::Visa, CardBrand::Amex]);
    /// ```
    fn validate_cards(self) -> Results<Self>;

    /// Pairs each card number with its [`ValidationResult`], so the caller
    /// can still mask or report the input.
    fn validate_pairs(self) -> Validated<Self>;

    /// Keeps only the card numbers that validate, paired with their results.
    fn valid_only(self) -> Passing<Self>;
}

impl<I: Iterator> ValidateExt for I {
    #[inline]
    fn validate_cards(self) -> Results<Self> {
        Results {
            inner: self.validate_pairs(),
        }
    }

    #[inline]
    fn validate_pairs(self) -> Validated<Self> {
        Validated { iter: self }
    }

    #[inline]
    fn valid_only(self) -> Passing<Self> {
        Passing {
            inner: self.validate_pairs(),
        }
    }
}
