//! Batch validation of many card numbers.
//!
//! Each card is validated independently, so results are always returned in
//! input order. With the `parallel` feature the work is spread across a
//! rayon thread pool.

use crate::card::{CardBrand, ValidationResult};
use crate::validate::validate;
use std::collections::HashMap;
use tracing::debug;

/// Validates a slice of cards, one result per card in input order.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// let cards = ["4111111111111111", "1234567890123456"];
/// let results = validate_batch(&cards);
/// assert!(results[0].is_valid());
/// assert!(!results[1].is_valid());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<ValidationResult> {
    cards.iter().map(|c| validate(c.as_ref())).collect()
}

/// Validates a slice of cards in parallel, preserving input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<ValidationResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate(c.as_ref())).collect()
}

/// Counts valid and invalid cards in a batch.
///
/// Rejected input counts as invalid.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "not a card"];
/// assert_eq!(count_valid(&cards), (1, 2));
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| validate(c.as_ref()).is_valid()).count();
    (valid, cards.len() - valid)
}

/// Aggregate counts for a batch of validations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    total: usize,
    valid: usize,
    rejected: usize,
    brands: HashMap<CardBrand, usize>,
}

impl BatchSummary {
    /// Creates an empty summary.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result to the tally.
    ///
    /// Rejected results are counted separately and not attributed to a brand.
    pub fn record(&mut self, result: &ValidationResult) {
        self.total += 1;
        if result.error().is_some() {
            self.rejected += 1;
            return;
        }
        if result.is_valid() {
            self.valid += 1;
        }
        *self.brands.entry(result.brand()).or_insert(0) += 1;
    }

    /// Number of results recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of results that passed the checksum.
    #[inline]
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// Number of results that were numeric but failed the checksum.
    #[inline]
    pub fn invalid(&self) -> usize {
        self.total - self.valid - self.rejected
    }

    /// Number of inputs rejected as non-numeric.
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of numeric inputs detected as the given brand.
    #[inline]
    pub fn count(&self, brand: CardBrand) -> usize {
        self.brands.get(&brand).copied().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a ValidationResult> for BatchSummary {
    fn from_iter<T: IntoIterator<Item = &'a ValidationResult>>(iter: T) -> Self {
        let mut summary = Self::new();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}

/// Validates a batch and returns its aggregate counts.
///
/// # Example
///
/// ```
/// use cardcheck::batch::summarize;
/// use cardcheck::CardBrand;
///
/// let summary = summarize(&["4111111111111111", "4111111111111112", "abc"]);
/// assert_eq!(summary.total(), 3);
/// assert_eq!(summary.valid(), 1);
/// assert_eq!(summary.invalid(), 1);
/// assert_eq!(summary.rejected(), 1);
/// assert_eq!(summary.count(CardBrand::Visa), 2);
/// ```
pub fn summarize<S: AsRef<str>>(cards: &[S]) -> BatchSummary {
    let summary: BatchSummary = validate_batch(cards).iter().collect();
    debug!(
        total = summary.total(),
        valid = summary.valid(),
        rejected = summary.rejected(),
        "batch validated"
    );
    summary
}
