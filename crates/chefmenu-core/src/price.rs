//! Non-negative prices held as whole cents

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// A non-negative amount rounded to 2 decimal places.
///
/// Stored as cents so sums and comparisons are exact; only parsing and
/// averaging go through floating point, and both round to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse raw form input.
    ///
    /// Accepts any finite, non-negative decimal; rounds half away from zero to cents.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPrice);
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidPrice(trimmed.to_string()));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativePrice(trimmed.to_string()));
        }

        // u64::MAX as f64 is 2^64, one past the largest storable amount
        let cents = (value * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(ValidationError::PriceTooLarge(trimmed.to_string()));
        }
        Ok(Price(cents as u64))
    }

    /// Arithmetic mean rounded to the nearest cent; zero for no prices.
    pub fn mean<I>(prices: I) -> Price
    where
        I: IntoIterator<Item = Price>,
    {
        let (sum, count) = prices
            .into_iter()
            .fold((0u128, 0u64), |(sum, count), p| (sum + p.0 as u128, count + 1));
        if count == 0 {
            return Price::ZERO;
        }
        Price((sum as f64 / count as f64).round() as u64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
