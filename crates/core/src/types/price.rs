//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),
}

/// A non-negative amount in the shop's currency.
///
/// Amounts are kept at full precision; use [`Price::round_to_cents`] to get
/// the value shown to the user.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shopfront_core::Price;
///
/// let price = Price::new(Decimal::new(19_995, 3)).unwrap();
/// assert_eq!(price.round_to_cents().to_string(), "20.00");
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable price. Sums and products saturate here.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Parse a price from a decimal string such as `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a decimal or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to two decimal places, half away from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Unit price multiplied by a quantity, rounded to cents.
    ///
    /// Saturates at [`Price::MAX`] like the arithmetic operators.
    #[must_use]
    pub fn extended(self, quantity: usize) -> Self {
        (self * quantity).round_to_cents()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Mul<usize> for Price {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self::Output {
        Self(
            self.0
                .checked_mul(Decimal::from(rhs))
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Deserialization goes through `new` so negative amounts never get in.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 2)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::parse("-3").is_err());
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(price("0"), Price::ZERO);
        assert_eq!(price("-0"), Price::ZERO);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Price::parse("ten"), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(price("0.005").round_to_cents(), price("0.01"));
        assert_eq!(price("1.115").round_to_cents(), price("1.12"));
        assert_eq!(price("1.114").round_to_cents(), price("1.11"));
    }

    #[test]
    fn test_extended() {
        assert_eq!(price("0.10").extended(3), price("0.30"));
        assert_eq!(price("200").extended(2), price("400"));
        assert_eq!(price("19.99").extended(0), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [price("200"), price("200"), price("150")].iter().sum();
        assert_eq!(total, price("550"));
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(price("200").to_string(), "200.00");
        assert_eq!(price("0.5").to_string(), "0.50");
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
    }

    #[test]
    fn test_display_rounds_like_cents() {
        assert_eq!(price("19.995").to_string(), "20.00");
        assert_eq!(price("0.335").to_string(), "0.34");
        assert_eq!(
            price("19.995").to_string(),
            price("19.995").round_to_cents().to_string()
        );
    }

    #[test]
    fn test_arithmetic_saturates_at_max() {
        assert_eq!(Price::MAX + Price::MAX, Price::MAX);
        assert_eq!(Price::MAX * 2, Price::MAX);
        assert_eq!(Price::MAX.extended(3), Price::MAX);

        let total: Price = [Price::MAX, Price::MAX, price("1")].iter().sum();
        assert_eq!(total, Price::MAX);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-1.00\"").is_err());
        assert_eq!(
            serde_json::from_str::<Price>("\"12.50\"").unwrap(),
            price("12.50")
        );
    }
}
