//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price.
///
/// Amounts use [`Decimal`] rather than binary floating point so that values
/// like `0.1` survive storage round-trips exactly. Prices serialize as plain
/// JSON numbers, matching the persisted catalog format, but deserialize from
/// numbers or numeric strings.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use verdura_core::Price;
///
/// assert!(Price::parse(Decimal::new(1050, 2)).is_ok()); // 10.50
/// assert!(Price::parse(Decimal::ZERO).is_ok());
/// assert!(Price::parse(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Construct a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn parse(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a JSON number; Decimal's default form is a string.
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decimal's default visitor accepts numbers and numeric strings.
        let amount = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
        Self::parse(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert!(Price::parse(Decimal::ZERO).is_ok());
        assert!(Price::parse(Decimal::new(19999, 2)).is_ok());
    }

    #[test]
    fn test_parse_negative() {
        let err = Price::parse(Decimal::new(-100, 2)).unwrap_err();
        assert!(matches!(err, PriceError::Negative(_)));
    }

    #[test]
    fn test_serialize_as_number() {
        let price = Price::parse(Decimal::new(1050, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "10.5");
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("200").unwrap();
        assert_eq!(price.amount(), Decimal::new(200, 0));

        let price: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(price.amount(), Decimal::new(105, 1));
    }

    #[test]
    fn test_deserialize_from_numeric_string() {
        let price: Price = serde_json::from_str("\"10.5\"").unwrap();
        assert_eq!(price.amount(), Decimal::new(105, 1));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_numeric() {
        assert!(serde_json::from_str::<Price>("\"free\"").is_err());
    }

    #[test]
    fn test_display() {
        let price = Price::parse(Decimal::new(1050, 2)).unwrap();
        assert_eq!(price.to_string(), "10.50");
    }
}
