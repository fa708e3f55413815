//! Exact monetary amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Non-negative exact decimal price.
///
/// The decimal scale given at construction is kept, so `2500.00` renders as
/// `2500.00` and never passes through binary floating point. Deserialization
/// goes through [`Price::new`], so a negative amount is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(
                "price",
                "Price must be greater than or equal to zero",
            ));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn assert_value_object<T: ValueObject>(a: T, b: T) {
        assert_eq!(a.clone(), b);
    }

    #[test]
    fn equal_amounts_are_equal_prices() {
        assert_value_object(
            Price::new(Decimal::new(150, 2)).unwrap(),
            Price::new(Decimal::new(150, 2)).unwrap(),
        );
    }

    #[test]
    fn keeps_decimal_scale() {
        let price = Price::new(Decimal::from_str("2500.00").unwrap()).unwrap();
        assert_eq!(price.to_string(), "2500.00");
        assert_eq!(price.amount().scale(), 2);
    }

    #[test]
    fn accepts_zero_and_negative_zero() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from_str("-0.00").unwrap()).is_ok());
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = Price::new(Decimal::from_str("-0.01").unwrap()).unwrap_err();
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "price");
                assert!(message.contains("Price"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn deserialization_validates_the_amount() {
        let price: Price = serde_json::from_str("\"19.90\"").unwrap();
        assert_eq!(price.to_string(), "19.90");
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"19.90\"");

        let err = serde_json::from_str::<Price>("\"-0.50\"").unwrap_err();
        assert!(err.to_string().contains("Price"), "{err}");
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        let a = Price::new(Decimal::from_str("0.10").unwrap()).unwrap();
        let b = Price::new(Decimal::from_str("0.20").unwrap()).unwrap();
        assert_eq!(
            a.amount() + b.amount(),
            Decimal::from_str("0.30").unwrap()
        );
    }
}
