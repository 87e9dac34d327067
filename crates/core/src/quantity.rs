//! Order and restock quantities.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A strictly positive item count.
///
/// Quantities arrive as raw query or form text; anything missing, non-integer,
/// zero or negative is an `InvalidQuantity`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl ValueObject for Quantity {}

impl Quantity {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::invalid_quantity("quantity must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse an optional raw parameter, naming it in the error message.
    pub fn parse_param(name: &str, raw: Option<&str>) -> Result<Self, DomainError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::invalid_quantity(format!("{name} is required")))?;
        raw.parse()
            .map_err(|_| DomainError::invalid_quantity(format!("{name} must be a positive integer, got '{raw}'")))
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_quantity(format!("'{s}' is not an integer")))?;
        if value <= 0 {
            return Err(DomainError::invalid_quantity("quantity must be greater than 0"));
        }
        let value = u32::try_from(value)
            .map_err(|_| DomainError::invalid_quantity(format!("{value} is too large")))?;
        Ok(Self(value))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("3".parse::<Quantity>().unwrap().get(), 3);
        assert_eq!(" 12 ".parse::<Quantity>().unwrap().get(), 12);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for raw in ["0", "-4", "2.5", "abc", "", "99999999999"] {
            let err = raw.parse::<Quantity>().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidQuantity(_)),
                "expected InvalidQuantity for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn missing_param_is_invalid_quantity() {
        let err = Quantity::parse_param("order_qty", None).unwrap_err();
        assert_eq!(err, DomainError::invalid_quantity("order_qty is required"));

        let err = Quantity::parse_param("order_qty", Some("  ")).unwrap_err();
        assert_eq!(err, DomainError::invalid_quantity("order_qty is required"));
    }

    #[test]
    fn param_parse_error_names_the_param() {
        let err = Quantity::parse_param("restock_qty", Some("lots")).unwrap_err();
        assert!(err.to_string().contains("restock_qty"));
    }

    #[test]
    fn serde_rejects_zero() {
        let res: Result<Quantity, _> = serde_json::from_str("0");
        assert!(res.is_err());
        let q: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(q.get(), 7);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every positive u32 survives a text round trip.
            #[test]
            fn positive_values_parse(v in 1u32..) {
                let q: Quantity = v.to_string().parse().unwrap();
                prop_assert_eq!(q.get(), v);
            }

            /// Property: nothing at or below zero is accepted.
            #[test]
            fn non_positive_values_fail(v in i64::MIN..=0i64) {
                prop_assert!(v.to_string().parse::<Quantity>().is_err());
            }
        }
    }
}
