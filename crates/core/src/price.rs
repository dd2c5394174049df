//! Whole-ruble price value object.
//!
//! Catalog prices are written as `"<digits>₽"` (e.g. `"20000₽"`), without
//! grouping separators and without kopecks. Parsing strips the currency glyph
//! and any whitespace; anything else that is not a base-10 integer is rejected
//! with [`DomainError::MalformedPrice`].

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Currency glyph used by the storefront.
pub const RUBLE_SIGN: char = '₽';

/// Price in whole rubles.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn rubles(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl ValueObject for Price {}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let digits = compact
            .strip_suffix(RUBLE_SIGN)
            .ok_or_else(|| DomainError::malformed_price(s))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::malformed_price(s));
        }

        digits
            .parse::<u64>()
            .map(Price)
            .map_err(|_| DomainError::malformed_price(s))
    }
}

impl TryFrom<String> for Price {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.0, RUBLE_SIGN)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| Price(acc.0.saturating_add(p.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_format() {
        assert_eq!("20000₽".parse::<Price>().unwrap(), Price::rubles(20000));
        assert_eq!("2500₽".parse::<Price>().unwrap().amount(), 2500);
    }

    #[test]
    fn strips_whitespace_around_and_inside() {
        assert_eq!(" 35 700 ₽ ".parse::<Price>().unwrap(), Price::rubles(35700));
    }

    #[test]
    fn rejects_missing_glyph() {
        let err = "20000".parse::<Price>().unwrap_err();
        assert_eq!(err, DomainError::MalformedPrice("20000".to_string()));
    }

    #[test]
    fn rejects_non_numeric_content() {
        for raw in ["", "₽", "abc₽", "-5₽", "12.50₽", "1,000₽", "₽100"] {
            assert!(
                matches!(raw.parse::<Price>(), Err(DomainError::MalformedPrice(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!("99999999999999999999999₽".parse::<Price>().is_err());
    }

    #[test]
    fn displays_in_catalog_format() {
        assert_eq!(Price::rubles(52000).to_string(), "52000₽");
    }

    #[test]
    fn times_and_sum() {
        let total: Price = [Price::rubles(20000).times(2), Price::rubles(7000).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::rubles(47000));
    }

    #[test]
    fn arithmetic_saturates_at_u64_max() {
        assert_eq!(Price::rubles(u64::MAX / 2 + 1).times(2), Price::rubles(u64::MAX));
        assert_eq!(Price::rubles(u64::MAX).times(u32::MAX), Price::rubles(u64::MAX));

        let total: Price = [Price::rubles(u64::MAX), Price::rubles(1), Price::rubles(100)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::rubles(u64::MAX));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Price::rubles(47000)).unwrap();
        assert_eq!(json, "\"47000₽\"");
        let err = serde_json::from_str::<Price>("\"lots\"").unwrap_err();
        assert!(err.to_string().contains("malformed price"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every formatted amount parses back to itself.
            #[test]
            fn display_then_parse_is_identity(amount in any::<u64>()) {
                let price = Price::rubles(amount);
                prop_assert_eq!(price.to_string().parse::<Price>().unwrap(), price);
            }

            /// Property: strings without the ruble sign never parse.
            #[test]
            fn strings_without_glyph_are_rejected(raw in "[0-9a-z ]{0,12}") {
                prop_assert!(raw.parse::<Price>().is_err());
            }
        }
    }
}
