//! Price Model
//!
//! Prices are whole rupees. The wire format is the display string used by the
//! storefront (`"₹89,999"`), so formatting happens only at the serde boundary.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const CURRENCY_SYMBOL: char = '₹';

/// Whole-rupee price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    pub const fn rupees(&self) -> u64 {
        self.0
    }
}

/// Raised when a price string contains no digits or overflows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0:?}")]
pub struct InvalidPrice(pub String);

impl FromStr for Price {
    type Err = InvalidPrice;

    /// Every non-digit character is dropped before parsing, so `"₹89,999"`,
    /// `"89999"` and `"Rs 89,999"` all read as 89999.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(InvalidPrice(s.to_string()));
        }
        digits
            .parse::<u64>()
            .map(Price)
            .map_err(|_| InvalidPrice(s.to_string()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        grouped.push(CURRENCY_SYMBOL);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

impl From<u64> for Price {
    fn from(rupees: u64) -> Self {
        Self(rupees)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a formatted price string or a non-negative integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Ok(Price(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                u64::try_from(v)
                    .map(Price)
                    .map_err(|_| E::custom(format!("negative price: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}
