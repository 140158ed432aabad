// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    VAC, // Virtual auction currency
    SEK, // Swedish Krona
    DKK, // Danish Krone
    BRL, // Brazilian Real
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::VAC => write!(f, "VAC"),
            Currency::SEK => write!(f, "SEK"),
            Currency::DKK => write!(f, "DKK"),
            Currency::BRL => write!(f, "BRL"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VAC" => Ok(Currency::VAC),
            "SEK" => Ok(Currency::SEK),
            "DKK" => Ok(Currency::DKK),
            "BRL" => Ok(Currency::BRL),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

pub type AmountValue = i64;

/// A monetary value in a single currency.
///
/// Ordering compares the currency first, so only amounts in the same
/// currency should be compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    currency: Currency,
    value: AmountValue,
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl Amount {
    pub fn new(currency: Currency, value: AmountValue) -> Self {
        Amount { currency, value }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, self.value)
    }
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Byte offset of the first non-letter, so slicing stays on a char boundary
        let currency_end = s.find(|c: char| !c.is_alphabetic()).unwrap_or(s.len());
        if currency_end == 0 {
            return Err("Invalid amount format: no currency".to_string());
        }

        let currency = Currency::from_str(&s[..currency_end])?;

        let value_str = &s[currency_end..];
        let value = value_str.parse::<AmountValue>()
            .map_err(|_| format!("Invalid amount value: {}", value_str))?;

        Ok(Amount { currency, value })
    }
}
