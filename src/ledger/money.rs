use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LedgerError;

/// Decimal-backed monetary value. Arithmetic stays exact across repeated
/// add/aggregate cycles; display always shows two fractional digits.
#[derive(Copy, Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

// Snapshots store amounts as plain JSON numbers, so the serde representation
// goes through `rust_decimal::serde::float`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Money)
    }
}

impl Money {
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parses raw user input into a positive amount. Non-numeric, zero, and
    /// negative inputs are rejected with `InvalidAmount`.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        let value = Decimal::from_str(raw.trim())
            .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
        if value <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(raw.to_string()));
        }
        Ok(Self(value))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}
