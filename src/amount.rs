// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A monetary value in a single currency.
///
/// The API transmits amounts as integers in the minor currency unit
/// (pence for GBP); construction divides by 100 in decimal arithmetic so
/// no value ever touches binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount {
    value: Decimal,
    currency: String,
}

impl Amount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Amount {
        Amount {
            value,
            currency: currency.into(),
        }
    }

    /// Builds an amount from an integer count of minor units, e.g.
    /// `from_minor_units(1951, "GBP")` is 19.51 GBP.
    pub fn from_minor_units(minor: i64, currency: impl Into<String>) -> Amount {
        Amount {
            value: Decimal::new(minor, 2),
            currency: currency.into(),
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sum of two amounts. Addition is only defined within one currency;
    /// mixing currencies fails with `CurrencyMismatch`.
    pub fn try_add(&self, other: &Amount) -> Result<Amount> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(Amount {
            value: self.value + other.value,
            currency: self.currency.clone(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value.round_dp(2), self.currency)
    }
}
