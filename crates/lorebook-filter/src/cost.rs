//! Currency-valued fields.
//!
//! A [`Cost`] is stored structurally (`{ amount, currency }`) but filtered as
//! a single float in gold-piece units, using the fixed denomination table on
//! [`Currency::rate`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Copper pieces.
    Cp,
    /// Silver pieces.
    Sp,
    /// Electrum pieces.
    Ep,
    /// Gold pieces.
    Gp,
    /// Platinum pieces.
    Pp,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Cp,
        Currency::Sp,
        Currency::Ep,
        Currency::Gp,
        Currency::Pp,
    ];

    /// Value of one coin of this denomination, in gold pieces.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Cp => 0.01,
            Currency::Sp => 0.1,
            Currency::Ep => 0.5,
            Currency::Gp => 1.0,
            Currency::Pp => 10.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Cp => "cp",
            Currency::Sp => "sp",
            Currency::Ep => "ep",
            Currency::Gp => "gp",
            Currency::Pp => "pp",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary amount in a single denomination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub amount: f64,
    pub currency: Currency,
}

impl Cost {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Cost { amount, currency }
    }

    /// Shorthand for an amount in gold pieces.
    pub fn gp(amount: f64) -> Self {
        Cost::new(amount, Currency::Gp)
    }

    /// Converts the amount to gold pieces.
    pub fn in_gold(self) -> f64 {
        self.amount * self.currency.rate()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
