use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the Paymob gateway, with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Egyptian Pound
    EGP,
    /// US Dollar
    USD,
    /// Saudi Riyal
    SAR,
    /// UAE Dirham
    AED,
    /// Pakistani Rupee
    PKR,
}

impl Currency {
    /// Returns the decimal scale for this currency.
    /// All Paymob currencies use 2 decimal places (amounts are sent in cents).
    pub fn scale(&self) -> u32 {
        2
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Validates that a decimal value is positive and has the correct scale
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        if amount.scale() > self.scale() {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self,
                self.scale(),
                amount.scale()
            ));
        }

        if amount <= Decimal::ZERO {
            return Err(format!("{} amount must be positive", self));
        }

        Ok(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::EGP => write!(f, "EGP"),
            Currency::USD => write!(f, "USD"),
            Currency::SAR => write!(f, "SAR"),
            Currency::AED => write!(f, "AED"),
            Currency::PKR => write!(f, "PKR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EGP" => Ok(Currency::EGP),
            "USD" => Ok(Currency::USD),
            "SAR" => Ok(Currency::SAR),
            "AED" => Ok(Currency::AED),
            "PKR" => Ok(Currency::PKR),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
