//! Non-negative decimal amounts (cost and selling prices).

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A non-negative price carried at full decimal precision.
///
/// Rounding only happens at display time ([`Money::display_2dp`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Two-decimal rendering used by presentation (`"15.00"`).
    pub fn display_2dp(&self) -> String {
        format_2dp(self.0)
    }
}

/// Round-half-away formatting to two places, shared by prices and profits.
pub fn format_2dp(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Parse a decimal the way it appears in data files and forms.
///
/// Accepts plain notation (`"10"`, `"10.50"`) and scientific notation
/// (`"1e-05"`), which older float-based files may contain.
pub fn parse_decimal(raw: &str) -> Result<Decimal, DomainError> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| DomainError::validation(format!("invalid decimal '{raw}': {e}")))
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_decimal(s)?)
    }
}
