use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

use crate::config::CURRENCY_PREFIX;

/// An exact currency amount. Balances keep full precision; only `Display`
/// rounds to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub Decimal);

impl Money {
    pub const DISPLAY_DECIMALS: u32 = 2;

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    #[cfg(test)]
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// `pct` percent of this amount, without rounding. `None` when the
    /// product does not fit in a `Decimal`.
    pub fn percent(&self, pct: u32) -> Option<Self> {
        self.0
            .checked_mul(Decimal::from(pct))?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Self)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Parses a user-typed amount: plain decimal or scientific notation,
    /// surrounding whitespace ignored, digit separators (`1_000`) refused.
    /// Sign is kept; business rules reject non-positive values later.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.contains('_') {
            return None;
        }

        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .ok()
            .map(Self)
    }
}

/// Inserts a `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        let neg = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        write!(
            f,
            "{}{}{}.{}",
            CURRENCY_PREFIX,
            if neg { "-" } else { "" },
            group_thousands(int_part),
            frac_part
        )
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}
