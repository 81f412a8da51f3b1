use crate::config::CASHBACK_THRESHOLD;
use crate::domain::Money;

/// Cashback category, derived from the first two characters of an account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Silver,
    Gold,
    Platinum,
    Regular,
}

impl Tier {
    /// Total over any input; unknown or too-short prefixes are `Regular`.
    pub fn of(id: &str) -> Self {
        match id.get(..2) {
            Some("38") => Tier::Silver,
            Some("56") => Tier::Gold,
            Some("74") => Tier::Platinum,
            _ => Tier::Regular,
        }
    }

    /// Cashback percentages as (amount <= threshold, amount > threshold).
    fn rates(self) -> (u32, u32) {
        match self {
            Tier::Silver => (0, 5),
            Tier::Gold => (2, 7),
            Tier::Platinum => (5, 10),
            Tier::Regular => (0, 0),
        }
    }

    /// `None` when the cashback would overflow.
    pub fn cashback(self, amount: Money) -> Option<Money> {
        let (low, high) = self.rates();
        let pct = if amount > CASHBACK_THRESHOLD { high } else { low };
        amount.percent(pct)
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Regular => "Regular",
        };
        f.write_str(name)
    }
}
