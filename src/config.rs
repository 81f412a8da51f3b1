//! Compiled-in business rules. The store has no runtime configuration; the
//! only external knob is `RUST_LOG` for diagnostics on stderr.

use rust_decimal_macros::dec;

use crate::domain::Money;

/// Consecutive wrong PINs that lock an account for the rest of the process.
pub const MAX_PIN_ATTEMPTS: u32 = 3;

/// Balance that must remain after a purchase.
pub const RESERVE_MINIMUM: Money = Money(dec!(10000));

/// Purchases strictly above this amount earn the higher cashback rate.
pub const CASHBACK_THRESHOLD: Money = Money(dec!(1000000));

pub const CURRENCY_PREFIX: &str = "Rp";

pub const ACCOUNT_ID_LEN: usize = 10;

pub const DEFAULT_LOG_FILTER: &str = "error";
