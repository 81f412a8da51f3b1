use crate::config::{ACCOUNT_ID_LEN, MAX_PIN_ATTEMPTS, RESERVE_MINIMUM};
use crate::domain::{Error, Money, Tier};

/// A customer number, always exactly `ACCOUNT_ID_LEN` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId(String);

impl AccountId {
    pub fn parse(id: &str) -> Result<Self, Error> {
        let actual = id.chars().count();
        if actual != ACCOUNT_ID_LEN {
            return Err(Error::InvalidAccountId {
                expected: ACCOUNT_ID_LEN,
                actual,
            });
        }
        Ok(Self(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tier(&self) -> Tier {
        Tier::of(&self.0)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a committed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub amount: Money,
    pub cashback: Money,
    pub balance: Money,
}

/// Read-only snapshot of an account, rendered as the info block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub name: String,
    pub tier: Tier,
    pub balance: Money,
    pub locked: bool,
}

impl core::fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== Account Information ===")?;
        writeln!(f, "Customer number: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Account type: {}", self.tier)?;
        writeln!(f, "Balance: {}", self.balance)?;
        write!(
            f,
            "Status: {}",
            if self.locked { "Locked" } else { "Active" }
        )
    }
}

/// A prepaid store-card account. State only changes through the methods
/// below; once `locked` is set it stays set for the life of the process.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Money,
    pin: String,
    failed_attempts: u32, // consecutive wrong PINs, 0..MAX while active
    locked: bool,
}

impl Account {
    pub fn new(id: &str, name: &str, balance: Money, pin: &str) -> Result<Self, Error> {
        Ok(Self {
            id: AccountId::parse(id)?,
            name: name.to_owned(),
            balance,
            pin: pin.to_owned(),
            failed_attempts: 0,
            locked: false,
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn tier(&self) -> Tier {
        self.id.tier()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// A locked account never authenticates and does not count the attempt.
    pub fn authenticate(&mut self, pin_attempt: &str) -> Result<(), Error> {
        if self.locked {
            return Err(Error::AccountLocked);
        }

        if pin_attempt == self.pin {
            self.failed_attempts = 0;
            return Ok(());
        }

        self.failed_attempts += 1;
        if self.failed_attempts >= MAX_PIN_ATTEMPTS {
            self.locked = true;
            return Err(Error::LockedOut);
        }

        Err(Error::WrongPin {
            remaining: MAX_PIN_ATTEMPTS - self.failed_attempts,
        })
    }

    /// Returns the new balance. Allowed on locked accounts.
    pub fn top_up(&mut self, amount: Money) -> Result<Money, Error> {
        if !amount.is_positive() {
            return Err(Error::NonPositiveTopUp);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountTooLarge)?;
        Ok(self.balance)
    }

    pub fn purchase(&mut self, amount: Money) -> Result<Receipt, Error> {
        if self.locked {
            return Err(Error::TransactionsLocked);
        }
        if !amount.is_positive() {
            return Err(Error::NonPositivePurchase);
        }

        let tentative = self
            .balance
            .checked_sub(amount)
            .ok_or(Error::AmountTooLarge)?;
        if tentative < RESERVE_MINIMUM {
            return Err(Error::ReserveBreached {
                reserve: RESERVE_MINIMUM,
            });
        }

        let cashback = self
            .tier()
            .cashback(amount)
            .ok_or(Error::AmountTooLarge)?;
        self.balance = tentative
            .checked_add(cashback)
            .ok_or(Error::AmountTooLarge)?;

        Ok(Receipt {
            amount,
            cashback,
            balance: self.balance,
        })
    }

    pub fn describe(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            tier: self.tier(),
            balance: self.balance,
            locked: self.locked,
        }
    }
}
