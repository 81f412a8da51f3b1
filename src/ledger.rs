use std::io::Read;

use crate::domain::{Account, AccountRepository, Error};
use crate::seed::{SEED_ACCOUNTS, SeedReader};

/// All accounts, in seed order. Populated once at startup; nothing is added
/// or removed afterwards.
#[derive(Default, Debug)]
pub struct InMemoryLedger {
    accounts: Vec<Account>,
}

impl InMemoryLedger {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(Self::new(SeedReader::new(reader).accounts()?))
    }

    pub fn seeded() -> Result<Self, Error> {
        Self::from_reader(SEED_ACCOUNTS.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }
}

impl AccountRepository for InMemoryLedger {
    fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id().as_str() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id().as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryLedger;
    use crate::domain::AccountRepository;

    #[test]
    fn seeded_ledger_has_three_accounts() {
        let ledger = InMemoryLedger::seeded().unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut ledger = InMemoryLedger::seeded().unwrap();
        assert_eq!(ledger.find("5609876543").unwrap().name(), "Ani Wijaya");
        assert!(ledger.find(" 5609876543").is_none());
        assert!(ledger.find("560987654").is_none());
        assert!(ledger.find("0000000000").is_none());
        assert!(ledger.find_mut("7412345678").is_some());
    }

    #[test]
    fn mutations_persist_across_lookups() {
        let mut ledger = InMemoryLedger::seeded().unwrap();
        for _ in 0..3 {
            let _ = ledger.find_mut("3801234567").unwrap().authenticate("9999");
        }
        assert!(ledger.find("3801234567").unwrap().is_locked());
        assert!(!ledger.find("5609876543").unwrap().is_locked());
    }
}
