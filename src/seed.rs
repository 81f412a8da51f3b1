use std::io::Read;

use serde::Deserialize;

use crate::domain::{Account, Error, Money};

/// The fixed customer list every run starts from.
pub const SEED_ACCOUNTS: &str = "\
id,name,balance,pin
3801234567,Budi Santoso,500000,1234
5609876543,Ani Wijaya,1500000,4321
7412345678,Citra Dewi,3000000,0000
";

pub struct SeedReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SeedReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self { reader: rdr }
    }

    /// Reads every record in order. Any bad record, including an id of the
    /// wrong length, fails the whole load.
    pub fn accounts(self) -> Result<Vec<Account>, Error> {
        self.reader
            .into_deserialize::<SeedRow>()
            .map(|row_res| match row_res {
                Ok(row) => Account::try_from(row),
                Err(e) => Err(Error::Seed(format!("CSV deserialization error: {}", e))),
            })
            .collect()
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct SeedRow {
    id: String,
    name: String,
    balance: Money,
    pin: String,
}

impl TryFrom<SeedRow> for Account {
    type Error = Error;

    fn try_from(row: SeedRow) -> Result<Self, Self::Error> {
        Account::new(&row.id, &row.name, row.balance, &row.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::{SEED_ACCOUNTS, SeedReader};
    use crate::domain::{Error, Money, Tier};

    #[test]
    fn loads_builtin_seed_in_order() {
        let accounts = SeedReader::new(SEED_ACCOUNTS.as_bytes()).accounts().unwrap();
        let ids: Vec<_> = accounts.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, ["3801234567", "5609876543", "7412345678"]);

        assert_eq!(accounts[0].name(), "Budi Santoso");
        assert_eq!(accounts[1].balance(), Money::from_major(1_500_000));
        assert_eq!(accounts[2].tier(), Tier::Platinum);
        assert!(accounts.iter().all(|a| !a.is_locked() && a.failed_attempts() == 0));
    }

    #[test]
    fn keeps_leading_zeros_in_pins() {
        let mut accounts = SeedReader::new(SEED_ACCOUNTS.as_bytes()).accounts().unwrap();
        assert!(accounts[2].authenticate("0000").is_ok());
    }

    #[test]
    fn short_id_fails_the_load() {
        let csv = "id,name,balance,pin\n12345,Short,100,1111\n";
        let err = SeedReader::new(csv.as_bytes()).accounts().unwrap_err();
        assert!(matches!(err, Error::InvalidAccountId { actual: 5, .. }));
    }

    #[test]
    fn malformed_balance_fails_the_load() {
        let csv = "id,name,balance,pin\n3801234567,Bad,lots,1111\n";
        let err = SeedReader::new(csv.as_bytes()).accounts().unwrap_err();
        assert!(matches!(err, Error::Seed(_)));
    }
}
