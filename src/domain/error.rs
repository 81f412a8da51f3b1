use crate::domain::Money;

/// How a failure is handled by the session: validation, authorization and
/// business-rule errors are shown and the loop continues; fatal ones end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    BusinessRule,
    Fatal,
}

/// Every message here is shown to the customer as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Seed data failed with: {0}")]
    Seed(String),

    #[error("Customer number must be exactly {expected} characters, got {actual}")]
    InvalidAccountId { expected: usize, actual: usize },

    #[error("Enter a valid amount")]
    InvalidAmount(String),

    #[error("Enter a number between 1-4")]
    MenuChoiceNotANumber(String),

    #[error("Invalid choice. Please choose 1-4")]
    UnknownMenuChoice(i64),

    #[error("Customer number not found.")]
    AccountNotFound(String),

    #[error("Wrong PIN. Attempts remaining: {remaining}")]
    WrongPin { remaining: u32 },

    #[error("Wrong PIN. Attempts remaining: 0\nYour account has been locked!")]
    LockedOut,

    #[error("Account is locked due to too many wrong PIN attempts.")]
    AccountLocked,

    #[error("Account is locked, transactions are not allowed")]
    TransactionsLocked,

    #[error("Top up amount must be greater than 0")]
    NonPositiveTopUp,

    #[error("Purchase amount must be greater than 0")]
    NonPositivePurchase,

    #[error("Transaction failed. A minimum balance of {reserve} must remain")]
    ReserveBreached { reserve: Money },

    #[error("Amount is too large to process")]
    AmountTooLarge,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IO(_) | Error::Seed(_) | Error::InvalidAccountId { .. } => ErrorKind::Fatal,
            Error::InvalidAmount(_)
            | Error::MenuChoiceNotANumber(_)
            | Error::UnknownMenuChoice(_) => ErrorKind::Validation,
            Error::AccountNotFound(_)
            | Error::WrongPin { .. }
            | Error::LockedOut
            | Error::AccountLocked => ErrorKind::Authorization,
            Error::TransactionsLocked
            | Error::NonPositiveTopUp
            | Error::NonPositivePurchase
            | Error::ReserveBreached { .. }
            | Error::AmountTooLarge => ErrorKind::BusinessRule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use crate::config::RESERVE_MINIMUM;

    #[test]
    fn messages_are_customer_facing() {
        assert_eq!(
            Error::WrongPin { remaining: 2 }.to_string(),
            "Wrong PIN. Attempts remaining: 2"
        );
        assert_eq!(
            Error::ReserveBreached { reserve: RESERVE_MINIMUM }.to_string(),
            "Transaction failed. A minimum balance of Rp10,000.00 must remain"
        );
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(Error::InvalidAmount("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(Error::AccountLocked.kind(), ErrorKind::Authorization);
        assert_eq!(Error::NonPositiveTopUp.kind(), ErrorKind::BusinessRule);
        assert_eq!(
            Error::InvalidAccountId { expected: 10, actual: 3 }.kind(),
            ErrorKind::Fatal
        );
    }
}
