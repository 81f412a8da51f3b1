pub mod account;
pub mod error;
pub mod money;
pub mod tier;
pub mod traits;

pub use account::{Account, AccountId};
pub use error::Error;
pub use money::Money;
pub use tier::Tier;
pub use traits::{AccountRepository, Console, LineStream};
