use futures::Stream;

use crate::domain::{Account, Error};

/// Source of customer input, one line per item. The session ends when the
/// stream does.
pub trait LineStream {
    type Lines: Stream<Item = Result<String, Error>> + Send + Unpin + 'static;
    fn lines(&mut self) -> Self::Lines;
}

/// Sink for everything shown to the customer.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), Error>;

    /// Writes `text` without a newline and flushes, ready for input.
    fn prompt(&mut self, text: &str) -> Result<(), Error>;
}

pub trait AccountRepository {
    fn find(&self, id: &str) -> Option<&Account>;
    fn find_mut(&mut self, id: &str) -> Option<&mut Account>;
}
