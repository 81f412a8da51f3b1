mod config;
mod console;
mod domain;
mod ledger;
mod seed;
mod session;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::console::{ReaderLines, WriterConsole};
use crate::ledger::InMemoryLedger;
use crate::session::Controller;

/// Diagnostics go to stderr so stdout carries only the store dialogue.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")] // one customer at a time, no background work
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let ledger = InMemoryLedger::seeded()?;
    debug!(accounts = ledger.len(), "ledger seeded");

    let input = ReaderLines::new(std::io::BufReader::new(std::io::stdin()));
    let output = WriterConsole::new(std::io::stdout());

    let mut controller = Controller::new(input, output, ledger);
    controller.run().await?;

    Ok(())
}
