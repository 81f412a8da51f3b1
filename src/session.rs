use core::str::FromStr;

use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::domain::{
    AccountId, Error, Money,
    traits::{AccountRepository, Console, LineStream},
};

const BANNER: &str = "=== WELCOME TO TINY STORE ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowInfo,
    TopUp,
    Purchase,
    Logout,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .parse()
            .map_err(|_| Error::MenuChoiceNotANumber(s.to_owned()))?;

        match n {
            1 => Ok(MenuChoice::ShowInfo),
            2 => Ok(MenuChoice::TopUp),
            3 => Ok(MenuChoice::Purchase),
            4 => Ok(MenuChoice::Logout),
            other => Err(Error::UnknownMenuChoice(other)),
        }
    }
}

fn parse_amount(input: &str) -> Result<Money, Error> {
    Money::from_decimal_str(input).ok_or_else(|| Error::InvalidAmount(input.to_owned()))
}

/// Which line the controller is waiting for. The first two states are
/// "logged out"; the rest hold the one authenticated account.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingCustomerNumber,
    AwaitingPin { customer_number: String },
    MainMenu { account: AccountId },
    AwaitingTopUp { account: AccountId },
    AwaitingPurchase { account: AccountId },
}

impl State {
    fn logged_in(&self) -> Option<&AccountId> {
        match self {
            State::AwaitingCustomerNumber | State::AwaitingPin { .. } => None,
            State::MainMenu { account }
            | State::AwaitingTopUp { account }
            | State::AwaitingPurchase { account } => Some(account),
        }
    }
}

/// Drives the store menu: one input line per step, every outcome written to
/// the console. Runs until the input stream ends.
#[derive(Debug)]
pub struct Controller<I, O, R>
where
    I: LineStream,
    O: Console,
    R: AccountRepository,
{
    input: I,
    console: O,
    accounts: R,
    state: State,
}

impl<I, O, R> Controller<I, O, R>
where
    I: LineStream,
    O: Console,
    R: AccountRepository,
{
    pub fn new(input: I, console: O, accounts: R) -> Self {
        Self {
            input,
            console,
            accounts,
            state: State::AwaitingCustomerNumber,
        }
    }

    pub fn logged_in(&self) -> Option<&AccountId> {
        self.state.logged_in()
    }

    pub async fn run(&mut self) -> Result<(), Error> {
        self.console.say(BANNER)?;
        let mut lines = self.input.lines();

        loop {
            self.show_prompt()?;
            let Some(line) = lines.next().await else {
                break;
            };
            self.handle_line(line?)?;
        }

        info!(logged_in = ?self.logged_in(), "input closed, session ended");
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<(), Error> {
        match &self.state {
            State::AwaitingCustomerNumber => {
                self.console.say("\n=== LOGIN MENU ===")?;
                self.console.prompt("Enter customer number (10 digits): ")
            }
            State::AwaitingPin { .. } => self.console.prompt("Enter PIN: "),
            State::MainMenu { .. } => {
                self.console.say("\n=== MAIN MENU ===")?;
                self.console.say("1. Show account info")?;
                self.console.say("2. Top up")?;
                self.console.say("3. Purchase")?;
                self.console.say("4. Logout")?;
                self.console.prompt("Choose menu (1-4): ")
            }
            State::AwaitingTopUp { .. } => self.console.prompt("\nEnter top-up amount: Rp"),
            State::AwaitingPurchase { .. } => {
                self.console.prompt("\nEnter purchase amount: Rp")
            }
        }
    }

    fn handle_line(&mut self, line: String) -> Result<(), Error> {
        let state = std::mem::replace(&mut self.state, State::AwaitingCustomerNumber);

        self.state = match state {
            State::AwaitingCustomerNumber => State::AwaitingPin {
                customer_number: line,
            },
            State::AwaitingPin { customer_number } => match self.login(&customer_number, &line) {
                Ok((account, name)) => {
                    self.console
                        .say(&format!("Login successful! Welcome {}", name))?;
                    State::MainMenu { account }
                }
                Err(e) => {
                    self.report(&e)?;
                    State::AwaitingCustomerNumber
                }
            },
            State::MainMenu { account } => match line.parse::<MenuChoice>() {
                Ok(MenuChoice::ShowInfo) => {
                    self.show_info(&account)?;
                    State::MainMenu { account }
                }
                Ok(MenuChoice::TopUp) => State::AwaitingTopUp { account },
                Ok(MenuChoice::Purchase) => State::AwaitingPurchase { account },
                Ok(MenuChoice::Logout) => {
                    info!(account = %account, "logged out");
                    self.console.say("Logout successful.")?;
                    State::AwaitingCustomerNumber
                }
                Err(e) => {
                    self.report(&e)?;
                    State::MainMenu { account }
                }
            },
            State::AwaitingTopUp { account } => {
                self.top_up(&account, &line)?;
                State::MainMenu { account }
            }
            State::AwaitingPurchase { account } => {
                self.purchase(&account, &line)?;
                State::MainMenu { account }
            }
        };

        Ok(())
    }

    /// Returns the authenticated account's id and display name.
    fn login(&mut self, customer_number: &str, pin: &str) -> Result<(AccountId, String), Error> {
        let account = self
            .accounts
            .find_mut(customer_number)
            .ok_or_else(|| Error::AccountNotFound(customer_number.to_owned()))?;

        if let Err(e) = account.authenticate(pin) {
            warn!(
                account = %account.id(),
                failed_attempts = account.failed_attempts(),
                locked = account.is_locked(),
                "authentication failed"
            );
            return Err(e);
        }

        info!(account = %account.id(), "logged in");
        Ok((account.id().clone(), account.name().to_owned()))
    }

    fn show_info(&mut self, account: &AccountId) -> Result<(), Error> {
        let Some(summary) = self.accounts.find(account.as_str()).map(|acc| acc.describe()) else {
            return self.report(&Error::AccountNotFound(account.to_string()));
        };
        self.console.say(&format!("\n{}", summary))
    }

    fn top_up(&mut self, account: &AccountId, input: &str) -> Result<(), Error> {
        let result = parse_amount(input).and_then(|amount| {
            self.accounts
                .find_mut(account.as_str())
                .ok_or_else(|| Error::AccountNotFound(account.to_string()))?
                .top_up(amount)
        });

        match result {
            Ok(balance) => {
                info!(account = %account, %balance, "top up committed");
                self.console
                    .say(&format!("Top up successful. New balance: {}", balance))
            }
            Err(e) => self.report(&e),
        }
    }

    fn purchase(&mut self, account: &AccountId, input: &str) -> Result<(), Error> {
        let result = parse_amount(input).and_then(|amount| {
            self.accounts
                .find_mut(account.as_str())
                .ok_or_else(|| Error::AccountNotFound(account.to_string()))?
                .purchase(amount)
        });

        match result {
            Ok(receipt) => {
                info!(
                    account = %account,
                    amount = %receipt.amount,
                    cashback = %receipt.cashback,
                    balance = %receipt.balance,
                    "purchase committed"
                );
                self.console
                    .say(&format!("Purchase successful. Cashback: {}", receipt.cashback))?;
                self.console
                    .say(&format!("New balance: {}", receipt.balance))
            }
            Err(e) => self.report(&e),
        }
    }

    /// Shows a rejected step to the customer. The session carries on.
    fn report(&mut self, error: &Error) -> Result<(), Error> {
        debug!(detail = ?error, "rejected input");
        warn!(kind = ?error.kind(), "{}", error);
        self.console.say(&error.to_string())
    }

    #[cfg(test)]
    fn into_repository(self) -> R {
        self.accounts
    }
}
