//! Passbook - a bank account ledger for the terminal
//!
//! An account's balance is never stored: it is the sum of an append-only
//! list of signed movements. Checking and savings accounts share all of
//! their behavior except the kind of movement they record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, movements and accounts (the ledger core)
//! - `error`: Custom error types
//! - `config`: Path resolution and user settings
//! - `audit`: Append-only JSONL audit log
//! - `services`: The teller, which runs operations on one open account
//! - `display`: Terminal formatting for balances and history
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use passbook::models::{Account, Money};
//!
//! let mut account = Account::checking("Alice", Money::from_units(100));
//! account.withdraw(Money::from_units(150), Utc::now(), "Rent");
//!
//! assert_eq!(account.balance(), Money::from_units(-50));
//! assert_eq!(account.history().len(), 2);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PassbookError, PassbookResult};
