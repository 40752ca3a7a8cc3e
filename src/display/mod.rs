//! Display formatting for terminal output
//!
//! Turns accounts and their histories into the text shown by the
//! interactive menu.

pub mod account;
pub mod movement;

pub use account::format_balance;
pub use movement::{format_history, format_movement_row};
