//! Core data models for Passbook
//!
//! This module contains the ledger domain: accounts, the movements recorded
//! against them, and the money type both are built on.

pub mod account;
pub mod ids;
pub mod money;
pub mod movement;

pub use account::{Account, AccountKind, OPENING_BALANCE_DESCRIPTION};
pub use ids::AccountId;
pub use money::{Money, MoneyParseError};
pub use movement::{Movement, MovementKind};
