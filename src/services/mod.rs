//! Service layer for Passbook
//!
//! The service layer sits between the interactive menu and the ledger
//! model, adding timestamps, the overdraft policy and audit logging.

pub mod teller;

pub use teller::Teller;
