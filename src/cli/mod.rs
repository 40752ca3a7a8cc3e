//! CLI front end
//!
//! The interactive menu that bridges terminal input with the teller
//! service.

pub mod menu;

pub use menu::run_session;
