//! Audit logging for Passbook
//!
//! Every account opening and every recorded movement is appended to a
//! line-delimited JSON file (JSONL). The log is write-only from the
//! session's point of view: it is never replayed to rebuild an account.
//!
//! - `AuditEntry`: one operation, with the movement snapshot and the
//!   balance after it.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
