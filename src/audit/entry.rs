//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Account, Money, Movement};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Account was opened with its initial balance
    Open,
    /// Money was credited
    Deposit,
    /// Money was debited
    Withdrawal,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Open => write!(f, "OPEN"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdrawal => write!(f, "WITHDRAWAL"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the entry was written (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Display form of the account id (`acc-xxxxxxxx`)
    pub account_id: String,

    pub account_name: String,

    /// Signed amount of the recorded movement
    pub amount: Money,

    pub description: String,

    /// Account balance once the movement was recorded
    pub balance_after: Money,

    /// JSON snapshot of the recorded movement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a freshly opened account (its opening balance movement)
    pub fn opened(account: &Account) -> Self {
        Self::for_latest(Operation::Open, account)
    }

    /// Entry for the movement most recently recorded on `account`
    ///
    /// The operation is derived from the sign of the amount: negative
    /// amounts are withdrawals, everything else is a deposit.
    pub fn recorded(account: &Account) -> Self {
        let operation = match account.last_movement() {
            Some(m) if m.is_debit() => Operation::Withdrawal,
            _ => Operation::Deposit,
        };
        Self::for_latest(operation, account)
    }

    fn for_latest(operation: Operation, account: &Account) -> Self {
        let latest = account.last_movement();
        Self {
            timestamp: Utc::now(),
            operation,
            account_id: account.id().to_string(),
            account_name: account.name().to_string(),
            amount: latest.map(Movement::amount).unwrap_or_default(),
            description: latest
                .map(|m| m.description().to_string())
                .unwrap_or_default(),
            balance_after: account.balance(),
            movement: latest.and_then(|m| serde_json::to_value(m).ok()),
        }
    }

    /// Format as a human-readable single line
    pub fn format_human_readable(&self) -> String {
        format!(
            "{} {} {} ({}) {} \"{}\" -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account_id,
            self.account_name,
            self.amount,
            self.description,
            self.balance_after
        )
    }
}
