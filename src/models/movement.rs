//! Movement model
//!
//! A movement is one signed change to an account's balance: a deposit,
//! a withdrawal or the opening balance. Movements are immutable once built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Which kind of account a movement was recorded on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Plain movement, recorded by checking accounts
    #[default]
    Standard,
    /// Movement recorded by a savings account
    Savings,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A single recorded movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    amount: Money,
    timestamp: DateTime<Utc>,
    description: String,
    #[serde(default)]
    kind: MovementKind,
}

impl Movement {
    /// Create a plain movement
    pub fn new(amount: Money, timestamp: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self::with_kind(MovementKind::Standard, amount, timestamp, description)
    }

    /// Create a savings movement
    pub fn savings(
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_kind(MovementKind::Savings, amount, timestamp, description)
    }

    fn with_kind(
        kind: MovementKind,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            timestamp,
            description: description.into(),
            kind,
        }
    }

    /// Signed amount (positive for credit, negative for debit)
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_savings(&self) -> bool {
        self.kind == MovementKind::Savings
    }

    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description,
            self.amount
        )
    }
}
