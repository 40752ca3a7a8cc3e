//! User settings for Passbook
//!
//! Startup defaults for the interactive session: which kind of account to
//! open, its opening amount, how money and dates are shown, and whether
//! withdrawals may overdraw the account.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::PassbookPaths;
use crate::error::PassbookError;
use crate::models::{AccountKind, Money};

/// What the teller does with a withdrawal larger than the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverdraftPolicy {
    /// Record it and let the balance go negative
    #[default]
    Allow,
    /// Refuse it with an insufficient funds error
    Reject,
}

impl fmt::Display for OverdraftPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// User settings for Passbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Kind of account opened at startup
    #[serde(default)]
    pub account_kind: AccountKind,

    /// Amount recorded as the opening balance
    #[serde(default = "default_opening_amount")]
    pub opening_amount: Money,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for history rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub overdraft: OverdraftPolicy,

    /// Whether every operation is appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_opening_amount() -> Money {
    Money::from_units(10_000)
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            account_kind: AccountKind::default(),
            opening_amount: default_opening_amount(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            overdraft: OverdraftPolicy::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PassbookPaths) -> Result<Self, PassbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PassbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PassbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that serde cannot: the date format must be valid strftime
    pub fn validate(&self) -> Result<(), PassbookError> {
        if StrftimeItems::new(&self.date_format).any(|item| item == Item::Error) {
            return Err(PassbookError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PassbookPaths) -> Result<(), PassbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PassbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PassbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
