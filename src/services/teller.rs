//! Teller service
//!
//! Wraps the single account of an interactive session. The teller stamps
//! every movement with the current time, applies the configured overdraft
//! policy and writes each operation to the audit log.

use chrono::Utc;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{OverdraftPolicy, Settings};
use crate::error::{PassbookError, PassbookResult};
use crate::models::{Account, AccountKind, Money, Movement};

/// Service for the operations of one open account
pub struct Teller {
    account: Account,
    overdraft: OverdraftPolicy,
    audit: Option<AuditLogger>,
}

impl Teller {
    /// Open a new account and log its opening balance
    pub fn open(
        name: &str,
        kind: AccountKind,
        initial_amount: Money,
        overdraft: OverdraftPolicy,
        audit: Option<AuditLogger>,
    ) -> PassbookResult<Self> {
        let account = Account::open(name, kind, initial_amount);
        let teller = Self {
            account,
            overdraft,
            audit,
        };

        teller.log(&AuditEntry::opened(&teller.account))?;

        Ok(teller)
    }

    /// Open an account using the kind, opening amount and policy from settings
    pub fn from_settings(
        name: &str,
        settings: &Settings,
        audit: Option<AuditLogger>,
    ) -> PassbookResult<Self> {
        Self::open(
            name,
            settings.account_kind,
            settings.opening_amount,
            settings.overdraft,
            audit,
        )
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn balance(&self) -> Money {
        self.account.balance()
    }

    pub fn history(&self) -> &[Movement] {
        self.account.history()
    }

    /// Deposit `amount` now. Returns the new balance.
    ///
    /// The movement is recorded before it is audited. If writing the audit
    /// entry fails the error is returned, but the movement stays recorded:
    /// the account history is the ledger and the log only mirrors it.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the new balance would not fit in a
    /// `Decimal`. Nothing is recorded.
    pub fn deposit(&mut self, amount: Money, description: &str) -> PassbookResult<Money> {
        self.balance_after(amount)?;

        self.account.deposit(amount, Utc::now(), description);
        self.log(&AuditEntry::recorded(&self.account))?;
        Ok(self.account.balance())
    }

    /// Withdraw `amount` now. Returns the new balance.
    ///
    /// Recorded first and audited second, like [`Teller::deposit`].
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the new balance would not fit in a
    /// `Decimal`, and `InsufficientFunds` when the policy is `Reject` and
    /// the withdrawal would leave the balance below zero. In both cases
    /// nothing is recorded.
    pub fn withdraw(&mut self, amount: Money, description: &str) -> PassbookResult<Money> {
        let remaining = self.balance_after(-amount)?;
        if self.overdraft == OverdraftPolicy::Reject && remaining.is_negative() {
            return Err(PassbookError::InsufficientFunds {
                needed: amount,
                available: self.account.balance(),
            });
        }

        self.account.withdraw(amount, Utc::now(), description);
        self.log(&AuditEntry::recorded(&self.account))?;
        Ok(self.account.balance())
    }

    /// Balance once a movement of `amount` is recorded
    fn balance_after(&self, amount: Money) -> PassbookResult<Money> {
        self.account
            .balance()
            .checked_add(amount)
            .ok_or_else(|| PassbookError::Validation("amount out of range".into()))
    }

    fn log(&self, entry: &AuditEntry) -> PassbookResult<()> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{MovementKind, OPENING_BALANCE_DESCRIPTION};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn open_checking(amount: i64, overdraft: OverdraftPolicy) -> Teller {
        Teller::open(
            "Alice",
            AccountKind::Checking,
            Money::from_units(amount),
            overdraft,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_open() {
        let teller = open_checking(100, OverdraftPolicy::Allow);
        assert_eq!(teller.balance(), Money::from_units(100));
        assert_eq!(teller.history().len(), 1);
        assert_eq!(teller.history()[0].description(), OPENING_BALANCE_DESCRIPTION);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            account_kind: AccountKind::Savings,
            ..Settings::default()
        };
        let teller = Teller::from_settings("Bob", &settings, None).unwrap();

        assert_eq!(teller.account().kind(), AccountKind::Savings);
        assert_eq!(teller.balance(), Money::from_units(10_000));
        assert_eq!(teller.history()[0].kind(), MovementKind::Savings);
        assert_eq!(teller.overdraft, OverdraftPolicy::Allow);
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut teller = open_checking(100, OverdraftPolicy::Allow);

        let balance = teller.deposit(Money::from_units(50), "Salary").unwrap();
        assert_eq!(balance, Money::from_units(150));

        let balance = teller.withdraw(Money::from_units(20), "Lunch").unwrap();
        assert_eq!(balance, Money::from_units(130));

        let last = &teller.history()[2];
        assert_eq!(last.amount(), Money::from_units(-20));
        assert_eq!(last.description(), "Lunch");
    }

    #[test]
    fn test_allow_policy_permits_overdraft() {
        let mut teller = open_checking(100, OverdraftPolicy::Allow);
        let balance = teller.withdraw(Money::from_units(150), "Rent").unwrap();

        assert_eq!(balance, Money::from_units(-50));
        assert_eq!(teller.history().len(), 2);
    }

    #[test]
    fn test_reject_policy_refuses_overdraft() {
        let mut teller = open_checking(100, OverdraftPolicy::Reject);
        let err = teller.withdraw(Money::from_units(150), "Rent").unwrap_err();

        match err {
            PassbookError::InsufficientFunds { needed, available } => {
                assert_eq!(needed, Money::from_units(150));
                assert_eq!(available, Money::from_units(100));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(teller.history().len(), 1);
        assert_eq!(teller.balance(), Money::from_units(100));
    }

    #[test]
    fn test_reject_policy_allows_exact_balance() {
        let mut teller = open_checking(100, OverdraftPolicy::Reject);
        let balance = teller.withdraw(Money::from_units(100), "Everything").unwrap();
        assert!(balance.is_zero());
    }

    #[test]
    fn test_out_of_range_amounts_are_refused() {
        let max = Money::from(Decimal::MAX);
        let mut teller = open_checking(100, OverdraftPolicy::Allow);

        let err = teller.deposit(max, "Too much").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: amount out of range");

        teller.withdraw(Money::from_units(200), "Rent").unwrap();
        let err = teller.withdraw(max, "Too much").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(teller.history().len(), 2);
        assert_eq!(teller.balance(), Money::from_units(-100));

        // From below zero the same deposit fits
        let balance = teller.deposit(max, "Edge").unwrap();
        assert_eq!(balance, max - Money::from_units(100));
    }

    #[test]
    fn test_out_of_range_checked_before_overdraft_policy() {
        let mut teller = open_checking(-100, OverdraftPolicy::Reject);
        let err = teller
            .withdraw(Money::from(Decimal::MAX), "Too much")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(teller.history().len(), 1);
    }

    #[test]
    fn test_audit_failure_keeps_recorded_movement() {
        let temp_dir = TempDir::new().unwrap();
        let mut teller = open_checking(100, OverdraftPolicy::Allow);
        teller.audit = Some(AuditLogger::new(
            temp_dir.path().join("missing").join("audit.log"),
        ));

        let err = teller.deposit(Money::from_units(5), "Gift").unwrap_err();
        assert!(matches!(err, PassbookError::Io(_)));
        assert_eq!(teller.history().len(), 2);
        assert_eq!(teller.balance(), Money::from_units(105));
    }

    #[test]
    fn test_operations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        let mut teller = Teller::open(
            "Carol",
            AccountKind::Checking,
            Money::from_units(100),
            OverdraftPolicy::Reject,
            Some(logger.clone()),
        )
        .unwrap();
        teller.deposit(Money::from_units(10), "Gift").unwrap();
        teller.withdraw(Money::from_units(30), "Book").unwrap();
        assert!(teller.withdraw(Money::from_units(500), "Car").is_err());

        let entries = logger.read_all().unwrap();
        let operations: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::Open, Operation::Deposit, Operation::Withdrawal]
        );
        assert_eq!(entries[2].balance_after, Money::from_units(80));
        assert!(entries
            .iter()
            .all(|e| e.account_id == teller.account().id().to_string()));
    }
}
