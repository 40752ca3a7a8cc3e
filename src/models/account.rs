//! Account model
//!
//! An account owns an append-only list of movements. Its balance is never
//! stored; it is the sum of the movement amounts, recomputed on every read,
//! so it can never drift from the history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::movement::Movement;

/// Description given to the movement recorded when an account is opened
pub const OPENING_BALANCE_DESCRIPTION: &str = "Initial Balance";

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
}

impl AccountKind {
    /// Parse account kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" | "chk" => Some(Self::Checking),
            "savings" | "sav" => Some(Self::Savings),
            _ => None,
        }
    }

    /// Build the movement this account kind records for an operation
    ///
    /// This is the only behavior that differs between account kinds.
    pub fn build_movement(
        &self,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Movement {
        match self {
            Self::Checking => Movement::new(amount, timestamp, description),
            Self::Savings => Movement::savings(amount, timestamp, description),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A bank account and its movement history
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: AccountId,
    name: String,
    kind: AccountKind,
    created_at: DateTime<Utc>,
    /// Never empty: the opening balance is recorded on construction
    movements: Vec<Movement>,
}

impl Account {
    /// Open a new account, recording `initial_amount` as its first movement
    ///
    /// Any amount is accepted, including zero and negative values.
    pub fn open(name: impl Into<String>, kind: AccountKind, initial_amount: Money) -> Self {
        Self::open_at(name, kind, initial_amount, Utc::now())
    }

    /// Open a new account as of the given time
    pub fn open_at(
        name: impl Into<String>,
        kind: AccountKind,
        initial_amount: Money,
        opened_at: DateTime<Utc>,
    ) -> Self {
        let mut account = Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            created_at: opened_at,
            movements: Vec::new(),
        };
        account.record_movement(initial_amount, opened_at, OPENING_BALANCE_DESCRIPTION);
        account
    }

    /// Open a checking account
    pub fn checking(name: impl Into<String>, initial_amount: Money) -> Self {
        Self::open(name, AccountKind::Checking, initial_amount)
    }

    /// Open a savings account
    pub fn savings(name: impl Into<String>, initial_amount: Money) -> Self {
        Self::open(name, AccountKind::Savings, initial_amount)
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append one movement built by this account's kind
    ///
    /// Negative amounts are debits. There is no overdraft check here: the
    /// balance is allowed to go below zero.
    pub fn record_movement(
        &mut self,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) {
        let movement = self.kind.build_movement(amount, timestamp, description);
        self.movements.push(movement);
    }

    /// Record a deposit
    pub fn deposit(
        &mut self,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) {
        self.record_movement(amount, timestamp, description);
    }

    /// Record a withdrawal of `amount` (stored as a negative movement)
    pub fn withdraw(
        &mut self,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) {
        self.record_movement(-amount, timestamp, description);
    }

    /// Current balance: the sum of all movement amounts
    ///
    /// Total as long as every running sum of the history stays within the
    /// `Decimal` range. `Teller` checks each amount with
    /// [`Money::checked_add`] before recording it, so histories built
    /// through it always qualify.
    pub fn balance(&self) -> Money {
        self.movements.iter().map(Movement::amount).sum()
    }

    /// All movements, oldest first
    pub fn history(&self) -> &[Movement] {
        &self.movements
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    /// The most recently recorded movement
    pub fn last_movement(&self) -> Option<&Movement> {
        self.movements.last()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementKind;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_open_records_initial_balance() {
        let account = Account::checking("Alice", Money::from_units(100));
        assert_eq!(account.name(), "Alice");
        assert_eq!(account.kind(), AccountKind::Checking);
        assert_eq!(account.movement_count(), 1);

        let first = &account.history()[0];
        assert_eq!(first.amount(), Money::from_units(100));
        assert_eq!(first.description(), OPENING_BALANCE_DESCRIPTION);
        assert_eq!(first.timestamp(), account.created_at());
        assert_eq!(account.balance(), Money::from_units(100));
    }

    #[test]
    fn test_open_accepts_zero_and_negative() {
        let zero = Account::checking("Zero", Money::zero());
        assert_eq!(zero.movement_count(), 1);
        assert!(zero.balance().is_zero());

        let negative = Account::savings("Debt", Money::from_units(-20));
        assert_eq!(negative.movement_count(), 1);
        assert_eq!(negative.balance(), Money::from_units(-20));
    }

    #[test]
    fn test_order_preserved() {
        let mut account = Account::checking("Bob", Money::from_units(100));
        for amount in [50, -20, 30] {
            account.record_movement(Money::from_units(amount), test_time(), "op");
        }

        assert_eq!(account.balance(), Money::from_units(160));
        let amounts: Vec<Money> = account.history().iter().map(Movement::amount).collect();
        assert_eq!(
            amounts,
            vec![
                Money::from_units(100),
                Money::from_units(50),
                Money::from_units(-20),
                Money::from_units(30),
            ]
        );
    }

    #[test]
    fn test_withdraw_past_zero_succeeds() {
        let mut account = Account::checking("Carol", Money::from_units(100));
        account.withdraw(Money::from_units(150), test_time(), "Big purchase");

        assert_eq!(account.balance(), Money::from_units(-50));
        assert_eq!(account.movement_count(), 2);
        assert_eq!(account.history()[1].amount(), Money::from_units(-150));
        assert_eq!(account.history()[1].description(), "Big purchase");
    }

    #[test]
    fn test_deposit_is_a_credit() {
        let mut account = Account::checking("Dan", Money::zero());
        account.deposit(Money::from_cents(1999), test_time(), "Refund");
        assert!(account.history()[1].is_credit());
        assert_eq!(account.balance(), Money::from_cents(1999));
    }

    #[test]
    fn test_checking_and_savings_differ_only_by_tag() {
        let mut checking = Account::checking("Eve", Money::from_units(100));
        let mut savings = Account::savings("Eve", Money::from_units(100));
        for account in [&mut checking, &mut savings] {
            account.deposit(Money::from_units(40), test_time(), "in");
            account.withdraw(Money::from_units(15), test_time(), "out");
        }

        assert_eq!(checking.balance(), savings.balance());
        assert_eq!(checking.movement_count(), savings.movement_count());
        assert!(checking
            .history()
            .iter()
            .all(|m| m.kind() == MovementKind::Standard));
        assert!(savings.history().iter().all(Movement::is_savings));
    }

    #[test]
    fn test_build_movement_dispatch() {
        let plain = AccountKind::Checking.build_movement(Money::from_units(1), test_time(), "a");
        let tagged = AccountKind::Savings.build_movement(Money::from_units(1), test_time(), "a");
        assert_eq!(plain.kind(), MovementKind::Standard);
        assert_eq!(tagged.kind(), MovementKind::Savings);
    }

    #[test]
    fn test_identity_stable() {
        let mut account = Account::checking("Frank", Money::from_units(10));
        let id = account.id();
        for i in 0..25 {
            account.record_movement(Money::from_units(i), test_time(), "op");
        }
        assert_eq!(account.id(), id);
        assert_eq!(account.name(), "Frank");
    }

    #[test]
    fn test_unique_ids() {
        let a = Account::checking("Same", Money::zero());
        let b = Account::checking("Same", Money::zero());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_account_kind_parsing() {
        assert_eq!(AccountKind::parse("checking"), Some(AccountKind::Checking));
        assert_eq!(AccountKind::parse("SAVINGS"), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse(" sav "), Some(AccountKind::Savings));
        assert_eq!(AccountKind::parse("credit"), None);
    }

    #[test]
    fn test_serialization() {
        let account = Account::savings("Grace", Money::from_units(5));
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["name"], "Grace");
        assert_eq!(json["kind"], "savings");
        assert_eq!(json["movements"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_display() {
        let account = Account::checking("My Checking", Money::zero());
        assert_eq!(format!("{}", account), "My Checking (Checking)");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the balance is always the exact sum of the history.
        #[test]
        fn balance_is_sum_of_recorded_amounts(
            initial in -1_000_000i64..1_000_000i64,
            cents in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..40)
        ) {
            let mut account = Account::checking("Prop", Money::from_cents(initial));
            for c in &cents {
                account.record_movement(Money::from_cents(*c), test_time(), "op");
            }

            let expected = initial + cents.iter().sum::<i64>();
            prop_assert_eq!(account.balance(), Money::from_cents(expected));
            prop_assert_eq!(account.movement_count(), cents.len() + 1);
        }

        /// Property: recording a movement appends one entry and leaves prior ones untouched.
        #[test]
        fn record_movement_is_append_only(
            cents in prop::collection::vec(-100_000i64..100_000i64, 1..20),
            extra in -100_000i64..100_000i64,
            savings in any::<bool>()
        ) {
            let kind = if savings { AccountKind::Savings } else { AccountKind::Checking };
            let mut account = Account::open("Prop", kind, Money::zero());
            for c in &cents {
                account.record_movement(Money::from_cents(*c), test_time(), "op");
            }

            let before = account.history().to_vec();
            account.record_movement(Money::from_cents(extra), test_time(), "extra");

            prop_assert_eq!(account.movement_count(), before.len() + 1);
            prop_assert_eq!(&account.history()[..before.len()], &before[..]);
            prop_assert_eq!(account.history()[before.len()].amount(), Money::from_cents(extra));
        }
    }
}
