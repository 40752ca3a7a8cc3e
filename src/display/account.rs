//! Account display formatting

use crate::config::Settings;
use crate::models::Money;

/// Format the current balance line
pub fn format_balance(balance: Money, settings: &Settings) -> String {
    format!(
        "Current balance: {}",
        balance.format_with_symbol(&settings.currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use chrono::Utc;

    #[test]
    fn test_format_balance() {
        let mut account = Account::checking("Alice", Money::from_units(100));
        account.withdraw(Money::from_units(150), Utc::now(), "Rent");

        assert_eq!(
            format_balance(account.balance(), &Settings::default()),
            "Current balance: -$50.00"
        );
    }

    #[test]
    fn test_format_balance_uses_symbol() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            format_balance(Money::from_cents(425), &settings),
            "Current balance: €4.25"
        );
    }
}
