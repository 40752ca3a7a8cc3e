//! Movement display formatting
//!
//! Formats an account's history for the terminal, one movement per line.

use chrono::Local;

use crate::config::Settings;
use crate::models::Movement;

/// Format a single movement as `DATE - DESCRIPTION: AMOUNT`
///
/// Timestamps are shown in local time using the configured date format.
/// Savings movements carry a trailing `[savings]` marker.
pub fn format_movement_row(movement: &Movement, settings: &Settings) -> String {
    let marker = if movement.is_savings() { " [savings]" } else { "" };

    format!(
        "{} - {}: {}{}",
        movement
            .timestamp()
            .with_timezone(&Local)
            .format(&settings.date_format),
        movement.description(),
        movement.amount().format_with_symbol(&settings.currency_symbol),
        marker
    )
}

/// Format the full history, oldest first
pub fn format_history(movements: &[Movement], settings: &Settings) -> String {
    if movements.is_empty() {
        return "No movements recorded.\n".to_string();
    }

    let mut output = String::from("Transaction history:\n");
    for movement in movements {
        output.push_str(&format_movement_row(movement, settings));
        output.push('\n');
    }
    output
}
