//! Shared formatting helpers for terminal output

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{Money, DISPLAY_DATE_FORMAT};

/// Format an amount with the configured currency symbol
pub fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a date with the configured format, falling back to `DD-MM-YYYY`
/// when the configured pattern is not a valid strftime string
pub fn date(value: NaiveDate, settings: &Settings) -> String {
    let pattern = settings.date_format.as_str();
    let valid = !pattern.is_empty()
        && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));

    if valid {
        value.format(pattern).to_string()
    } else {
        value.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
