//! Expense model
//!
//! An `Expense` is an immutable, already-validated record. User input arrives
//! as a `NewExpense` holding the raw field text and is turned into an
//! `Expense` by [`NewExpense::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used at the presentation boundary
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// ISO format, accepted as input and used on disk
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single expense may carry (one trillion)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000);

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    pub item: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

impl Expense {
    /// Check the record invariants
    ///
    /// Category and item are non-blank and the amount lies between zero and
    /// [`MAX_AMOUNT`]. Records read back from disk go through the same check.
    pub fn check(&self) -> ExpenseResult<()> {
        required(&self.category, "Category")?;
        required(&self.item, "Item")?;
        check_amount(self.amount, &self.amount.to_string())
    }

    /// Date rendered in the user-facing `DD-MM-YYYY` form
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} on {}",
            self.category,
            self.item,
            self.amount,
            self.display_date()
        )
    }
}

/// Raw field values for an expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub category: String,
    pub item: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    pub recurring: bool,
}

impl NewExpense {
    pub fn new(
        category: impl Into<String>,
        item: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
            amount: amount.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Check every field and build the immutable record
    ///
    /// Category, item, amount and date are required. The amount must be a
    /// non-negative decimal and the date a real calendar day.
    pub fn validate(&self) -> ExpenseResult<Expense> {
        let category = required(&self.category, "Category")?;
        let item = required(&self.item, "Item")?;
        let amount_text = required(&self.amount, "Amount")?;
        let date_text = required(&self.date, "Date")?;

        let amount = Money::parse(amount_text)
            .map_err(|e| ExpenseError::Validation(format!("Amount is not a number: {}", e)))?;
        check_amount(amount, amount_text)?;

        let date = parse_date(date_text)?;

        let description = self.description.trim();
        Ok(Expense {
            category: category.to_string(),
            item: item.to_string(),
            amount,
            date,
            description: (!description.is_empty()).then(|| description.to_string()),
            recurring: self.recurring,
        })
    }
}

fn check_amount(amount: Money, shown: &str) -> ExpenseResult<()> {
    if amount.is_negative() {
        return Err(ExpenseError::Validation(format!(
            "Amount cannot be negative: {}",
            shown
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(ExpenseError::Validation(format!(
            "Amount cannot exceed {}: {}",
            MAX_AMOUNT, shown
        )));
    }
    Ok(())
}

fn required<'a>(value: &'a str, field: &str) -> ExpenseResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ExpenseError::missing_field(field))
    } else {
        Ok(value)
    }
}

/// Parse a date typed as `DD-MM-YYYY`, falling back to `YYYY-MM-DD`
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DISPLAY_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, ISO_DATE_FORMAT))
        .map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid date '{}'. Use DD-MM-YYYY (e.g. 01-03-2024)",
                s
            ))
        })
}
