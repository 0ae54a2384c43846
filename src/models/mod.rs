//! Core data models for the expense tracker
//!
//! Expenses, money amounts and the persisted usage streak.

pub mod expense;
pub mod money;
pub mod streak;

pub use expense::{parse_date, Expense, NewExpense, DISPLAY_DATE_FORMAT, MAX_AMOUNT};
pub use money::{Money, MoneyParseError};
pub use streak::{StreakChange, StreakState};
