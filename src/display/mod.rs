//! Display formatting for terminal output
//!
//! Each view is a plain `String` rendered from borrowed ledger state.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_added, format_daily_breakdown, format_expense_list, format_recurring_list};
pub use summary::{format_monthly_summary, format_streak};
