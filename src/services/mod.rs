//! Service layer for the expense tracker
//!
//! Business logic over the models: the expense ledger with its aggregates,
//! the recurring expense log and the usage streak.

pub mod ledger;
pub mod recurring;
pub mod streak;

pub use ledger::{BudgetSummary, CategoryGroup, CategoryTotals, ExpenseLedger, YearMonth};
pub use recurring::RecurringExpenseTracker;
pub use streak::{StreakTracker, STREAK_KEY};
