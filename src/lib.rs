//! expense-tracker - personal expense tracking from the terminal
//!
//! Records categorized expenses, summarises them by category, by day and by
//! month against a monthly budget, keeps a log of recurring expenses and
//! counts consecutive days of use.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: custom error types
//! - `models`: expenses, money amounts, the streak record
//! - `storage`: JSON file storage and the string-keyed document store
//! - `services`: the expense ledger, recurring log and streak tracker
//! - `context`: the per-launch application context
//! - `display`: text views
//! - `cli`: command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::models::{Money, NewExpense};
//! use expense_tracker::services::ExpenseLedger;
//!
//! let mut ledger = ExpenseLedger::new();
//! ledger.add(&NewExpense::new("Food", "Coffee", "3.50", "01-03-2024")).unwrap();
//! ledger.add(&NewExpense::new("Food", "Lunch", "12.00", "01-03-2024")).unwrap();
//!
//! assert_eq!(ledger.category("Food").unwrap().total, Money::from_cents(1550));
//! assert_eq!(ledger.monthly_total(Money::from_cents(10_000)).remaining, Money::from_cents(8450));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use context::AppContext;
pub use error::{ExpenseError, ExpenseResult};
