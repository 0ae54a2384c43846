//! CLI command handlers
//!
//! Bridges the clap argument parsing with the application context.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, handle_summary, BudgetCommands};
pub use expense::{handle_add, handle_daily, handle_list, handle_recurring, AddArgs};

use crate::context::AppContext;
use crate::display::format_streak;

/// Print the streak label for this launch
pub fn handle_streak(ctx: &AppContext) {
    print!("{}", format_streak(&ctx.streak(), ctx.launch_change()));
}
