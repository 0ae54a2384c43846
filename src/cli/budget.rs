//! Budget CLI commands

use clap::Subcommand;

use crate::context::AppContext;
use crate::display::format_monthly_summary;
use crate::error::ExpenseResult;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Replace the monthly budget
    Set {
        /// Budget amount (e.g. "500" or "500.00")
        amount: String,
    },
    /// Show the current monthly budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &mut AppContext, cmd: BudgetCommands) -> ExpenseResult<()> {
    let symbol = ctx.settings().currency_symbol.clone();

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = ctx.set_budget(&amount)?;
            println!("Monthly budget set to {}", budget.format_with_symbol(&symbol));
        }
        BudgetCommands::Show => {
            println!("Monthly Budget: {}", ctx.budget().format_with_symbol(&symbol));
        }
    }

    Ok(())
}

/// Print budget, total spent and remaining budget
pub fn handle_summary(ctx: &AppContext) {
    let summary = ctx.budget_summary();
    print!(
        "{}",
        format_monthly_summary(&summary, ctx.ledger(), ctx.settings())
    );
}
