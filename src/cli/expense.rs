//! Expense CLI commands
//!
//! Collects field values from the command line, hands them to the
//! application context and prints the resulting views.

use chrono::NaiveDate;
use clap::Args;

use crate::context::AppContext;
use crate::display::{
    format_added, format_daily_breakdown, format_expense_list, format_recurring_list,
};
use crate::error::ExpenseResult;
use crate::models::{NewExpense, DISPLAY_DATE_FORMAT};

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category (e.g. "Food")
    pub category: String,
    /// What was bought
    pub item: String,
    /// Amount (e.g. "3.50")
    pub amount: String,
    /// Date as DD-MM-YYYY (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-form description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
    /// Also log this expense as recurring
    #[arg(short, long)]
    pub recurring: bool,
    /// Replace the monthly budget at the same time; ignored if not a number
    #[arg(short, long)]
    pub budget: Option<String>,
}

impl AddArgs {
    fn to_input(&self, today: NaiveDate) -> NewExpense {
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| today.format(DISPLAY_DATE_FORMAT).to_string());

        NewExpense::new(&self.category, &self.item, &self.amount, date)
            .with_description(self.description.clone().unwrap_or_default())
            .recurring(self.recurring)
    }
}

/// Record an expense and print the feedback line
pub fn handle_add(ctx: &mut AppContext, args: AddArgs, today: NaiveDate) -> ExpenseResult<()> {
    if let Some(raw) = args.budget.as_deref() {
        if let Some(budget) = ctx.submit_budget(raw) {
            println!(
                "Monthly budget set to {}",
                budget.format_with_symbol(&ctx.settings().currency_symbol)
            );
        }
    }

    let expense = ctx.add_expense(&args.to_input(today))?;
    println!("{}", format_added(&expense, ctx.settings()));
    if expense.recurring {
        println!("Logged as recurring.");
    }
    Ok(())
}

/// Print all expenses grouped by category
pub fn handle_list(ctx: &AppContext) {
    print!("{}", format_expense_list(ctx.ledger(), ctx.settings()));
}

/// Print the per-day breakdown
pub fn handle_daily(ctx: &AppContext) {
    print!("{}", format_daily_breakdown(ctx.ledger(), ctx.settings()));
}

/// Print the recurring expense log
pub fn handle_recurring(ctx: &AppContext) {
    print!("{}", format_recurring_list(ctx.recurring(), ctx.settings()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(date: Option<&str>) -> AddArgs {
        AddArgs {
            category: "Food".into(),
            item: "Coffee".into(),
            amount: "3.50".into(),
            date: date.map(String::from),
            description: None,
            recurring: true,
            budget: None,
        }
    }

    #[test]
    fn test_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let input = args(None).to_input(today);
        assert_eq!(input.date, "09-03-2024");
        assert!(input.recurring);
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_explicit_date_is_kept_verbatim() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let input = args(Some("01-01-2024")).to_input(today);
        assert_eq!(input.date, "01-01-2024");
    }
}
