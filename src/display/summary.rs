//! Budget summary and streak formatting

use crate::config::Settings;
use crate::models::{StreakChange, StreakState};
use crate::services::{BudgetSummary, ExpenseLedger};

use super::report::{money, right_align, separator};

/// Budget, total spent and remaining budget, followed by totals per month
pub fn format_monthly_summary(
    summary: &BudgetSummary,
    ledger: &ExpenseLedger,
    settings: &Settings,
) -> String {
    if ledger.is_empty() {
        return "No expenses to show.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Monthly Budget:   {}\n",
        money(summary.budget, settings)
    ));
    output.push_str(&format!(
        "Total Spent:      {}\n",
        money(summary.spent, settings)
    ));
    output.push_str(&format!(
        "Remaining Budget: {}",
        money(summary.remaining, settings)
    ));
    if summary.is_over_budget() {
        output.push_str(" (over budget)");
    }
    output.push('\n');

    let months = ledger.totals_by_month();
    if months.len() > 1 {
        output.push('\n');
        output.push_str("By Month:\n");
        output.push_str(&format!("{}\n", separator(22)));
        for (month, total) in months {
            output.push_str(&format!(
                "  {}  {}\n",
                month,
                right_align(&money(*total, settings), 12)
            ));
        }
    }

    output
}

/// Streak label plus a note on what this launch did to it
pub fn format_streak(state: &StreakState, change: StreakChange) -> String {
    let note = match change {
        StreakChange::Started => "Welcome! Your streak starts today.",
        StreakChange::Unchanged => "Already counted today.",
        StreakChange::Extended => "Another day in a row!",
        StreakChange::Reset => "Streak reset. Welcome back!",
    };
    format!("{}\n{}\n", state, note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense};
    use chrono::NaiveDate;

    fn ledger_with(inputs: &[(&str, &str)]) -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        for (amount, day) in inputs {
            ledger
                .add(&NewExpense::new("Food", "Meal", *amount, *day))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_summary() {
        let ledger = ExpenseLedger::new();
        let summary = ledger.monthly_total(Money::from_cents(10_000));
        assert_eq!(
            format_monthly_summary(&summary, &ledger, &Settings::default()),
            "No expenses to show.\n"
        );
    }

    #[test]
    fn test_summary_lines() {
        let ledger = ledger_with(&[("3.50", "01-03-2024"), ("12.00", "01-03-2024")]);
        let summary = ledger.monthly_total(Money::from_cents(10_000));
        let output = format_monthly_summary(&summary, &ledger, &Settings::default());

        assert_eq!(
            output,
            "Monthly Budget:   $100.00\nTotal Spent:      $15.50\nRemaining Budget: $84.50\n"
        );
    }

    #[test]
    fn test_over_budget_and_month_table() {
        let ledger = ledger_with(&[("80", "28-02-2024"), ("40", "01-03-2024")]);
        let summary = ledger.monthly_total(Money::from_cents(10_000));
        let output = format_monthly_summary(&summary, &ledger, &Settings::default());

        assert!(output.contains("Remaining Budget: -$20.00 (over budget)\n"));
        assert!(output.contains("By Month:\n"));
        assert!(output.contains("  02-2024        $80.00\n"));
        assert!(output.contains("  03-2024        $40.00\n"));
    }

    #[test]
    fn test_streak_label() {
        let state = StreakState::new(3, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
        assert_eq!(
            format_streak(&state, StreakChange::Extended),
            "Streak: 3 days\nAnother day in a row!\n"
        );
    }
}
