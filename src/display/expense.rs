//! Expense display formatting
//!
//! Renders the ledger as a list grouped by category, as a per-day breakdown,
//! and the recurring expense log.

use crate::config::Settings;
use crate::models::Expense;
use crate::services::{ExpenseLedger, RecurringExpenseTracker};

use super::report::{date, money};

/// Feedback line shown after an expense is recorded
pub fn format_added(expense: &Expense, settings: &Settings) -> String {
    format!(
        "Expense Added: {} - {} - {} on {}",
        expense.category,
        expense.item,
        money(expense.amount, settings),
        date(expense.date, settings)
    )
}

/// Expenses grouped by category, categories in first-seen order
pub fn format_expense_list(ledger: &ExpenseLedger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return "No expenses to show.\n".to_string();
    }

    let mut output = String::new();
    for group in ledger.totals_by_category() {
        output.push_str(&format!(
            "Category: {} - Total Spent: {}\n",
            group.category,
            money(group.total, settings)
        ));

        for expense in &group.items {
            output.push_str(&format!("  {}\n", format_item_line(expense, settings)));
        }
        output.push('\n');
    }

    output
}

fn format_item_line(expense: &Expense, settings: &Settings) -> String {
    let mut line = format!(
        "{} - {} on {}",
        expense.item,
        money(expense.amount, settings),
        date(expense.date, settings)
    );
    if let Some(description) = &expense.description {
        line.push_str(&format!(" in {}", description));
    }
    if expense.recurring {
        line.push_str(" (recurring)");
    }
    line
}

/// Per-day breakdown: each date, its categories, and the items under them
pub fn format_daily_breakdown(ledger: &ExpenseLedger, settings: &Settings) -> String {
    let by_date = ledger.totals_by_date();
    if by_date.is_empty() {
        return "No daily expenses to show.\n".to_string();
    }

    let mut output = String::new();
    for (day, totals) in by_date {
        output.push_str(&format!(
            "Date: {} - Total: {}\n",
            date(*day, settings),
            money(totals.total(), settings)
        ));

        for (category, total) in totals.iter() {
            output.push_str(&format!("{}: {}\n", category, money(total, settings)));
            for expense in ledger.expenses_on(*day, category) {
                output.push_str(&format!(
                    "    - {}: {}\n",
                    expense.item,
                    money(expense.amount, settings)
                ));
            }
        }
        output.push('\n');
    }

    output
}

/// The recurring expense log in insertion order
pub fn format_recurring_list(recurring: &RecurringExpenseTracker, settings: &Settings) -> String {
    if recurring.is_empty() {
        return "No recurring expenses.\n".to_string();
    }

    let mut output = String::from("Recurring Expenses:\n");
    for expense in recurring.list() {
        output.push_str(&format!(
            "  {} - {} - {} since {}\n",
            expense.category,
            expense.item,
            money(expense.amount, settings),
            date(expense.date, settings)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn sample_ledger() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        for input in [
            NewExpense::new("Food", "Lunch", "12.00", "02-03-2024"),
            NewExpense::new("Food", "Coffee", "3.50", "01-03-2024").with_description("cafe"),
            NewExpense::new("Transport", "Bus", "2.40", "01-03-2024"),
        ] {
            ledger.add(&input).unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_views() {
        let ledger = ExpenseLedger::new();
        let settings = Settings::default();
        assert_eq!(format_expense_list(&ledger, &settings), "No expenses to show.\n");
        assert_eq!(
            format_daily_breakdown(&ledger, &settings),
            "No daily expenses to show.\n"
        );
        assert_eq!(
            format_recurring_list(&RecurringExpenseTracker::new(), &settings),
            "No recurring expenses.\n"
        );
    }

    #[test]
    fn test_expense_list_grouping() {
        let output = format_expense_list(&sample_ledger(), &Settings::default());

        assert!(output.starts_with("Category: Food - Total Spent: $15.50\n"));
        assert!(output.contains("  Lunch - $12.00 on 02-03-2024\n"));
        assert!(output.contains("  Coffee - $3.50 on 01-03-2024 in cafe\n"));
        assert!(output.contains("Category: Transport - Total Spent: $2.40\n"));
        assert!(output.find("Food").unwrap() < output.find("Transport").unwrap());
    }

    #[test]
    fn test_daily_breakdown_is_chronological() {
        let output = format_daily_breakdown(&sample_ledger(), &Settings::default());

        let first = output.find("Date: 01-03-2024 - Total: $5.90").unwrap();
        let second = output.find("Date: 02-03-2024 - Total: $12.00").unwrap();
        assert!(first < second);
        assert!(output.contains("Food: $3.50\n    - Coffee: $3.50\n"));
        assert!(output.contains("Transport: $2.40\n    - Bus: $2.40\n"));
    }

    #[test]
    fn test_added_feedback() {
        let expense = NewExpense::new("Food", "Coffee", "3.5", "01-03-2024")
            .validate()
            .unwrap();
        assert_eq!(
            format_added(&expense, &Settings::default()),
            "Expense Added: Food - Coffee - $3.50 on 01-03-2024"
        );
    }

    #[test]
    fn test_recurring_list() {
        let mut recurring = RecurringExpenseTracker::new();
        recurring
            .add(
                NewExpense::new("Bills", "Phone", "25", "05-03-2024")
                    .recurring(true)
                    .validate()
                    .unwrap(),
            )
            .unwrap();

        let output = format_recurring_list(&recurring, &Settings::default());
        assert!(output.contains("  Bills - Phone - $25.00 since 05-03-2024\n"));
    }
}
