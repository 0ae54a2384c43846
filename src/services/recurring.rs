//! Recurring expense log
//!
//! An append-only list of the expenses the user flagged as recurring. It
//! records them; it does not schedule future occurrences.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Debug, Clone, Default)]
pub struct RecurringExpenseTracker {
    entries: Vec<Expense>,
}

impl RecurringExpenseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recurring expense
    ///
    /// Expenses without the recurring flag are rejected.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<()> {
        if !expense.recurring {
            return Err(ExpenseError::Validation(format!(
                "'{}' is not marked as recurring",
                expense.item
            )));
        }
        self.entries.push(expense);
        Ok(())
    }

    /// Recurring expenses in the order they were added
    pub fn list(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn expense(item: &str, recurring: bool) -> Expense {
        NewExpense::new("Bills", item, "10", "01-03-2024")
            .recurring(recurring)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_keeps_insertion_order_and_duplicates() {
        let mut tracker = RecurringExpenseTracker::new();
        tracker.add(expense("Phone", true)).unwrap();
        tracker.add(expense("Gym", true)).unwrap();
        tracker.add(expense("Phone", true)).unwrap();

        let items: Vec<_> = tracker.list().iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, ["Phone", "Gym", "Phone"]);
    }

    #[test]
    fn test_rejects_one_off_expense() {
        let mut tracker = RecurringExpenseTracker::new();
        let err = tracker.add(expense("Concert", false)).unwrap_err();
        assert!(err.is_validation());
        assert!(tracker.is_empty());
    }
}
