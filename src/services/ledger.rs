//! Expense ledger
//!
//! Holds the recorded expenses in insertion order together with running
//! totals per category, per (date, category) and per month. Totals are
//! updated in the same step that appends an expense, so they always equal the
//! sum over the expenses they summarise.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, NewExpense};

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.month, self.year)
    }
}

/// One category with its expenses and their total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a Expense>,
    pub total: Money,
}

/// Per-category totals for one day, in first-seen category order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Money)>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    /// Total for `category`, if anything was spent on it
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category of the day
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }
}

/// Money spent against a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub budget: Money,
    pub spent: Money,
    /// Negative when over budget
    pub remaining: Money,
}

impl BudgetSummary {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[derive(Debug, Clone)]
struct CategoryEntry {
    name: String,
    indices: Vec<usize>,
    total: Money,
}

/// The ordered collection of all recorded expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    categories: Vec<CategoryEntry>,
    category_index: HashMap<String, usize>,
    by_date: BTreeMap<NaiveDate, CategoryTotals>,
    by_month: BTreeMap<YearMonth, Money>,
    total: Money,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw field values and record the expense
    ///
    /// On a validation failure the ledger is left untouched.
    pub fn add(&mut self, input: &NewExpense) -> ExpenseResult<Expense> {
        let expense = input.validate()?;
        self.record(expense.clone())?;
        Ok(expense)
    }

    /// Append an expense and update every running total
    ///
    /// The record is checked again and the grand total must still fit; on
    /// failure nothing is changed. Every other total is bounded by the grand
    /// total since amounts are non-negative.
    pub(crate) fn record(&mut self, expense: Expense) -> ExpenseResult<()> {
        expense.check()?;
        let total = self.total.checked_add(expense.amount).ok_or_else(|| {
            ExpenseError::Validation(format!(
                "Total spending would overflow adding {}",
                expense.amount
            ))
        })?;
        self.total = total;

        let position = self.expenses.len();

        let slot = match self.category_index.get(&expense.category) {
            Some(&slot) => slot,
            None => {
                self.categories.push(CategoryEntry {
                    name: expense.category.clone(),
                    indices: Vec::new(),
                    total: Money::zero(),
                });
                let slot = self.categories.len() - 1;
                self.category_index.insert(expense.category.clone(), slot);
                slot
            }
        };
        let entry = &mut self.categories[slot];
        entry.indices.push(position);
        entry.total += expense.amount;

        self.by_date
            .entry(expense.date)
            .or_default()
            .add(&expense.category, expense.amount);

        *self.by_month.entry(YearMonth::of(expense.date)).or_default() += expense.amount;

        tracing::debug!(
            category = %expense.category,
            item = %expense.item,
            cents = expense.amount.cents(),
            date = %expense.date,
            "recorded expense"
        );
        self.expenses.push(expense);
        Ok(())
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses grouped by category, in the order categories were first seen
    pub fn totals_by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.categories
            .iter()
            .map(|entry| self.group(entry))
            .collect()
    }

    /// A single category group, if the category has been used
    pub fn category(&self, name: &str) -> Option<CategoryGroup<'_>> {
        self.category_index
            .get(name)
            .map(|&slot| self.group(&self.categories[slot]))
    }

    fn group<'a>(&'a self, entry: &'a CategoryEntry) -> CategoryGroup<'a> {
        CategoryGroup {
            category: &entry.name,
            items: entry.indices.iter().map(|&i| &self.expenses[i]).collect(),
            total: entry.total,
        }
    }

    /// Per-day, per-category totals in ascending date order
    pub fn totals_by_date(&self) -> &BTreeMap<NaiveDate, CategoryTotals> {
        &self.by_date
    }

    /// Monthly totals in ascending order
    pub fn totals_by_month(&self) -> &BTreeMap<YearMonth, Money> {
        &self.by_month
    }

    /// Expenses recorded for one category on one day, in insertion order
    pub fn expenses_on<'a>(
        &'a self,
        date: NaiveDate,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |e| e.date == date && e.category == category)
    }

    /// Sum of every recorded amount
    pub fn total_spent(&self) -> Money {
        self.total
    }

    /// Spending measured against `budget`
    ///
    /// Every recorded expense counts toward the total; `remaining` goes
    /// negative once spending exceeds the budget.
    pub fn monthly_total(&self, budget: Money) -> BudgetSummary {
        let spent = self.total_spent();
        BudgetSummary {
            budget,
            spent,
            remaining: Money::from_cents(budget.cents().saturating_sub(spent.cents())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(ledger: &mut ExpenseLedger, category: &str, item: &str, amount: &str, day: &str) {
        ledger
            .add(&NewExpense::new(category, item, amount, day))
            .unwrap();
    }

    #[test]
    fn test_coffee_and_lunch_scenario() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Food", "Coffee", "3.50", "01-03-2024");
        add(&mut ledger, "Food", "Lunch", "12.00", "01-03-2024");

        let food = ledger.category("Food").unwrap();
        assert_eq!(food.total, Money::from_cents(1550));
        assert_eq!(food.items.len(), 2);

        let summary = ledger.monthly_total(Money::from_cents(10_000));
        assert_eq!(summary.spent, Money::from_cents(1550));
        assert_eq!(summary.remaining, Money::from_cents(8450));
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_failed_add_leaves_ledger_unchanged() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Food", "Coffee", "3.50", "01-03-2024");

        let err = ledger
            .add(&NewExpense::new("Food", "", "3.50", "01-03-2024"))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(ledger
            .add(&NewExpense::new("Food", "Tea", "abc", "01-03-2024"))
            .is_err());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_spent(), Money::from_cents(350));
        assert_eq!(ledger.totals_by_category().len(), 1);
        assert_eq!(ledger.totals_by_date().len(), 1);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut ledger = ExpenseLedger::new();
        let house = NewExpense::new("Home", "House", "1000000000000", "01-03-2024");
        for _ in 0..92_233 {
            ledger.add(&house).unwrap();
        }
        let before = ledger.total_spent();

        let err = ledger.add(&house).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.len(), 92_233);
        assert_eq!(ledger.total_spent(), before);
        assert_eq!(ledger.category("Home").unwrap().total, before);
        assert_eq!(ledger.category("Home").unwrap().items.len(), 92_233);
    }

    #[test]
    fn test_two_huge_amounts_do_not_panic() {
        let mut ledger = ExpenseLedger::new();
        let house = NewExpense::new("Home", "House", "90000000000000000", "01-03-2024");

        assert!(ledger.add(&house).unwrap_err().is_validation());
        assert!(ledger.add(&house).unwrap_err().is_validation());
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_spent(), Money::zero());
    }

    #[test]
    fn test_record_rejects_invalid_expense() {
        let mut ledger = ExpenseLedger::new();
        let mut expense = NewExpense::new("Food", "Coffee", "3.50", "01-03-2024")
            .validate()
            .unwrap();
        expense.amount = Money::from_cents(-500);

        assert!(ledger.record(expense).is_err());
        assert!(ledger.is_empty());
        assert!(ledger.totals_by_date().is_empty());
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Transport", "Bus", "2", "01-03-2024");
        add(&mut ledger, "Food", "Bagel", "4", "01-03-2024");
        add(&mut ledger, "Books", "Novel", "15", "02-03-2024");
        add(&mut ledger, "Food", "Soup", "6", "03-03-2024");

        let names: Vec<_> = ledger
            .totals_by_category()
            .iter()
            .map(|g| g.category)
            .collect();
        assert_eq!(names, ["Transport", "Food", "Books"]);

        let food = ledger.category("Food").unwrap();
        let items: Vec<_> = food.items.iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, ["Bagel", "Soup"]);
    }

    #[test]
    fn test_dates_iterate_ascending() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Food", "Dinner", "20", "15-03-2024");
        add(&mut ledger, "Food", "Breakfast", "5", "02-01-2024");
        add(&mut ledger, "Fuel", "Gas", "40", "28-02-2024");

        let dates: Vec<_> = ledger.totals_by_date().keys().copied().collect();
        assert_eq!(
            dates,
            [date(2024, 1, 2), date(2024, 2, 28), date(2024, 3, 15)]
        );

        let months: Vec<_> = ledger
            .totals_by_month()
            .keys()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, ["01-2024", "02-2024", "03-2024"]);
    }

    #[test]
    fn test_totals_match_source_list() {
        let inputs = [
            ("Food", "01-03-2024", "3.50"),
            ("Rent", "01-03-2024", "800"),
            ("Food", "02-03-2024", "12.25"),
            ("Food", "01-03-2024", "0.75"),
            ("Fun", "31-03-2024", "20"),
            ("Rent", "01-04-2024", "800"),
            ("Fun", "02-03-2024", "9.99"),
            ("Food", "01-04-2024", "1.01"),
        ];

        let mut ledger = ExpenseLedger::new();
        for (i, (category, day, amount)) in inputs.iter().enumerate() {
            add(&mut ledger, category, &format!("item {}", i), amount, day);

            for group in ledger.totals_by_category() {
                let expected: Money = ledger
                    .expenses()
                    .iter()
                    .filter(|e| e.category == group.category)
                    .map(|e| e.amount)
                    .sum();
                assert_eq!(group.total, expected);
            }

            for (day, totals) in ledger.totals_by_date() {
                for (category, total) in totals.iter() {
                    let expected: Money = ledger
                        .expenses_on(*day, category)
                        .map(|e| e.amount)
                        .sum();
                    assert_eq!(total, expected);
                }
            }

            let by_month: Money = ledger.totals_by_month().values().sum();
            assert_eq!(by_month, ledger.total_spent());
        }

        let march_first = &ledger.totals_by_date()[&date(2024, 3, 1)];
        assert_eq!(march_first.get("Food"), Some(Money::from_cents(425)));
        assert_eq!(march_first.get("Rent"), Some(Money::from_cents(80_000)));
        assert_eq!(march_first.get("Fun"), None);
        assert_eq!(march_first.total(), Money::from_cents(80_425));

        let april = ledger.totals_by_month()[&YearMonth { year: 2024, month: 4 }];
        assert_eq!(april, Money::from_cents(80_101));
    }

    #[test]
    fn test_over_budget_is_negative_remaining() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, "Travel", "Flight", "250", "10-05-2024");

        let summary = ledger.monthly_total(Money::from_cents(20_000));
        assert_eq!(summary.remaining, Money::from_cents(-5_000));
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = ExpenseLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.totals_by_category().is_empty());
        assert!(ledger.category("Food").is_none());
        assert_eq!(ledger.monthly_total(Money::zero()).spent, Money::zero());
    }
}
