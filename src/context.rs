//! Application context
//!
//! One `AppContext` is created per launch. It owns the ledger, the recurring
//! log, the budget and the streak tracker, and exposes the command functions
//! the front end calls. Presentation code borrows it; nothing here is global.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, NewExpense, StreakChange, StreakState};
use crate::services::{BudgetSummary, ExpenseLedger, RecurringExpenseTracker, StreakTracker};
use crate::storage::{JsonFileStore, Storage};

pub struct AppContext {
    storage: Storage,
    settings: Settings,
    ledger: ExpenseLedger,
    recurring: RecurringExpenseTracker,
    streak: StreakTracker<JsonFileStore>,
    launch: StreakChange,
}

impl AppContext {
    /// Load everything from storage and record today's launch in the streak
    ///
    /// Stored expenses that fail the record checks are skipped with a warning.
    pub fn open(storage: Storage, today: NaiveDate) -> ExpenseResult<Self> {
        let settings = Settings::load_or_create(storage.paths())?;

        let mut ledger = ExpenseLedger::new();
        let mut recurring = RecurringExpenseTracker::new();
        for (position, expense) in storage.expenses.load()?.into_iter().enumerate() {
            if let Err(e) = ledger.record(expense.clone()) {
                tracing::warn!(position, error = %e, "skipping stored expense");
                continue;
            }
            if expense.recurring {
                recurring.add(expense)?;
            }
        }

        let mut streak = StreakTracker::load(storage.store.clone());
        let launch = streak.touch(today)?;

        tracing::debug!(
            expenses = ledger.len(),
            recurring = recurring.len(),
            streak = streak.count(),
            "context opened"
        );

        Ok(Self {
            storage,
            settings,
            ledger,
            recurring,
            streak,
            launch,
        })
    }

    /// Validate and record an expense, then persist the ledger
    ///
    /// Recurring expenses also go to the recurring log.
    pub fn add_expense(&mut self, input: &NewExpense) -> ExpenseResult<Expense> {
        let expense = self.ledger.add(input)?;
        if expense.recurring {
            self.recurring.add(expense.clone())?;
        }
        self.storage.expenses.save(self.ledger.expenses())?;
        Ok(expense)
    }

    /// Replace the monthly budget
    pub fn set_budget(&mut self, raw: &str) -> ExpenseResult<Money> {
        let budget = Money::parse(raw)
            .map_err(|e| ExpenseError::Validation(format!("Budget is not a number: {}", e)))?;
        if budget.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Budget cannot be negative: {}",
                raw.trim()
            )));
        }

        self.settings.monthly_budget = budget;
        self.settings.save(self.storage.paths())?;
        tracing::info!(cents = budget.cents(), "monthly budget set");
        Ok(budget)
    }

    /// Apply a budget typed next to an expense
    ///
    /// Unlike [`AppContext::set_budget`], input that does not parse is
    /// dropped with a warning so it never blocks the expense itself.
    pub fn submit_budget(&mut self, raw: &str) -> Option<Money> {
        match self.set_budget(raw) {
            Ok(budget) => Some(budget),
            Err(e) => {
                tracing::warn!(error = %e, input = raw, "ignoring budget input");
                None
            }
        }
    }

    pub fn budget(&self) -> Money {
        self.settings.monthly_budget
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        self.ledger.monthly_total(self.budget())
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn recurring(&self) -> &RecurringExpenseTracker {
        &self.recurring
    }

    pub fn streak(&self) -> StreakState {
        self.streak.state()
    }

    /// How this launch changed the streak
    pub fn launch_change(&self) -> StreakChange {
        self.launch
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
