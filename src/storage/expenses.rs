//! Expense repository for JSON storage
//!
//! Manages loading and saving the recorded expenses to expenses.json, in
//! insertion order.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Default, Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

#[derive(Serialize)]
struct ExpenseDataRef<'a> {
    expenses: &'a [Expense],
}

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all stored expenses, oldest first
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data: ExpenseData = read_json(&self.path)?;
        tracing::debug!(count = data.expenses.len(), "loaded expenses");
        Ok(data.expenses)
    }

    /// Replace the stored expenses
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &ExpenseDataRef { expenses })
    }
}
