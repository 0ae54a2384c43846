//! Usage streak model
//!
//! `StreakState` is the persisted record; [`StreakState::advance`] is the
//! day-difference state machine that moves it forward.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted streak record
///
/// Stored as `{"count": 3, "last_date": "2024-03-01"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "last_date", default, skip_serializing_if = "Option::is_none")]
    pub last_used_date: Option<NaiveDate>,
}

/// What a call to [`StreakState::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// No previous use was recorded
    Started,
    /// Already used today
    Unchanged,
    /// Used yesterday, streak grew by one
    Extended,
    /// Gap of two or more days, or the clock moved backwards
    Reset,
}

impl StreakState {
    pub fn new(count: u32, last_used_date: NaiveDate) -> Self {
        Self {
            count,
            last_used_date: Some(last_used_date),
        }
    }

    /// Record a use of the application on `today`
    pub fn advance(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_used_date {
            None => {
                self.count = 1;
                StreakChange::Started
            }
            Some(last) if last == today => StreakChange::Unchanged,
            Some(last) if today.signed_duration_since(last).num_days() == 1 => {
                self.count = self.count.saturating_add(1);
                StreakChange::Extended
            }
            Some(_) => {
                self.count = 1;
                StreakChange::Reset
            }
        };

        self.last_used_date = Some(today);
        change
    }
}

impl fmt::Display for StreakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.count == 1 { "day" } else { "days" };
        write!(f, "Streak: {} {}", self.count, unit)
    }
}
