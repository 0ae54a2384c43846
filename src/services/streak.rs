//! Usage streak tracking
//!
//! Loads the persisted [`StreakState`] from a key-value store, advances it
//! once per launch and writes it back.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{StreakChange, StreakState};
use crate::storage::KeyValueStore;

/// Key under which the streak record is stored
pub const STREAK_KEY: &str = "streak";

/// Tracks consecutive days of use on top of a key-value store
#[derive(Debug)]
pub struct StreakTracker<S: KeyValueStore> {
    store: S,
    state: StreakState,
}

impl<S: KeyValueStore> StreakTracker<S> {
    /// Load the stored streak
    ///
    /// A missing entry starts from the default state. An unreadable or
    /// malformed one is logged and also replaced by the default state.
    pub fn load(store: S) -> Self {
        let state = match store.get_as::<StreakState>(STREAK_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => StreakState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "streak record unreadable, starting over");
                StreakState::default()
            }
        };

        Self { store, state }
    }

    /// Record a launch on `today` and persist the result
    ///
    /// Call once per process launch.
    pub fn touch(&mut self, today: NaiveDate) -> ExpenseResult<StreakChange> {
        let change = self.state.advance(today);
        self.store.put_as(STREAK_KEY, &self.state)?;

        tracing::info!(
            count = self.state.count,
            ?change,
            today = %today,
            "streak updated"
        );
        Ok(change)
    }

    pub fn state(&self) -> StreakState {
        self.state
    }

    pub fn count(&self) -> u32 {
        self.state.count
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
