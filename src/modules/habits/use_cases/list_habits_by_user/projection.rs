use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::core::state::ActiveHabit;
use crate::modules::habits::core::streaks::{StreakResult, compute_streaks};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HabitRow {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub completions: BTreeSet<NaiveDate>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
    /// Stream version of the last event folded into this row.
    pub version: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitChange {
    Details {
        name: String,
        category: HabitCategory,
    },
    CompletionAdded {
        day: NaiveDate,
        streaks: StreakResult,
    },
    CompletionRemoved {
        day: NaiveDate,
        streaks: StreakResult,
    },
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitPatch {
    pub habit_id: String,
    pub user_id: String,
    pub change: HabitChange,
    pub updated_at: i64,
    pub updated_by: String,
    pub version: i64,
    pub last_event_id: String,
}

impl HabitRow {
    /// Applies a patch unless the row already reflects its version or a later one.
    /// Returns whether the row changed.
    pub fn apply_patch(&mut self, patch: HabitPatch) -> bool {
        if patch.version <= self.version {
            return false;
        }
        match patch.change {
            HabitChange::Details { name, category } => {
                self.name = name;
                self.category = category;
            }
            HabitChange::CompletionAdded { day, streaks } => {
                self.completions.insert(day);
                self.current_streak = streaks.current_streak;
                self.max_streak = streaks.max_streak;
            }
            HabitChange::CompletionRemoved { day, streaks } => {
                self.completions.remove(&day);
                self.current_streak = streaks.current_streak;
                self.max_streak = streaks.max_streak;
            }
            HabitChange::Deleted => self.deleted_at = Some(patch.updated_at),
        }
        self.updated_at = patch.updated_at;
        self.updated_by = patch.updated_by;
        self.version = patch.version;
        self.last_event_id = Some(patch.last_event_id);
        true
    }
}

/// What clients see of a habit. Streaks are recomputed against `today` because the cached
/// pair on the row only changes when completions do.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HabitView {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub completions: Vec<NaiveDate>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub completed_today: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl HabitView {
    pub fn from_row(row: HabitRow, today: NaiveDate) -> Self {
        let streaks = compute_streaks(row.completions.iter().copied(), today);
        Self {
            completed_today: row.completions.contains(&today),
            completions: row.completions.into_iter().collect(),
            habit_id: row.habit_id,
            user_id: row.user_id,
            name: row.name,
            category: row.category,
            current_streak: streaks.current_streak,
            max_streak: streaks.max_streak,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    pub fn from_active(habit: &ActiveHabit, today: NaiveDate) -> Self {
        let streaks = compute_streaks(habit.completions.iter().copied(), today);
        Self {
            habit_id: habit.habit_id.clone(),
            user_id: habit.user_id.clone(),
            name: habit.name.clone(),
            category: habit.category,
            completions: habit.completions.iter().copied().collect(),
            current_streak: streaks.current_streak,
            max_streak: streaks.max_streak,
            completed_today: habit.completions.contains(&today),
            created_at: habit.created_at,
            updated_at: habit.updated_at,
        }
    }
}
