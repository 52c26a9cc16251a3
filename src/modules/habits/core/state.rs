use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::modules::habits::core::category::HabitCategory;

/// A habit that exists and accepts commands.
///
/// `current_streak` and `max_streak` are a cache of the streak engine's result for
/// `completions`. Only completion events write them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveHabit {
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
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitState {
    None,
    Active(ActiveHabit),
    Deleted {
        habit_id: String,
        user_id: String,
        deleted_at: i64,
    },
}
