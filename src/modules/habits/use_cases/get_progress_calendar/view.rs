use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::habits::core::category::HabitCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: NaiveDate,
    pub has_completion: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitDayStatus {
    pub habit_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub completed: bool,
}

/// Completion tally of the considered habits on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub completed: u32,
    pub total: u32,
    pub all_completed: bool,
    pub habits: Vec<HabitDayStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressCalendar {
    pub year: i32,
    pub month: u32,
    pub today: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub summary: DaySummary,
    pub best_streak: u32,
}
