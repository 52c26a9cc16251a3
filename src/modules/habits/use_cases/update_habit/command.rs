use crate::modules::habits::core::category::HabitCategory;

/// Renames or re-categorizes a habit. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateHabit {
    pub habit_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub category: Option<HabitCategory>,
    pub updated_at: i64,
}
