use crate::modules::habits::core::category::HabitCategory;

/// Carries the resulting name and category, not a diff.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HabitUpdatedV1 {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub updated_at: i64,
    pub updated_by: String,
}
