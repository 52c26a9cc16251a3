use crate::modules::habits::core::category::HabitCategory;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HabitCreatedV1 {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub created_at: i64,
    pub created_by: String,
}
