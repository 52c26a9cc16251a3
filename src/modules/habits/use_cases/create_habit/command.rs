use crate::modules::habits::core::category::HabitCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHabit {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub category: HabitCategory,
    pub created_at: i64,
}
