#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteHabit {
    pub habit_id: String,
    pub user_id: String,
    pub deleted_at: i64,
}
