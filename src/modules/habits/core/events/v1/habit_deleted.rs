#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HabitDeletedV1 {
    pub habit_id: String,
    pub user_id: String,
    pub deleted_at: i64,
    pub deleted_by: String,
}
