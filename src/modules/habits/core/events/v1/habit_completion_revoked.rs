use chrono::NaiveDate;

/// A completion day was removed. The streak pair is the cached value after the removal.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HabitCompletionRevokedV1 {
    pub habit_id: String,
    pub user_id: String,
    pub day: NaiveDate,
    pub current_streak: u32,
    pub max_streak: u32,
    pub revoked_at: i64,
    pub revoked_by: String,
}
