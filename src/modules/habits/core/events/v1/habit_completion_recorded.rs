use chrono::NaiveDate;

/// A completion day was added. The streak pair is the cached value after the addition.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct HabitCompletionRecordedV1 {
    pub habit_id: String,
    pub user_id: String,
    pub day: NaiveDate,
    pub current_streak: u32,
    pub max_streak: u32,
    pub recorded_at: i64,
    pub recorded_by: String,
}
