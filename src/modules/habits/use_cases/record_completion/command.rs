use chrono::NaiveDate;

/// Marks `day` as completed. `today` is the caller's reference day in the tracking calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCompletion {
    pub habit_id: String,
    pub user_id: String,
    pub day: NaiveDate,
    pub today: NaiveDate,
    pub recorded_at: i64,
}
