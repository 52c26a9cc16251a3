use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeCompletion {
    pub habit_id: String,
    pub user_id: String,
    pub day: NaiveDate,
    pub today: NaiveDate,
    pub revoked_at: i64,
}
