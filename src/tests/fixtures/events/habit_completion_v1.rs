use chrono::NaiveDate;

use crate::modules::habits::core::events::v1::habit_completion_recorded::HabitCompletionRecordedV1;
use crate::modules::habits::core::events::v1::habit_completion_revoked::HabitCompletionRevokedV1;

pub fn make_completion_recorded_v1_event(
    day: NaiveDate,
    current_streak: u32,
    max_streak: u32,
) -> HabitCompletionRecordedV1 {
    HabitCompletionRecordedV1 {
        habit_id: "habit-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        day,
        current_streak,
        max_streak,
        recorded_at: 1_710_500_000_000,
        recorded_by: "user-fixed-0001".to_string(),
    }
}

pub fn make_completion_revoked_v1_event(
    day: NaiveDate,
    current_streak: u32,
    max_streak: u32,
) -> HabitCompletionRevokedV1 {
    HabitCompletionRevokedV1 {
        habit_id: "habit-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        day,
        current_streak,
        max_streak,
        revoked_at: 1_710_600_000_000,
        revoked_by: "user-fixed-0001".to_string(),
    }
}
