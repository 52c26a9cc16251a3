use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitRow;

/// The projected row of `make_habit_created_v1_event` right after creation.
pub fn make_habit_row() -> HabitRow {
    HabitRow {
        habit_id: "habit-fixed-0001".to_string(),
        user_id: "user-fixed-0001".to_string(),
        name: "Drink water".to_string(),
        category: HabitCategory::Morning,
        completions: Default::default(),
        current_streak: 0,
        max_streak: 0,
        created_at: 1_710_000_000_000,
        created_by: "user-fixed-0001".to_string(),
        updated_at: 1_710_000_000_000,
        updated_by: "user-fixed-0001".to_string(),
        deleted_at: None,
        version: 1,
        last_event_id: Some("Habit-habit-fixed-0001:1".to_string()),
    }
}
