use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::core::streaks::StreakResult;
use crate::modules::habits::use_cases::list_habits_by_user::projection::{
    HabitChange, HabitPatch, HabitRow,
};

pub enum Mutation {
    Upsert(HabitRow),
    Patch(HabitPatch),
}

pub fn apply(stream_id: &str, version: i64, event: &HabitEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        HabitEvent::HabitCreatedV1(details) => vec![Mutation::Upsert(HabitRow {
            habit_id: details.habit_id.clone(),
            user_id: details.user_id.clone(),
            name: details.name.clone(),
            category: details.category,
            completions: Default::default(),
            current_streak: 0,
            max_streak: 0,
            created_at: details.created_at,
            created_by: details.created_by.clone(),
            updated_at: details.created_at,
            updated_by: details.created_by.clone(),
            deleted_at: None,
            version,
            last_event_id: Some(stream_key),
        })],
        HabitEvent::HabitUpdatedV1(details) => vec![Mutation::Patch(HabitPatch {
            habit_id: details.habit_id.clone(),
            user_id: details.user_id.clone(),
            change: HabitChange::Details {
                name: details.name.clone(),
                category: details.category,
            },
            updated_at: details.updated_at,
            updated_by: details.updated_by.clone(),
            version,
            last_event_id: stream_key,
        })],
        HabitEvent::HabitDeletedV1(details) => vec![Mutation::Patch(HabitPatch {
            habit_id: details.habit_id.clone(),
            user_id: details.user_id.clone(),
            change: HabitChange::Deleted,
            updated_at: details.deleted_at,
            updated_by: details.deleted_by.clone(),
            version,
            last_event_id: stream_key,
        })],
        HabitEvent::HabitCompletionRecordedV1(details) => vec![Mutation::Patch(HabitPatch {
            habit_id: details.habit_id.clone(),
            user_id: details.user_id.clone(),
            change: HabitChange::CompletionAdded {
                day: details.day,
                streaks: StreakResult {
                    current_streak: details.current_streak,
                    max_streak: details.max_streak,
                },
            },
            updated_at: details.recorded_at,
            updated_by: details.recorded_by.clone(),
            version,
            last_event_id: stream_key,
        })],
        HabitEvent::HabitCompletionRevokedV1(details) => vec![Mutation::Patch(HabitPatch {
            habit_id: details.habit_id.clone(),
            user_id: details.user_id.clone(),
            change: HabitChange::CompletionRemoved {
                day: details.day,
                streaks: StreakResult {
                    current_streak: details.current_streak,
                    max_streak: details.max_streak,
                },
            },
            updated_at: details.revoked_at,
            updated_by: details.revoked_by.clone(),
            version,
            last_event_id: stream_key,
        })],
    }
}
