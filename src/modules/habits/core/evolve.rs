use std::collections::BTreeSet;

use crate::modules::habits::core::events::HabitEvent;
use crate::modules::habits::core::state::{ActiveHabit, HabitState};

pub fn evolve(state: HabitState, event: HabitEvent) -> HabitState {
    match (state, event) {
        (HabitState::None, HabitEvent::HabitCreatedV1(e)) => HabitState::Active(ActiveHabit {
            habit_id: e.habit_id,
            user_id: e.user_id,
            name: e.name,
            category: e.category,
            completions: BTreeSet::new(),
            current_streak: 0,
            max_streak: 0,
            created_at: e.created_at,
            created_by: e.created_by.clone(),
            updated_at: e.created_at,
            updated_by: e.created_by,
        }),
        (HabitState::Active(habit), HabitEvent::HabitUpdatedV1(e)) => {
            HabitState::Active(ActiveHabit {
                name: e.name,
                category: e.category,
                updated_at: e.updated_at,
                updated_by: e.updated_by,
                ..habit
            })
        }
        (HabitState::Active(habit), HabitEvent::HabitDeletedV1(e)) => HabitState::Deleted {
            habit_id: habit.habit_id,
            user_id: habit.user_id,
            deleted_at: e.deleted_at,
        },
        (HabitState::Active(mut habit), HabitEvent::HabitCompletionRecordedV1(e)) => {
            habit.completions.insert(e.day);
            HabitState::Active(ActiveHabit {
                current_streak: e.current_streak,
                max_streak: e.max_streak,
                updated_at: e.recorded_at,
                updated_by: e.recorded_by,
                ..habit
            })
        }
        (HabitState::Active(mut habit), HabitEvent::HabitCompletionRevokedV1(e)) => {
            habit.completions.remove(&e.day);
            HabitState::Active(ActiveHabit {
                current_streak: e.current_streak,
                max_streak: e.max_streak,
                updated_at: e.revoked_at,
                updated_by: e.revoked_by,
                ..habit
            })
        }
        (state, _) => state,
    }
}
