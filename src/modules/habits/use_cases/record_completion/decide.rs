use std::iter;

use crate::modules::habits::core::{
    decision::{DecideError, Decision, owned_habit},
    events::{HabitEvent, v1::habit_completion_recorded::HabitCompletionRecordedV1},
    intents::HabitIntent,
    state::HabitState,
    streaks::compute_streaks,
};
use crate::modules::habits::use_cases::record_completion::command::RecordCompletion;

pub fn decide_record_completion(state: &HabitState, command: RecordCompletion) -> Decision {
    let habit = match owned_habit(state, &command.user_id) {
        Ok(habit) => habit,
        Err(reason) => return Decision::rejected(reason),
    };
    if command.day > command.today {
        return Decision::rejected(DecideError::FutureDay {
            day: command.day,
            today: command.today,
        });
    }
    if habit.completions.contains(&command.day) {
        return Decision::rejected(DecideError::DuplicateCompletion { day: command.day });
    }

    let streaks = compute_streaks(
        habit
            .completions
            .iter()
            .copied()
            .chain(iter::once(command.day)),
        command.today,
    );
    let payload = HabitCompletionRecordedV1 {
        habit_id: habit.habit_id.clone(),
        user_id: habit.user_id.clone(),
        day: command.day,
        current_streak: streaks.current_streak,
        max_streak: streaks.max_streak,
        recorded_at: command.recorded_at,
        recorded_by: command.user_id,
    };
    Decision::Accepted {
        events: vec![HabitEvent::HabitCompletionRecordedV1(payload.clone())],
        intents: vec![HabitIntent::PublishHabitCompletionRecorded { payload }],
    }
}
