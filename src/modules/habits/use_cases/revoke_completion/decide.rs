use crate::modules::habits::core::{
    decision::{DecideError, Decision, owned_habit},
    events::{HabitEvent, v1::habit_completion_revoked::HabitCompletionRevokedV1},
    intents::HabitIntent,
    state::HabitState,
    streaks::compute_streaks,
};
use crate::modules::habits::use_cases::revoke_completion::command::RevokeCompletion;

pub fn decide_revoke_completion(state: &HabitState, command: RevokeCompletion) -> Decision {
    let habit = match owned_habit(state, &command.user_id) {
        Ok(habit) => habit,
        Err(reason) => return Decision::rejected(reason),
    };
    if !habit.completions.contains(&command.day) {
        return Decision::rejected(DecideError::NoOpRevoke { day: command.day });
    }

    let streaks = compute_streaks(
        habit
            .completions
            .iter()
            .copied()
            .filter(|day| *day != command.day),
        command.today,
    );
    let payload = HabitCompletionRevokedV1 {
        habit_id: habit.habit_id.clone(),
        user_id: habit.user_id.clone(),
        day: command.day,
        current_streak: streaks.current_streak,
        max_streak: streaks.max_streak,
        revoked_at: command.revoked_at,
        revoked_by: command.user_id,
    };
    Decision::Accepted {
        events: vec![HabitEvent::HabitCompletionRevokedV1(payload.clone())],
        intents: vec![HabitIntent::PublishHabitCompletionRevoked { payload }],
    }
}
