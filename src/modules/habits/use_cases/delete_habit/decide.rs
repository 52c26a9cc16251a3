use crate::modules::habits::core::{
    decision::{Decision, owned_habit},
    events::{HabitEvent, v1::habit_deleted::HabitDeletedV1},
    intents::HabitIntent,
    state::HabitState,
};
use crate::modules::habits::use_cases::delete_habit::command::DeleteHabit;

pub fn decide_delete(state: &HabitState, command: DeleteHabit) -> Decision {
    let habit = match owned_habit(state, &command.user_id) {
        Ok(habit) => habit,
        Err(reason) => return Decision::rejected(reason),
    };
    let payload = HabitDeletedV1 {
        habit_id: habit.habit_id.clone(),
        user_id: habit.user_id.clone(),
        deleted_at: command.deleted_at,
        deleted_by: command.user_id,
    };
    Decision::Accepted {
        events: vec![HabitEvent::HabitDeletedV1(payload.clone())],
        intents: vec![HabitIntent::PublishHabitDeleted { payload }],
    }
}
