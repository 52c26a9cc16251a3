use crate::modules::habits::core::{
    decision::{DecideError, Decision, normalize_name},
    events::{HabitEvent, v1::habit_created::HabitCreatedV1},
    intents::HabitIntent,
    state::HabitState,
};
use crate::modules::habits::use_cases::create_habit::command::CreateHabit;

pub fn decide_create(state: &HabitState, command: CreateHabit) -> Decision {
    match state {
        HabitState::None => {
            let name = match normalize_name(&command.name) {
                Ok(name) => name,
                Err(reason) => return Decision::rejected(reason),
            };
            let payload = HabitCreatedV1 {
                habit_id: command.habit_id,
                created_by: command.user_id.clone(),
                user_id: command.user_id,
                name,
                category: command.category,
                created_at: command.created_at,
            };
            Decision::Accepted {
                events: vec![HabitEvent::HabitCreatedV1(payload.clone())],
                intents: vec![HabitIntent::PublishHabitCreated { payload }],
            }
        }
        _ => Decision::rejected(DecideError::AlreadyExists),
    }
}
