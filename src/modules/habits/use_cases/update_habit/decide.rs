use crate::modules::habits::core::{
    decision::{DecideError, Decision, normalize_name, owned_habit},
    events::{HabitEvent, v1::habit_updated::HabitUpdatedV1},
    intents::HabitIntent,
    state::HabitState,
};
use crate::modules::habits::use_cases::update_habit::command::UpdateHabit;

pub fn decide_update(state: &HabitState, command: UpdateHabit) -> Decision {
    let habit = match owned_habit(state, &command.user_id) {
        Ok(habit) => habit,
        Err(reason) => return Decision::rejected(reason),
    };
    if command.name.is_none() && command.category.is_none() {
        return Decision::rejected(DecideError::NothingToUpdate);
    }
    let name = match command.name.as_deref().map(normalize_name).transpose() {
        Ok(name) => name.unwrap_or_else(|| habit.name.clone()),
        Err(reason) => return Decision::rejected(reason),
    };

    let payload = HabitUpdatedV1 {
        habit_id: habit.habit_id.clone(),
        user_id: habit.user_id.clone(),
        name,
        category: command.category.unwrap_or(habit.category),
        updated_at: command.updated_at,
        updated_by: command.user_id,
    };
    Decision::Accepted {
        events: vec![HabitEvent::HabitUpdatedV1(payload.clone())],
        intents: vec![HabitIntent::PublishHabitUpdated { payload }],
    }
}
