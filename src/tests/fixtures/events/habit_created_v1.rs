use crate::modules::habits::core::events::v1::habit_created::HabitCreatedV1;
use crate::tests::fixtures::commands::create_habit::CreateHabitBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_habit_created_v1_event() -> HabitCreatedV1 {
    let command = CreateHabitBuilder::new().build();
    HabitCreatedV1 {
        habit_id: command.habit_id,
        created_by: command.user_id.clone(),
        user_id: command.user_id,
        name: command.name,
        category: command.category,
        created_at: command.created_at,
    }
}
