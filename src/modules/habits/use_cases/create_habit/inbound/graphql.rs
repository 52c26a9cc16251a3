use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::habits::use_cases::create_habit::command::CreateHabit;
use crate::modules::habits::use_cases::list_habits_by_user::inbound::graphql::GqlHabitCategory;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateHabitMutation;

#[Object]
impl CreateHabitMutation {
    async fn create_habit(
        &self,
        context: &Context<'_>,
        user_id: String,
        name: String,
        category: Option<GqlHabitCategory>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let habit_id = Uuid::now_v7().to_string();

        let command = CreateHabit {
            habit_id: habit_id.clone(),
            user_id,
            name,
            category: category.map(Into::into).unwrap_or_default(),
            created_at: state.now_millis(),
        };

        let committed = state
            .command_handler
            .create_habit(command)
            .await
            .map_err(application_error)?;

        // Inline projection so queries see the new habit immediately
        state
            .project(&committed)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(habit_id))
    }
}
