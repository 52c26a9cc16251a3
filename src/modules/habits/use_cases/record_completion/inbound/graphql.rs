use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::habits::use_cases::list_habits_by_user::inbound::graphql::GqlHabit;
use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitView;
use crate::modules::habits::use_cases::record_completion::command::RecordCompletion;
use crate::shell::graphql::{application_error, invalid_input};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordCompletionMutation;

#[Object]
impl RecordCompletionMutation {
    /// Marks a habit completed on `day` (`YYYY-MM-DD`), today when omitted.
    async fn record_completion(
        &self,
        context: &Context<'_>,
        user_id: String,
        habit_id: String,
        day: Option<String>,
    ) -> GqlResult<GqlHabit> {
        let state = context.data_unchecked::<AppState>();
        let today = state.today();
        let day = match day {
            Some(raw) => state.calendar.parse_day(&raw).map_err(invalid_input)?,
            None => today,
        };

        let committed = state
            .command_handler
            .record_completion(RecordCompletion {
                habit_id,
                user_id,
                day,
                today,
                recorded_at: state.now_millis(),
            })
            .await
            .map_err(application_error)?;
        state
            .project(&committed)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let habit = committed
            .active()
            .ok_or_else(|| async_graphql::Error::new("habit is not active"))?;
        Ok(HabitView::from_active(habit, today).into())
    }
}
