use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};

use crate::modules::habits::use_cases::create_habit::inbound::graphql::CreateHabitMutation;
use crate::modules::habits::use_cases::get_progress_calendar::inbound::graphql::ProgressCalendarQuery;
use crate::modules::habits::use_cases::list_habits_by_user::inbound::graphql::HabitsQuery;
use crate::modules::habits::use_cases::record_completion::inbound::graphql::RecordCompletionMutation;
use crate::modules::habits::use_cases::revoke_completion::inbound::graphql::RevokeCompletionMutation;
use crate::modules::habits::use_cases::handler::ApplicationError;
use crate::shared::core::calendar::CalendarError;
use crate::shell::http::status_for;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(HabitsQuery, ProgressCalendarQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateHabitMutation,
    RecordCompletionMutation,
    RevokeCompletionMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Converts an application failure into a GraphQL error carrying the HTTP-equivalent
/// status under the `code` extension.
pub fn application_error(error: ApplicationError) -> async_graphql::Error {
    let status = status_for(&error);
    let message = if status.is_server_error() {
        tracing::error!(error = %error, "habit command failed");
        "internal error".to_string()
    } else {
        error.to_string()
    };
    async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", status.as_u16()))
}

pub fn invalid_input(error: CalendarError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string()).extend_with(|_, ext| ext.set("code", 422))
}
