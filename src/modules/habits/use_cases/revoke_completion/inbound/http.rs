use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitView;
use crate::modules::habits::use_cases::revoke_completion::command::RevokeCompletion;
use crate::shell::http::{
    application_error_response, calendar_error_response, internal_error_response,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RevokeCompletionBody {
    pub user_id: String,
    pub habit_id: String,
    pub day: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RevokeCompletionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let today = state.today();
    let day = match body.day.as_deref().map(|raw| state.calendar.parse_day(raw)) {
        None => today,
        Some(Ok(day)) => day,
        Some(Err(e)) => return calendar_error_response(e),
    };

    let command = RevokeCompletion {
        habit_id: body.habit_id,
        user_id: body.user_id,
        day,
        today,
        revoked_at: state.now_millis(),
    };

    let committed = match state.command_handler.revoke_completion(command).await {
        Ok(committed) => committed,
        Err(e) => return application_error_response(e),
    };
    if let Err(e) = state.project(&committed).await {
        return internal_error_response(e);
    }

    match committed.active() {
        Some(habit) => Json(HabitView::from_active(habit, today)).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
