use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::habits::use_cases::get_progress_calendar::handler::{
    ProgressCalendarError, ProgressCalendarRequest, progress_calendar,
};
use crate::shell::http::{calendar_error_response, internal_error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProgressCalendarParams {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    pub selected_day: Option<String>,
    pub habit_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProgressCalendarParams>,
) -> impl IntoResponse {
    let selected_day = match params
        .selected_day
        .as_deref()
        .map(|raw| state.calendar.parse_day(raw))
        .transpose()
    {
        Ok(day) => day,
        Err(e) => return calendar_error_response(e),
    };

    let request = ProgressCalendarRequest {
        user_id: params.user_id,
        year: params.year,
        month: params.month,
        selected_day,
        habit_id: params.habit_id,
    };

    match progress_calendar(state.queries.as_ref(), request, state.today()).await {
        Ok(calendar) => Json(calendar).into_response(),
        Err(ProgressCalendarError::InvalidInput(e)) => calendar_error_response(e),
        Err(ProgressCalendarError::HabitNotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(ProgressCalendarError::Backend(e)) => internal_error_response(e),
    }
}
