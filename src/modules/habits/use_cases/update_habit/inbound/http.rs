use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::use_cases::list_habits_by_user::projection::HabitView;
use crate::modules::habits::use_cases::update_habit::command::UpdateHabit;
use crate::shell::http::{application_error_response, internal_error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateHabitBody {
    pub user_id: String,
    pub habit_id: String,
    pub name: Option<String>,
    pub category: Option<HabitCategory>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateHabitBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateHabit {
        habit_id: body.habit_id,
        user_id: body.user_id,
        name: body.name,
        category: body.category,
        updated_at: state.now_millis(),
    };

    let committed = match state.command_handler.update_habit(command).await {
        Ok(committed) => committed,
        Err(e) => return application_error_response(e),
    };
    if let Err(e) = state.project(&committed).await {
        return internal_error_response(e);
    }

    match committed.active() {
        Some(habit) => Json(HabitView::from_active(habit, state.today())).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
