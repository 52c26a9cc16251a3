use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::habits::use_cases::delete_habit::command::DeleteHabit;
use crate::shell::http::{application_error_response, internal_error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteHabitBody {
    pub user_id: String,
    pub habit_id: String,
}

#[derive(Serialize)]
pub struct DeleteHabitResponse {
    pub habit_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteHabitBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeleteHabit {
        habit_id: body.habit_id.clone(),
        user_id: body.user_id,
        deleted_at: state.now_millis(),
    };

    let committed = match state.command_handler.delete_habit(command).await {
        Ok(committed) => committed,
        Err(e) => return application_error_response(e),
    };
    if let Err(e) = state.project(&committed).await {
        return internal_error_response(e);
    }

    Json(DeleteHabitResponse {
        habit_id: body.habit_id,
    })
    .into_response()
}
