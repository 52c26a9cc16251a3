use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::habits::core::category::HabitCategory;
use crate::modules::habits::use_cases::create_habit::command::CreateHabit;
use crate::shell::http::{application_error_response, internal_error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateHabitBody {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub category: HabitCategory,
}

#[derive(Serialize)]
pub struct CreateHabitResponse {
    pub habit_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateHabitBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let habit_id = Uuid::now_v7().to_string();
    let command = CreateHabit {
        habit_id: habit_id.clone(),
        user_id: body.user_id,
        name: body.name,
        category: body.category,
        created_at: state.now_millis(),
    };

    let committed = match state.command_handler.create_habit(command).await {
        Ok(committed) => committed,
        Err(e) => return application_error_response(e),
    };
    if let Err(e) = state.project(&committed).await {
        return internal_error_response(e);
    }

    (
        StatusCode::CREATED,
        Json(CreateHabitResponse { habit_id }),
    )
        .into_response()
}
