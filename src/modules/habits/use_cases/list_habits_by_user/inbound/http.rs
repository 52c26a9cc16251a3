use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::habits::use_cases::list_habits_by_user::handler::{Paging, list_habits};
use crate::shell::http::internal_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListHabitsParams {
    pub user_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListHabitsParams>,
) -> impl IntoResponse {
    let defaults = Paging::default();
    let paging = Paging {
        offset: params.offset.unwrap_or(defaults.offset),
        limit: params.limit.unwrap_or(defaults.limit),
        sort_desc: params.sort_desc.unwrap_or(defaults.sort_desc),
    };

    match list_habits(state.queries.as_ref(), &params.user_id, state.today(), paging).await {
        Ok(habits) => Json(habits).into_response(),
        Err(e) => internal_error_response(e),
    }
}
