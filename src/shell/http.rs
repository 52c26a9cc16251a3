use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::habits::core::decision::DecideError;
use crate::modules::habits::use_cases::create_habit::inbound::http as create_http;
use crate::modules::habits::use_cases::delete_habit::inbound::http as delete_http;
use crate::modules::habits::use_cases::get_progress_calendar::inbound::http as calendar_http;
use crate::modules::habits::use_cases::handler::ApplicationError;
use crate::modules::habits::use_cases::list_habits_by_user::inbound::http as list_http;
use crate::modules::habits::use_cases::record_completion::inbound::http as record_http;
use crate::modules::habits::use_cases::revoke_completion::inbound::http as revoke_http;
use crate::modules::habits::use_cases::update_habit::inbound::http as update_http;
use crate::shared::core::calendar::CalendarError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/create-habit", post(create_http::handle))
        .route("/update-habit", post(update_http::handle))
        .route("/delete-habit", post(delete_http::handle))
        .route("/record-completion", post(record_http::handle))
        .route("/revoke-completion", post(revoke_http::handle))
        .route("/list-habits", get(list_http::handle))
        .route("/progress-calendar", get(calendar_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn with_message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(reason) => match reason {
            DecideError::NotFound => StatusCode::NOT_FOUND,
            DecideError::NotOwner => StatusCode::FORBIDDEN,
            DecideError::InvalidName
            | DecideError::NothingToUpdate
            | DecideError::FutureDay { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DecideError::AlreadyExists
            | DecideError::DuplicateCompletion { .. }
            | DecideError::NoOpRevoke { .. } => StatusCode::CONFLICT,
        },
        ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::EventStore(EventStoreError::Backend(_))
        | ApplicationError::Outbox(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn application_error_response(error: ApplicationError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "habit command failed");
        return with_message(status, "internal error");
    }
    with_message(status, error.to_string())
}

pub fn calendar_error_response(error: CalendarError) -> Response {
    with_message(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
}

pub fn internal_error_response(error: anyhow::Error) -> Response {
    tracing::error!(error = %error, "request failed");
    with_message(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
