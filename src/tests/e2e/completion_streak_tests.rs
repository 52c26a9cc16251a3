use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::join;
use tower::ServiceExt;

use crate::shared::core::calendar::TrackingCalendar;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::fixed_today;
use crate::tests::fixtures::state::AdjustableClock;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or_default())
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn app_with_clock() -> (Router, Arc<AdjustableClock>) {
    let clock = Arc::new(AdjustableClock::at_noon(fixed_today()));
    let state = AppState::in_memory("habits", TrackingCalendar::utc(), clock.clone());
    (router(state), clock)
}

async fn create_habit(app: &Router, name: &str) -> String {
    let (status, json) = call(
        app,
        post("/create-habit", json!({"user_id": "u-1", "name": name})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["habit_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn builds_and_breaks_a_streak_as_days_pass() {
    let (app, clock) = app_with_clock();
    let habit_id = create_habit(&app, "Meditate").await;
    let complete = || post("/record-completion", json!({"user_id": "u-1", "habit_id": habit_id}));

    for expected in 1..=3 {
        let (status, json) = call(&app, complete()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["current_streak"], expected);
        assert_eq!(json["max_streak"], expected);
        clock.advance_days(1);
    }

    // The day after the last completion still counts the run.
    let (_, list) = call(&app, get("/list-habits?user_id=u-1")).await;
    assert_eq!(list[0]["current_streak"], 3);
    assert_eq!(list[0]["completed_today"], false);

    clock.advance_days(1);
    let (_, list) = call(&app, get("/list-habits?user_id=u-1")).await;
    assert_eq!(list[0]["current_streak"], 0);
    assert_eq!(list[0]["max_streak"], 3);

    let (status, json) = call(&app, complete()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_streak"], 1);
    assert_eq!(json["max_streak"], 3);
}

#[tokio::test]
async fn record_then_revoke_restores_the_completion_set() {
    let (app, _) = app_with_clock();
    let habit_id = create_habit(&app, "Read").await;
    let body = json!({"user_id": "u-1", "habit_id": habit_id, "day": "2024-03-14"});

    let (status, recorded) = call(&app, post("/record-completion", body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recorded["completions"], json!(["2024-03-14"]));

    let (status, _) = call(&app, post("/record-completion", body.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, revoked) = call(&app, post("/revoke-completion", body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(revoked["completions"], json!([]));
    assert_eq!(revoked["max_streak"], 0);

    let (status, _) = call(&app, post("/revoke-completion", body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn racing_completions_on_one_habit_keep_a_single_entry() {
    let (app, _) = app_with_clock();
    let habit_id = create_habit(&app, "Run").await;
    let body = json!({"user_id": "u-1", "habit_id": habit_id});

    let (first, second) = join!(
        call(&app, post("/record-completion", body.clone())),
        call(&app, post("/record-completion", body.clone()))
    );
    let statuses = [first.0, second.0];
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count(),
        1
    );

    let (_, list) = call(&app, get("/list-habits?user_id=u-1")).await;
    assert_eq!(list[0]["completions"], json!(["2024-03-15"]));
}

#[tokio::test]
async fn progress_calendar_reflects_completions_and_best_streak() {
    let (app, _) = app_with_clock();
    let read = create_habit(&app, "Read").await;
    let run = create_habit(&app, "Run").await;
    for day in ["2024-03-12", "2024-03-13", "2024-03-14", "2024-03-15"] {
        let (status, _) = call(
            &app,
            post(
                "/record-completion",
                json!({"user_id": "u-1", "habit_id": read, "day": day}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    call(
        &app,
        post("/record-completion", json!({"user_id": "u-1", "habit_id": run})),
    )
    .await;

    let (status, calendar) = call(
        &app,
        get("/progress-calendar?user_id=u-1&year=2024&month=3"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(calendar["best_streak"], 4);
    assert_eq!(calendar["summary"]["completed"], 2);
    assert_eq!(calendar["summary"]["all_completed"], true);

    let (_, single) = call(
        &app,
        get(&format!(
            "/progress-calendar?user_id=u-1&year=2024&month=3&habit_id={run}&selected_day=2024-03-14"
        )),
    )
    .await;
    assert_eq!(single["best_streak"], 1);
    assert_eq!(single["summary"]["total"], 1);
    assert_eq!(single["summary"]["completed"], 0);
}

#[tokio::test]
async fn graphql_mutations_share_the_streak_engine() {
    let (app, _) = app_with_clock();
    let gql = |query: String| post("/gql", json!({ "query": query }));

    let (_, created) = call(
        &app,
        gql(r#"mutation { createHabit(userId: "u-1", name: "Journal", category: NIGHT) }"#.into()),
    )
    .await;
    let habit_id = created["data"]["createHabit"].as_str().unwrap().to_string();

    let (_, recorded) = call(
        &app,
        gql(format!(
            r#"mutation {{ recordCompletion(userId: "u-1", habitId: "{habit_id}", day: "2024-03-14") {{ currentStreak maxStreak completions }} }}"#
        )),
    )
    .await;
    assert_eq!(
        recorded["data"]["recordCompletion"],
        json!({"currentStreak": 1, "maxStreak": 1, "completions": ["2024-03-14"]})
    );

    let (_, rejected) = call(
        &app,
        gql(format!(
            r#"mutation {{ recordCompletion(userId: "u-1", habitId: "{habit_id}", day: "2024-03-16") {{ currentStreak }} }}"#
        )),
    )
    .await;
    assert_eq!(rejected["errors"][0]["extensions"]["code"], 422);

    let (_, calendar) = call(
        &app,
        gql(r#"{ progressCalendar(userId: "u-1", year: 2024, month: 3) { bestStreak summary { total completed } } habits(userId: "u-1") { name category } }"#.into()),
    )
    .await;
    assert_eq!(calendar["data"]["progressCalendar"]["bestStreak"], 1);
    assert_eq!(calendar["data"]["progressCalendar"]["summary"]["completed"], 0);
    assert_eq!(calendar["data"]["habits"][0]["category"], "NIGHT");

    let (_, revoked) = call(
        &app,
        gql(format!(
            r#"mutation {{ revokeCompletion(userId: "u-1", habitId: "{habit_id}", day: "2024-03-14") {{ maxStreak completions }} }}"#
        )),
    )
    .await;
    assert_eq!(
        revoked["data"]["revokeCompletion"],
        json!({"maxStreak": 0, "completions": []})
    );
}
