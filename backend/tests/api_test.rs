use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;

use fair_roulette::api::handlers::AppState;
use fair_roulette::api::routes::create_router;
use fair_roulette::config::settings::AppConfig;
use fair_roulette::database;
use fair_roulette::roulette::FixedClock;
use fair_roulette::services::bootstrap;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap()
}

fn app() -> Router {
    app_with_pool(database::create_memory_pool().unwrap())
}

fn app_with_pool(pool: database::DbPool) -> Router {
    bootstrap::initialize(&pool, false).unwrap();

    let state = AppState::new(pool, AppConfig::new())
        .with_clock(Arc::new(FixedClock(now())))
        .with_rng(StdRng::seed_from_u64(11));
    create_router(Arc::new(state))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, name: &str, present: bool) -> i64 {
    let payload = json!({ "name": name, "present": present });
    let (status, body) = send(app, Method::POST, "/api/persons", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_person_crud() {
    let app = app();
    let id = create(&app, "Isabelle Petit", false).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Isabelle Petit");
    assert_eq!(body["win_count"], 0);
    assert_eq!(body["last_win"], Value::Null);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/persons/{id}"),
        Some(json!({ "name": "Isabelle P." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Isabelle P.");
    assert_eq!(body["present"], false);

    let (status, body) = send(&app, Method::GET, "/api/persons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::DELETE, &format!("/api/persons/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Person not found");
}

#[tokio::test]
async fn test_malformed_requests_are_rejected() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/persons/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/persons",
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/persons",
        Some(json!({ "present": true })),
    )
    .await;
    assert!(status.is_client_error());

    let (status, _) = send(&app, Method::GET, "/api/persons/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/api/roulette/history?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}

#[tokio::test]
async fn test_spin_without_present_persons() {
    let app = app();
    create(&app, "Absent", false).await;

    let (status, body) = send(&app, Method::POST, "/api/roulette/spin", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No present persons to select from");
    let (_, history) = send(&app, Method::GET, "/api/roulette/history", None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_spin_records_winner_and_history() {
    let app = app();
    let id = create(&app, "Nathalie Simon", false).await;
    create(&app, "Absent", false).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/persons/{id}/presence"),
        Some(json!({ "present": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present"], true);

    let (status, body) = send(&app, Method::POST, "/api/roulette/spin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_participants"], 1);
    assert_eq!(body["winner"]["id"], id);
    assert_eq!(body["winner"]["win_count"], 1);
    assert_eq!(body["winner"]["last_win"], json!(now()));
    assert_eq!(body["winner"]["last_win_reset"], json!(now()));

    let (status, history) = send(&app, Method::GET, "/api/roulette/history", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["person_id"], id);
    assert_eq!(entries[0]["person"]["name"], "Nathalie Simon");
    assert_eq!(entries[0]["won_at"], json!(now()));
}

#[tokio::test]
async fn test_second_spin_in_same_epoch_increments() {
    let app = app();
    let id = create(&app, "Solo", true).await;

    send(&app, Method::POST, "/api/roulette/spin", None).await;
    let (status, body) = send(&app, Method::POST, "/api/roulette/spin", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["winner"]["id"], id);
    assert_eq!(body["winner"]["win_count"], 2);

    let (_, history) = send(&app, Method::GET, "/api/roulette/history?limit=1", None).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_spins_only_pick_present_persons() {
    let app = app();
    let absent = create(&app, "Absent", false).await;
    create(&app, "First", true).await;
    create(&app, "Second", true).await;

    for _ in 0..10 {
        let (status, body) = send(&app, Method::POST, "/api/roulette/spin", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(body["winner"]["id"], absent);
        assert_eq!(body["total_participants"], 2);
    }

    let (_, history) = send(&app, Method::GET, "/api/roulette/history", None).await;
    assert_eq!(history.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_resets() {
    let app = app();
    let id = create(&app, "Winner", true).await;
    create(&app, "Other", false).await;
    send(&app, Method::POST, "/api/roulette/spin", None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/persons/{id}/reset-wins"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["win_count"], 0);
    assert_eq!(body["last_win_reset"], json!(now()));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/persons/presence",
        Some(json!({ "present": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    send(&app, Method::POST, "/api/roulette/spin", None).await;

    let (status, body) = send(&app, Method::POST, "/api/roulette/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Win counts reset successfully");

    let (_, persons) = send(&app, Method::GET, "/api/persons", None).await;
    for person in persons.as_array().unwrap() {
        assert_eq!(person["win_count"], 0);
        assert_eq!(person["present"], true);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_spins_all_succeed() {
    const SPINS: usize = 24;

    let path = std::env::temp_dir().join(format!(
        "fair_roulette_api_spins_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let app = app_with_pool(database::create_pool(path.to_str().unwrap()).unwrap());
    let id = create(&app, "Always here", true).await;

    let mut tasks = Vec::with_capacity(SPINS);
    for _ in 0..SPINS {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            send(&app, Method::POST, "/api/roulette/spin", None).await
        }));
    }
    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winner"]["id"], id);
    }

    let (_, person) = send(&app, Method::GET, &format!("/api/persons/{id}"), None).await;
    assert_eq!(person["win_count"], SPINS as u64);
    let (_, history) = send(&app, Method::GET, "/api/roulette/history?limit=100", None).await;
    assert_eq!(history.as_array().unwrap().len(), SPINS);

    drop(app);
    let _ = std::fs::remove_file(&path);
}
