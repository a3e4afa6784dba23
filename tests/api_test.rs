//! Integration tests for the HTTP surface
//!
//! These tests drive the real router end to end: routing, percent-decoding
//! of activity names, status codes, and exact response bodies.

use activities_backend::routes;
use activities_backend::state::{ActivityCatalog, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// Build a router over an isolated registry seeded with the default catalog
fn create_test_app() -> Router {
    let state = AppState {
        activities: ActivityCatalog::default_catalog(),
    };
    routes::create_router(Arc::new(RwLock::new(state)), "static")
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_activities() {
    let app = create_test_app();
    let response = get(&app, "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    let map = data.as_object().unwrap();
    assert!(map.contains_key("Chess Club"));
    assert!(map.contains_key("Programming Class"));

    let activity = &data["Chess Club"];
    assert!(activity["description"].is_string());
    assert!(activity["schedule"].is_string());
    assert_eq!(activity["max_participants"], 12);
    assert!(activity["participants"].is_array());
}

#[tokio::test]
async fn test_signup_for_activity() {
    let app = create_test_app();
    let response = post(
        &app,
        "/activities/Basketball%20Team/signup?email=test@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(
        data["message"],
        "test@mergington.edu signed up for Basketball Team"
    );
}

#[tokio::test]
async fn test_signup_already_registered() {
    let app = create_test_app();
    let uri = "/activities/Basketball%20Team/signup?email=duplicate@mergington.edu";

    let first = post(&app, uri).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post(&app, uri).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let data = body_json(second).await;
    assert_eq!(data["detail"], "Student already signed up for this activity");
}

#[tokio::test]
async fn test_signup_nonexistent_activity() {
    let app = create_test_app();
    let response = post(
        &app,
        "/activities/Nonexistent%20Activity/signup?email=test@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = body_json(response).await;
    assert_eq!(data["detail"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_from_activity() {
    let app = create_test_app();
    post(
        &app,
        "/activities/Drama%20Club/signup?email=student@mergington.edu",
    )
    .await;

    let response = post(
        &app,
        "/activities/Drama%20Club/unregister?email=student@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(
        data["message"],
        "Unregistered student@mergington.edu from Drama Club"
    );
}

#[tokio::test]
async fn test_unregister_not_registered() {
    let app = create_test_app();
    let response = post(
        &app,
        "/activities/Art%20Studio/unregister?email=notregistered@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = body_json(response).await;
    assert_eq!(data["detail"], "Student is not registered for this activity");
}

#[tokio::test]
async fn test_unregister_nonexistent_activity() {
    let app = create_test_app();
    let response = post(
        &app,
        "/activities/Nonexistent%20Activity/unregister?email=test@mergington.edu",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = body_json(response).await;
    assert_eq!(data["detail"], "Activity not found");
}

/// The full signup lifecycle against one activity, observing participant
/// lists through the public API between each step
#[tokio::test]
async fn test_tennis_club_signup_lifecycle() {
    let app = create_test_app();

    let participants = |data: &Value| -> Vec<String> {
        data["Tennis Club"]["participants"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    };

    let initial = participants(&body_json(get(&app, "/activities").await).await);
    assert_eq!(initial.len(), 2);

    // Sign up a new student
    let response = post(&app, "/activities/Tennis%20Club/signup?email=x@y.edu").await;
    assert_eq!(response.status(), StatusCode::OK);

    let after_signup = participants(&body_json(get(&app, "/activities").await).await);
    let mut expected = initial.clone();
    expected.push("x@y.edu".to_string());
    assert_eq!(after_signup, expected);

    // A second signup with the same email is rejected and changes nothing
    let response = post(&app, "/activities/Tennis%20Club/signup?email=x@y.edu").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        participants(&body_json(get(&app, "/activities").await).await),
        expected
    );

    // Unregistering restores the original list
    let response = post(&app, "/activities/Tennis%20Club/unregister?email=x@y.edu").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        participants(&body_json(get(&app, "/activities").await).await),
        initial
    );
}

#[tokio::test]
async fn test_root_redirects_to_static_site() {
    let app = create_test_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("/static/index.html"));
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["status"], "healthy");
}
