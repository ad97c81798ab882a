use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use railai_rs::{config::Config, routes, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Config::default()).expect("demo catalog");
    Router::new()
        .merge(routes::datasets::router())
        .merge(routes::catalog::router())
        .with_state(state)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

#[tokio::test]
async fn lists_all_datasets() {
    let (status, json) = get("/api/datasets").await;
    assert_eq!(status, StatusCode::OK);

    let datasets = json.as_array().expect("array");
    assert_eq!(datasets.len(), 5);
    assert_eq!(datasets[0]["id"], "line-a");
    assert_eq!(datasets[0]["events"], 20);
    assert!(datasets[0]["total_duration_seconds"].as_f64().expect("duration") > 0.0);
}

#[tokio::test]
async fn events_are_chronological_with_time_ratios() {
    let (status, json) = get("/api/datasets/line-a/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 20);
    assert_eq!(json["matched"], 20);

    let events = json["events"].as_array().expect("events");
    let timestamps: Vec<&str> = events
        .iter()
        .map(|e| e["timestamp"].as_str().expect("timestamp"))
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
    assert_eq!(events[0]["time_ratio"].as_f64(), Some(0.0));
    assert_eq!(events[19]["time_ratio"].as_f64(), Some(1.0));
}

#[tokio::test]
async fn events_can_be_filtered() {
    let (status, json) =
        get("/api/datasets/line-a/events?types=RED_SIGNAL,OBSTACLE&min_confidence=0.9").await;
    assert_eq!(status, StatusCode::OK);

    let events = json["events"].as_array().expect("events");
    assert_eq!(json["matched"].as_u64(), Some(events.len() as u64));
    for event in events {
        let kind = event["type"].as_str().expect("type");
        assert!(kind == "RED_SIGNAL" || kind == "OBSTACLE", "{}", kind);
        assert!(event["confidence"].as_f64().expect("confidence") >= 0.9);
    }
}

#[tokio::test]
async fn events_respect_time_window() {
    let (status, json) = get(
        "/api/datasets/line-a/events?from=2024-01-15%2008:00:00&to=2024-01-15%2008:12:15",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["events"]
        .as_array()
        .expect("events")
        .iter()
        .map(|e| e["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["la1", "la2"]);
}

#[tokio::test]
async fn malformed_filters_are_rejected() {
    for uri in [
        "/api/datasets/line-a/events?types=UFO",
        "/api/datasets/line-a/events?min_confidence=1.5",
        "/api/datasets/line-a/events?from=yesterday",
        "/api/datasets/line-a/events?from=2024-01-16%2000:00:00&to=2024-01-15%2000:00:00",
    ] {
        let (status, json) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn unknown_dataset_is_not_found() {
    let (status, json) = get("/api/datasets/line-z/events").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().expect("error").contains("line-z"));
}

#[tokio::test]
async fn dashboard_summarises_the_default_dataset() {
    let (status, json) = get("/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dataset"], "line-a");
    assert_eq!(json["total_events"], 20);
    assert_eq!(json["recent_events"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["counts"].as_object().map(|m| m.len()), Some(5));
    assert_eq!(json["active_models"], 3);

    let counts: u64 = json["counts"]
        .as_object()
        .expect("counts")
        .values()
        .map(|v| v.as_u64().expect("count"))
        .sum();
    assert_eq!(counts, 20);
}

#[tokio::test]
async fn dashboard_accepts_a_dataset() {
    let (status, json) = get("/api/dashboard?dataset=night-freight").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_events"], 5);
}

#[tokio::test]
async fn catalogues_are_served() {
    let (status, models) = get("/api/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(models.as_array().map(Vec::len), Some(4));
    assert!(models[0]["mAP"].is_number());

    let (status, uploads) = get("/api/uploads").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(uploads.as_array().map(Vec::len), Some(8));
}
