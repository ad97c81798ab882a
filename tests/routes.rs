use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use railai_rs::types::asset::{AssetCategory, AssetType, RailwayAsset};
use railai_rs::types::geo::BoundingBox;
use railai_rs::{config::Config, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn state() -> AppState {
    let config = Config {
        // Nothing in these tests may reach a real Overpass server.
        overpass_url: "http://127.0.0.1:9/api/interpreter".to_string(),
        ..Config::default()
    };
    AppState::new(config).expect("demo catalog")
}

fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::geometry::router())
        .merge(routes::playback::router())
        .merge(routes::assets::router())
        .with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

#[tokio::test]
async fn route_metrics_are_served() {
    let app = app(state());
    let (status, json) = send(&app, "GET", "/api/routes/line-a/metrics", None).await;
    assert_eq!(status, StatusCode::OK);

    let cumulative = json["cumulative"].as_array().expect("cumulative");
    assert_eq!(json["waypoints"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["segments"].as_array().map(Vec::len), Some(9));
    assert_eq!(cumulative.len(), 10);
    assert_eq!(cumulative[0], 0.0);
    assert_eq!(cumulative[9], json["total"]);
}

#[tokio::test]
async fn position_by_ratio_and_time() {
    let app = app(state());

    let (status, json) = send(&app, "GET", "/api/routes/line-a/position?ratio=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["position"], json!([52.516, 13.401]));

    let (status, json) = send(&app, "GET", "/api/routes/line-a/position?ratio=7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ratio"], 1.0);
    assert_eq!(json["position"], json!([52.5205, 13.406]));

    let (status, json) = send(&app, "GET", "/api/routes/line-a/position?time=-30", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ratio"], 0.0);
    assert_eq!(json["distance_m"], 0.0);
}

#[tokio::test]
async fn position_requires_exactly_one_parameter() {
    let app = app(state());
    for uri in [
        "/api/routes/line-a/position",
        "/api/routes/line-a/position?ratio=0.5&time=10",
    ] {
        let (status, json) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(json["error"].is_string());
    }

    let (status, _) = send(&app, "GET", "/api/routes/nowhere/position?ratio=0.5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn events_are_aligned_with_the_route() {
    let app = app(state());
    let (status, json) = send(&app, "GET", "/api/routes/line-a/events", None).await;
    assert_eq!(status, StatusCode::OK);

    let events = json.as_array().expect("events");
    assert_eq!(events.len(), 20);
    assert_eq!(events[0]["id"], "la1");
    assert_eq!(events[0]["position"], json!([52.516, 13.401]));
    assert_eq!(events[19]["position"], json!([52.5205, 13.406]));
}

#[tokio::test]
async fn playback_session_lifecycle() {
    let app = app(state());

    let (status, json) = send(
        &app,
        "POST",
        "/api/playback",
        Some(json!({ "dataset": "line-a", "speed": 2.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["current_time"], 0.0);
    assert_eq!(json["playing"], false);
    assert_eq!(json["speed"], 2.0);
    assert_eq!(json["position"], json!([52.516, 13.401]));
    let id = json["session_id"].as_str().expect("session id").to_string();

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/playback/{id}/seek"),
        Some(json!({ "time": 60.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_time"], 60.0);

    let (status, json) = send(&app, "POST", &format!("/api/playback/{id}/play"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["playing"], true);

    let (status, json) = send(&app, "POST", &format!("/api/playback/{id}/pause"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["playing"], false);
    assert!(json["current_time"].as_f64().expect("time") >= 60.0);

    let (status, json) = send(&app, "GET", &format!("/api/playback/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dataset"], "line-a");

    let (status, _) = send(&app, "DELETE", &format!("/api/playback/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/playback/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn playback_rejects_bad_requests() {
    let app = app(state());

    let (status, _) = send(
        &app,
        "POST",
        "/api/playback",
        Some(json!({ "dataset": "line-a", "speed": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/playback",
        Some(json!({ "dataset": "atlantis" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "GET",
        "/api/playback/6f1c1c1e-1111-4c4c-8a8a-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cached_assets_are_served_without_fetching() {
    let state = state();
    let bbox = BoundingBox {
        south: 51.5,
        west: -0.2,
        north: 51.6,
        east: 0.1,
    };
    state.assets().insert(
        &bbox,
        &AssetCategory::DEFAULT,
        Arc::new(vec![RailwayAsset {
            id: "node_1".to_string(),
            asset_type: AssetType::Signal,
            lat: 51.52,
            lon: -0.13,
            tags: BTreeMap::new(),
            name: Some("SN1".to_string()),
            description: "Railway signal".to_string(),
        }]),
    );
    let app = app(state);

    let (status, json) = send(
        &app,
        "GET",
        "/api/assets?south=51.5&west=-0.2&north=51.6&east=0.1&types=levelCrossings,signals",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cached"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["assets"][0]["type"], "signal");

    let (status, json) = send(&app, "GET", "/api/assets/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["categories"]["signals"], 1);

    let (status, json) = send(&app, "DELETE", "/api/assets/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_entries"], 0);
}

#[tokio::test]
async fn malformed_asset_queries_are_rejected() {
    let app = app(state());
    for uri in [
        "/api/assets?south=51.5&west=-0.2",
        "/api/assets?south=52&west=-0.2&north=51&east=0.1",
        "/api/assets?south=51.5&west=-0.2&north=51.6&east=0.1&types=teleporters",
    ] {
        let (status, json) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(json["error"].is_string());
    }
}
