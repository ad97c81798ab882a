use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::geometry::{align_event_with_route, time_to_position, time_to_ratio, RouteMetrics};
use crate::state::AppState;
use crate::types::event::EventType;
use crate::types::geo::GeoPoint;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/routes/:id/metrics", get(route_metrics))
        .route("/api/routes/:id/position", get(route_position))
        .route("/api/routes/:id/events", get(route_events))
}

#[derive(Debug, Serialize)]
struct MetricsResponse {
    dataset: String,
    #[serde(flatten)]
    metrics: RouteMetrics,
    total_duration_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct PositionQuery {
    ratio: Option<f64>,
    time: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PositionResponse {
    dataset: String,
    ratio: f64,
    distance_m: f64,
    position: GeoPoint,
}

#[derive(Debug, Serialize)]
struct AlignedEvent {
    id: String,
    #[serde(rename = "type")]
    event_type: EventType,
    time_ratio: f64,
    position: GeoPoint,
}

async fn route_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MetricsResponse>, AppError> {
    let dataset = state.dataset(&id)?;
    let metrics = state.route_metrics(&id)?;

    Ok(Json(MetricsResponse {
        dataset: dataset.id.clone(),
        metrics: (*metrics).clone(),
        total_duration_seconds: dataset.total_duration,
    }))
}

async fn route_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PositionQuery>,
) -> Result<Json<PositionResponse>, AppError> {
    let dataset = state.dataset(&id)?;
    let metrics = state.route_metrics(&id)?;

    let (ratio, position) = match (params.ratio, params.time) {
        (Some(ratio), None) => (ratio, metrics.point_at_ratio(ratio)),
        (None, Some(time)) => (
            time_to_ratio(time, dataset.total_duration),
            time_to_position(time, dataset.total_duration, &metrics),
        ),
        _ => {
            return Err(AppError::BadRequest(
                "Provide exactly one of 'ratio' or 'time'".to_string(),
            ))
        }
    };

    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    Ok(Json(PositionResponse {
        dataset: dataset.id.clone(),
        ratio,
        distance_m: ratio * metrics.total(),
        position,
    }))
}

async fn route_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AlignedEvent>>, AppError> {
    let dataset = state.dataset(&id)?;
    let metrics = state.route_metrics(&id)?;

    let aligned = dataset
        .events
        .iter()
        .map(|event| {
            let time_ratio = event.time_ratio.unwrap_or(0.0);
            AlignedEvent {
                id: event.id.clone(),
                event_type: event.event_type,
                time_ratio,
                position: align_event_with_route(time_ratio, &metrics),
            }
        })
        .collect();

    Ok(Json(aligned))
}
