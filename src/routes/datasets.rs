use std::collections::{BTreeMap, HashSet};

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::timeline::{self, EventFilter};
use crate::state::AppState;
use crate::types::event::{Event, EventType, TIMESTAMP_FORMAT};

const RECENT_EVENT_COUNT: usize = 5;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/datasets", get(list_datasets))
        .route("/api/datasets/:id/events", get(dataset_events))
        .route("/api/dashboard", get(dashboard))
}

#[derive(Debug, Serialize)]
struct DatasetSummary {
    id: String,
    name: String,
    video: String,
    waypoints: usize,
    events: usize,
    total_duration_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct EventsQuery {
    types: Option<String>,
    min_confidence: Option<f64>,
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Serialize)]
struct EventsResponse {
    dataset: String,
    total: usize,
    matched: usize,
    available_types: Vec<EventType>,
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    dataset: Option<String>,
}

#[derive(Debug, Serialize)]
struct DashboardResponse {
    dataset: String,
    total_events: usize,
    critical_events: usize,
    mean_confidence: Option<f64>,
    counts: BTreeMap<EventType, usize>,
    active_models: usize,
    recent_events: Vec<Event>,
}

async fn list_datasets(State(state): State<AppState>) -> Json<Vec<DatasetSummary>> {
    let summaries = state
        .catalog()
        .datasets()
        .iter()
        .map(|d| DatasetSummary {
            id: d.id.clone(),
            name: d.name.clone(),
            video: d.video.clone(),
            waypoints: d.waypoints.len(),
            events: d.events.len(),
            total_duration_seconds: d.total_duration,
        })
        .collect();
    Json(summaries)
}

async fn dataset_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<EventsQuery>,
) -> Result<Json<EventsResponse>, AppError> {
    let dataset = state.dataset(&id)?;
    let filter = build_filter(&params)?;
    let events = timeline::filter_events(&dataset.events, &filter);

    Ok(Json(EventsResponse {
        dataset: dataset.id.clone(),
        total: dataset.events.len(),
        matched: events.len(),
        available_types: timeline::distinct_types(&dataset.events),
        events,
    }))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let dataset = match params.dataset.as_deref() {
        Some(id) => state.dataset(id)?,
        None => state
            .catalog()
            .default_dataset()
            .ok_or_else(|| AppError::Internal("No datasets loaded".to_string()))?,
    };

    let counts = timeline::type_counts(&dataset.events);
    let critical_events = [EventType::RedSignal, EventType::PersonInTrack, EventType::Obstacle]
        .iter()
        .map(|t| counts.get(t).copied().unwrap_or(0))
        .sum();

    Ok(Json(DashboardResponse {
        dataset: dataset.id.clone(),
        total_events: dataset.events.len(),
        critical_events,
        mean_confidence: timeline::mean_confidence(&dataset.events),
        counts,
        active_models: state.catalog().models().iter().filter(|m| m.enabled).count(),
        recent_events: timeline::recent(&dataset.events, RECENT_EVENT_COUNT),
    }))
}

fn build_filter(params: &EventsQuery) -> Result<EventFilter, AppError> {
    let mut types = HashSet::new();
    if let Some(raw) = params.types.as_deref() {
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let event_type = EventType::from_str(name).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid event type: {}. Use RED_SIGNAL, PERSON_IN_TRACK, OBSTACLE, SPEED_LIMIT or WARNING",
                    name
                ))
            })?;
            types.insert(event_type);
        }
    }

    let min_confidence = params.min_confidence.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(AppError::BadRequest(format!(
            "Invalid min_confidence: {}. Must be between 0 and 1",
            min_confidence
        )));
    }

    let from = params.from.as_deref().map(parse_timestamp).transpose()?;
    let to = params.to.as_deref().map(parse_timestamp).transpose()?;
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(AppError::BadRequest(
                "'from' must not be later than 'to'".to_string(),
            ));
        }
    }

    Ok(EventFilter {
        types,
        min_confidence,
        from,
        to,
    })
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid timestamp: {}. Expected YYYY-MM-DD HH:MM:SS",
            raw
        ))
    })
}
