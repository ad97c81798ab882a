use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::pipeline::ticker::Playback;
use crate::state::{AppState, PlaybackSession};
use crate::types::geo::GeoPoint;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/playback", post(create_session))
        .route("/api/playback/:id", get(session_status).delete(delete_session))
        .route("/api/playback/:id/play", post(play))
        .route("/api/playback/:id/pause", post(pause))
        .route("/api/playback/:id/seek", post(seek))
}

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    dataset: String,
    #[serde(default = "default_speed")]
    speed: f64,
    #[serde(default)]
    looping: bool,
    #[serde(default)]
    autoplay: bool,
}

fn default_speed() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct SeekRequest {
    time: f64,
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    session_id: Uuid,
    dataset: String,
    current_time: f64,
    duration: f64,
    ratio: f64,
    speed: f64,
    looping: bool,
    playing: bool,
    position: GeoPoint,
}

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    if !req.speed.is_finite() || req.speed <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "Invalid speed: {}. Must be a positive number",
            req.speed
        )));
    }

    let dataset = state.dataset(&req.dataset)?;
    let dataset_id = dataset.id.clone();
    let mut playback = Playback::new(dataset.total_duration, req.speed, req.looping);
    if req.autoplay {
        playback.play(std::time::Instant::now());
    }

    let session_id = state.insert_session(dataset_id.clone(), playback);
    tracing::info!("Created playback session {} for {}", session_id, dataset_id);

    let response = snapshot(&state, session_id, |_, _| {})?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn session_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    snapshot(&state, id, |playback, now| {
        playback.advance(now);
    })
    .map(Json)
}

async fn play(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    snapshot(&state, id, |playback, now| playback.play(now)).map(Json)
}

async fn pause(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    snapshot(&state, id, |playback, now| playback.pause(now)).map(Json)
}

async fn seek(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SeekRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    if !req.time.is_finite() {
        return Err(AppError::BadRequest("Seek time must be a finite number".to_string()));
    }
    snapshot(&state, id, |playback, now| {
        playback.advance(now);
        playback.seek(req.time);
    })
    .map(Json)
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.remove_session(&id) {
        tracing::info!("Removed playback session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

fn snapshot<F>(state: &AppState, id: Uuid, f: F) -> Result<SessionResponse, AppError>
where
    F: FnOnce(&mut Playback, std::time::Instant),
{
    let PlaybackSession {
        dataset_id,
        playback,
        ..
    } = state.with_session(&id, f).ok_or_else(|| session_not_found(id))?;
    let metrics = state.route_metrics(&dataset_id)?;

    Ok(SessionResponse {
        session_id: id,
        position: playback.position(&metrics),
        dataset: dataset_id,
        current_time: playback.current_time(),
        duration: playback.duration(),
        ratio: playback.ratio(),
        speed: playback.speed(),
        looping: playback.is_looping(),
        playing: playback.is_playing(),
    })
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("playback session {}", id))
}
