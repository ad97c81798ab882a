use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Route must have at least 2 waypoints (got {0})")]
    InsufficientWaypoints(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Invalid timestamp '{value}' on event {event_id}")]
    InvalidTimestamp { event_id: String, value: String },
    #[error("Dataset {dataset}: {source}")]
    InvalidRoute {
        dataset: String,
        #[source]
        source: RouteError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OverpassError {
    #[error("Overpass request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Rate limit exceeded. Please wait before requesting more assets")]
    RateLimited,
    #[error("Overpass API error: {status} {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Overpass(#[from] OverpassError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Route(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Overpass(OverpassError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Overpass(_) => StatusCode::BAD_GATEWAY,
            AppError::Data(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
