use axum::{extract::State, routing::get, Json, Router};

use crate::state::AppState;
use crate::types::event::{Model, UploadBatch};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/models", get(list_models))
        .route("/api/uploads", get(list_uploads))
}

async fn list_models(State(state): State<AppState>) -> Json<Vec<Model>> {
    Json(state.catalog().models().to_vec())
}

async fn list_uploads(State(state): State<AppState>) -> Json<Vec<UploadBatch>> {
    Json(state.catalog().uploads().to_vec())
}
