use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::error::AppError;
use crate::overpass::OverpassQuery;
use crate::state::AppState;
use crate::types::asset::{AssetCategory, RailwayAsset};
use crate::types::geo::{BoundingBox, UK_BOUNDS};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/assets", get(list_assets))
        .route("/api/assets/cache", get(cache_stats).delete(clear_cache))
}

#[derive(Debug, Deserialize)]
struct AssetsQuery {
    south: Option<f64>,
    west: Option<f64>,
    north: Option<f64>,
    east: Option<f64>,
    types: Option<String>,
    /// Bypass cached results and query Overpass again.
    #[serde(default)]
    refresh: bool,
}

#[derive(Debug, Serialize)]
struct AssetsResponse {
    bbox: BoundingBox,
    categories: Vec<AssetCategory>,
    cached: bool,
    count: usize,
    assets: Arc<Vec<RailwayAsset>>,
}

#[derive(Debug, Serialize)]
struct CacheResponse {
    #[serde(flatten)]
    stats: CacheStats,
    categories: BTreeMap<AssetCategory, usize>,
}

async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetsQuery>,
) -> Result<Json<AssetsResponse>, AppError> {
    let bbox = parse_bbox(&params)?;
    let categories = parse_categories(params.types.as_deref())?;

    let query = OverpassQuery::new(bbox).with_all(categories.iter().copied());
    let lookup = state
        .assets()
        .get_or_fetch(&bbox, &categories, params.refresh, || {
            tracing::info!(
                "Fetching railway assets for {} ({} categories)",
                bbox.cache_fragment(),
                categories.len()
            );
            state.overpass().fetch(&query)
        })
        .await?;

    if lookup.cached {
        tracing::info!("Using cached railway assets ({} assets)", lookup.assets.len());
    }

    Ok(Json(AssetsResponse {
        bbox,
        categories,
        cached: lookup.cached,
        count: lookup.assets.len(),
        assets: lookup.assets,
    }))
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheResponse> {
    Json(CacheResponse {
        stats: state.assets().stats(),
        categories: state.assets().category_counts(),
    })
}

async fn clear_cache(State(state): State<AppState>) -> Json<CacheStats> {
    state.assets().clear();
    Json(state.assets().stats())
}

/// All four edges or none; none means the whole of Great Britain.
fn parse_bbox(params: &AssetsQuery) -> Result<BoundingBox, AppError> {
    let bbox = match (params.south, params.west, params.north, params.east) {
        (None, None, None, None) => UK_BOUNDS,
        (Some(south), Some(west), Some(north), Some(east)) => BoundingBox {
            south,
            west,
            north,
            east,
        },
        _ => {
            return Err(AppError::BadRequest(
                "Bounding box needs all of south, west, north and east".to_string(),
            ))
        }
    };

    if !bbox.is_valid() {
        return Err(AppError::BadRequest(format!(
            "Invalid bounding box: {}",
            bbox.to_overpass()
        )));
    }
    Ok(bbox)
}

fn parse_categories(raw: Option<&str>) -> Result<Vec<AssetCategory>, AppError> {
    let mut categories = Vec::new();
    for name in raw.unwrap_or_default().split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let category = AssetCategory::from_str(name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown asset type: {}", name)))?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    if categories.is_empty() {
        categories.extend(AssetCategory::DEFAULT);
    }
    categories.sort();
    Ok(categories)
}
