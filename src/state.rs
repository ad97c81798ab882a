use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::cache::AssetCache;
use crate::config::Config;
use crate::data::{Catalog, Dataset};
use crate::error::{AppError, DataError};
use crate::overpass::OverpassClient;
use crate::pipeline::geometry::RouteMetrics;
use crate::pipeline::ticker::Playback;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    catalog: Arc<Catalog>,
    metrics: Arc<DashMap<String, Arc<RouteMetrics>>>,
    sessions: Arc<DashMap<Uuid, PlaybackSession>>,
    assets: AssetCache,
    overpass: OverpassClient,
}

#[derive(Debug, Clone)]
pub struct PlaybackSession {
    pub dataset_id: String,
    pub playback: Playback,
    last_access: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DataError> {
        let catalog = Catalog::load()?;
        let assets = AssetCache::new(config.cache_ttl, config.max_cached_assets);
        let overpass = OverpassClient::new(config.overpass_url.clone(), config.overpass_min_interval);

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            metrics: Arc::new(DashMap::new()),
            sessions: Arc::new(DashMap::new()),
            assets,
            overpass,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dataset(&self, id: &str) -> Result<&Dataset, AppError> {
        self.catalog
            .dataset(id)
            .ok_or_else(|| AppError::NotFound(format!("dataset {}", id)))
    }

    /// Metrics are computed on first use and reused for the process lifetime.
    pub fn route_metrics(&self, dataset_id: &str) -> Result<Arc<RouteMetrics>, AppError> {
        let dataset = self.dataset(dataset_id)?;
        if let Some(metrics) = self.metrics.get(&dataset.id) {
            return Ok(metrics.clone());
        }

        let metrics = Arc::new(RouteMetrics::compute(&dataset.waypoints)?);
        tracing::debug!(
            "Computed route metrics for {} ({} waypoints, {:.0} m)",
            dataset.id,
            dataset.waypoints.len(),
            metrics.total()
        );
        let entry = self
            .metrics
            .entry(dataset.id.clone())
            .or_insert(metrics);
        Ok(entry.clone())
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    pub fn overpass(&self) -> &OverpassClient {
        &self.overpass
    }

    pub fn insert_session(&self, dataset_id: String, playback: Playback) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            PlaybackSession {
                dataset_id,
                playback,
                last_access: Instant::now(),
            },
        );
        id
    }

    /// Runs `f` against a session under its shard lock and returns a snapshot.
    pub fn with_session<F>(&self, id: &Uuid, f: F) -> Option<PlaybackSession>
    where
        F: FnOnce(&mut Playback, Instant),
    {
        let mut session = self.sessions.get_mut(id)?;
        let now = Instant::now();
        f(&mut session.playback, now);
        session.last_access = now;
        Some(session.clone())
    }

    pub fn remove_session(&self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn evict_idle_sessions(&self, ttl: Duration) {
        let now = Instant::now();
        self.sessions
            .retain(|_, session| now.duration_since(session.last_access) < ttl);
        tracing::info!("Session eviction complete. Current sessions: {}", self.sessions.len());
    }
}
