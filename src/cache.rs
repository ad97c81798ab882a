use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::types::asset::{AssetCategory, RailwayAsset};
use crate::types::geo::BoundingBox;

pub type AssetSet = Arc<Vec<RailwayAsset>>;

/// Expiring store of Overpass results keyed by area and requested categories.
/// Identical lookups that miss at the same time share one upstream fetch.
#[derive(Clone)]
pub struct AssetCache {
    entries: Arc<DashMap<String, CachedAssets>>,
    pending: Arc<DashMap<String, Arc<OnceCell<AssetSet>>>>,
    ttl: Duration,
    max_assets: usize,
}

#[derive(Debug, Clone)]
pub struct AssetLookup {
    pub assets: AssetSet,
    /// False when this lookup started or joined an upstream fetch.
    pub cached: bool,
}

struct CachedAssets {
    assets: AssetSet,
    inserted_at: Instant,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_assets: usize,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

/// Bbox rounded to three decimals plus the sorted category names, so
/// requests for the same area in any order share an entry.
pub fn cache_key(bbox: &BoundingBox, categories: &[AssetCategory]) -> String {
    let names: BTreeSet<&str> = categories.iter().map(AssetCategory::as_str).collect();
    format!(
        "{}_{}",
        bbox.cache_fragment(),
        names.into_iter().collect::<Vec<_>>().join(",")
    )
}

impl AssetCache {
    pub fn new(ttl: Duration, max_assets: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            pending: Arc::new(DashMap::new()),
            ttl,
            max_assets,
        }
    }

    pub fn get(
        &self,
        bbox: &BoundingBox,
        categories: &[AssetCategory],
    ) -> Option<AssetSet> {
        let key = cache_key(bbox, categories);
        if self
            .entries
            .remove_if(&key, |_, cached| self.is_expired(cached))
            .is_some()
        {
            tracing::info!("Cached assets expired for key: {}", key);
            return None;
        }
        self.entries
            .get(&key)
            .map(|cached| cached.assets.clone())
            .filter(|assets| !assets.is_empty())
    }

    /// Serves from the cache unless `refresh` is set, otherwise runs `fetch`.
    /// Concurrent callers for the same key wait on a single `fetch`; if it
    /// fails the next waiter retries.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        bbox: &BoundingBox,
        categories: &[AssetCategory],
        refresh: bool,
        fetch: F,
    ) -> Result<AssetLookup, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RailwayAsset>, E>>,
    {
        if !refresh {
            if let Some(assets) = self.get(bbox, categories) {
                return Ok(AssetLookup {
                    assets,
                    cached: true,
                });
            }
        }

        let key = cache_key(bbox, categories);
        let cell = self
            .pending
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let result = cell
            .get_or_try_init(|| async {
                let assets = Arc::new(fetch().await?);
                self.insert(bbox, categories, assets.clone());
                Ok::<_, E>(assets)
            })
            .await
            .cloned();

        self.pending
            .remove_if(&key, |_, pending| Arc::ptr_eq(pending, &cell));

        result.map(|assets| AssetLookup {
            assets,
            cached: false,
        })
    }

    pub fn contains(&self, bbox: &BoundingBox, categories: &[AssetCategory]) -> bool {
        let key = cache_key(bbox, categories);
        self.entries
            .get(&key)
            .is_some_and(|cached| !self.is_expired(&cached))
    }

    /// Returns false when the result set is empty or over the size cap and
    /// was not stored.
    pub fn insert(
        &self,
        bbox: &BoundingBox,
        categories: &[AssetCategory],
        assets: AssetSet,
    ) -> bool {
        if assets.is_empty() {
            tracing::debug!("Empty asset result, not caching");
            return false;
        }
        if assets.len() > self.max_assets {
            tracing::warn!(
                "Dataset too large ({} assets, limit {}), not caching",
                assets.len(),
                self.max_assets
            );
            return false;
        }

        let key = cache_key(bbox, categories);
        tracing::info!("Cached {} railway assets (key: {})", assets.len(), key);
        self.entries.insert(
            key,
            CachedAssets {
                assets,
                inserted_at: Instant::now(),
                stored_at: Utc::now(),
            },
        );
        true
    }

    pub fn clear(&self) {
        self.entries.clear();
        tracing::info!("Cleared railway asset cache");
    }

    pub fn evict_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, cached| !self.is_expired(cached));
        let evicted = before.saturating_sub(self.entries.len());
        tracing::info!(
            "Asset cache eviction complete. Evicted {}, current size: {}",
            evicted,
            self.entries.len()
        );
        evicted
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats {
            total_entries: 0,
            total_assets: 0,
            oldest: None,
            newest: None,
        };
        for entry in self.entries.iter() {
            stats.total_entries += 1;
            stats.total_assets += entry.assets.len();
            stats.oldest = Some(stats.oldest.map_or(entry.stored_at, |t| t.min(entry.stored_at)));
            stats.newest = Some(stats.newest.map_or(entry.stored_at, |t| t.max(entry.stored_at)));
        }
        stats
    }

    /// Number of cached assets per filter category, across all live entries.
    pub fn category_counts(&self) -> BTreeMap<AssetCategory, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.iter() {
            if self.is_expired(&entry) {
                continue;
            }
            for asset in entry.assets.iter() {
                if let Some(category) = asset.asset_type.category() {
                    *counts.entry(category).or_default() += 1;
                }
            }
        }
        counts
    }

    fn is_expired(&self, cached: &CachedAssets) -> bool {
        cached.inserted_at.elapsed() >= self.ttl
    }
}
