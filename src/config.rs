use std::time::Duration;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cache_ttl: Duration,
    pub max_cached_assets: usize,
    pub overpass_url: String,
    pub overpass_min_interval: Duration,
    pub eviction_interval: Duration,
    pub session_ttl: Duration,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            cache_ttl: Duration::from_secs(30 * 60),
            max_cached_assets: 10_000,
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            overpass_min_interval: Duration::from_millis(2000),
            eviction_interval: Duration::from_secs(300),
            session_ttl: Duration::from_secs(30 * 60),
            static_dir: "assets/web".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env_parse("PORT").unwrap_or(defaults.port);

        let cache_ttl = env_parse("CACHE_TTL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        let max_cached_assets =
            env_parse("MAX_CACHED_ASSETS").unwrap_or(defaults.max_cached_assets);

        let overpass_url = std::env::var("OVERPASS_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.overpass_url);

        let overpass_min_interval = env_parse("OVERPASS_MIN_INTERVAL_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.overpass_min_interval);

        // Zero falls back to the default interval.
        let eviction_interval = env_parse::<u64>("EVICTION_INTERVAL_SECONDS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.eviction_interval);

        let session_ttl = env_parse("SESSION_TTL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.session_ttl);

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.static_dir);

        Self {
            port,
            cache_ttl,
            max_cached_assets,
            overpass_url,
            overpass_min_interval,
            eviction_interval,
            session_ttl,
            static_dir,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
