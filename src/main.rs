use axum::Router;
use railai_rs::{config::Config, routes, state::AppState};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railai_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Failed to load demo catalog: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} datasets, {} models",
        state.catalog().datasets().len(),
        state.catalog().models().len()
    );

    // Expired asset sets and idle playback sessions
    let eviction_state = state.clone();
    let eviction_interval = config.eviction_interval;
    let session_ttl = config.session_ttl;
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(eviction_interval).await;
            eviction_state.assets().evict_expired();
            eviction_state.evict_idle_sessions(session_ttl);
        }
    });

    let serve_dir = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(format!("{}/index.html", config.static_dir)));

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::datasets::router())
        .merge(routes::geometry::router())
        .merge(routes::playback::router())
        .merge(routes::assets::router())
        .merge(routes::catalog::router())
        .fallback_service(serve_dir)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Rail AI listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Datasets: GET http://{}/api/datasets", addr);
    tracing::info!("Route position: GET http://{}/api/routes/:id/position", addr);
    tracing::info!("Railway assets: GET http://{}/api/assets (via {})", addr, config.overpass_url);

    axum::serve(listener, app).await.unwrap();
}
