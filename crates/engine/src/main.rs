//! Questlog Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questlog_engine::api;
use questlog_engine::infrastructure::config::EngineConfig;
use questlog_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questlog_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Questlog Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(storage = %config.storage, "Configuration loaded");

    let app = Arc::new(App::from_config(&config).await?);

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config.cors_allowed_origins.as_deref().and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(allowed_origins, "No usable CORS origins, CORS disabled");
        return None;
    }

    Some(cors.allow_origin(origins))
}
