mod assistant;
mod auth;
mod config;
mod errors;
mod matching;
mod models;
mod records;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::matching::KeywordOverlapScorer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{JsonFileBackend, LocalStore, MemoryBackend, StorageBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matchdesk v{}", env!("CARGO_PKG_VERSION"));

    // Local store: JSON document when STORE_PATH is set, memory otherwise
    let backend: Arc<dyn StorageBackend> = match &config.store_path {
        Some(path) => Arc::new(JsonFileBackend::new(path)),
        None => {
            warn!("STORE_PATH not set; records will not survive a restart");
            Arc::new(MemoryBackend)
        }
    };
    let store = LocalStore::open(backend).await?;

    if config.seed_demo_data {
        if store.seed_demo_data().await? {
            info!("Demo data seeded");
        }
    } else if store.read(|s| s.users.is_empty()).await {
        warn!("Seeding disabled and no users stored; nobody will be able to log in");
    }

    let sessions = SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes));

    // Build app state
    let state = AppState {
        store: Arc::new(store),
        sessions: Arc::new(sessions),
        scorer: Arc::new(KeywordOverlapScorer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
