mod config;
mod document;
mod errors;
mod notify;
mod routes;
mod state;
mod store;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notify::ToastCenter;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{DocumentStore, HttpDocumentStore, MemoryDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jianli API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the document store backend
    let store: Arc<dyn DocumentStore> = match &config.resume_store_url {
        Some(url) => {
            info!("Document store: external resume API at {url}");
            Arc::new(HttpDocumentStore::new(url.clone()))
        }
        None => {
            info!("Document store: in-memory (RESUME_STORE_URL not set)");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    // Process-wide toast queue
    let toasts = ToastCenter::new();

    // Build app state
    let state = AppState {
        config: config.clone(),
        store,
        toasts,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
