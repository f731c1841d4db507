use std::sync::Arc;

use crate::config::Config;
use crate::notify::ToastCenter;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document store. Default: in-memory; HTTP against the
    /// external resume API when RESUME_STORE_URL is set.
    pub store: Arc<dyn DocumentStore>,
    /// Process-wide toast queue, initialized once at startup.
    pub toasts: ToastCenter,
}
