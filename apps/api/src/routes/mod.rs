pub mod health;
pub mod notifications;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::document::handlers as documents;
use crate::state::AppState;
use crate::workflow::handlers as workflows;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume document API
        .route(
            "/api/v1/documents",
            get(documents::handle_list).post(documents::handle_import),
        )
        .route(
            "/api/v1/documents/classify",
            post(documents::handle_classify),
        )
        .route("/api/v1/documents/convert", post(documents::handle_convert))
        .route(
            "/api/v1/documents/:id",
            get(documents::handle_get).delete(documents::handle_delete),
        )
        .route(
            "/api/v1/documents/:id/render",
            get(documents::handle_render),
        )
        // Workflow API
        .route("/api/v1/workflow/steps", get(workflows::handle_steps))
        .route("/api/v1/workflow/status", post(workflows::handle_status))
        // Notifications
        .route("/api/v1/notifications", get(notifications::list_handler))
        .route(
            "/api/v1/notifications/:id",
            delete(notifications::dismiss_handler),
        )
        .with_state(state)
}
