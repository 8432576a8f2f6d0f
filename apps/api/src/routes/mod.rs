pub mod health;

use axum::{routing::get, Router};

use crate::content::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/pages", get(handlers::handle_list_pages))
        .route("/api/v1/page", get(handlers::handle_default_page))
        .route("/api/v1/page/", get(handlers::handle_default_page))
        .route("/api/v1/page/*path", get(handlers::handle_get_page))
        .route("/api/v1/theme", get(handlers::handle_get_theme))
        .with_state(state)
}
