use std::sync::Arc;

use crate::content::catalog::PageCatalog;
use crate::theme::Theme;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PageCatalog>,
    pub theme: Arc<Theme>,
}
