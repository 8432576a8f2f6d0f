//! Axum route handlers for the page API.
//!
//! Pages are assembled at startup; handlers only look them up.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::content::assembler::{PageKind, ViewModel};
use crate::state::AppState;
use crate::theme::Theme;

#[derive(Debug, Serialize)]
pub struct PageListResponse {
    pub pages: Vec<&'static str>,
    pub default: &'static str,
}

/// GET /api/v1/pages
pub async fn handle_list_pages(State(state): State<AppState>) -> Json<PageListResponse> {
    Json(PageListResponse {
        pages: state.catalog.keys(),
        default: PageKind::Profile.key(),
    })
}

/// GET /api/v1/page
pub async fn handle_default_page(State(state): State<AppState>) -> Json<ViewModel> {
    Json(state.catalog.page(PageKind::Profile).clone())
}

/// GET /api/v1/page/*path
///
/// Unrecognised paths fall back to the profile page.
pub async fn handle_get_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Json<ViewModel> {
    let page = PageKind::resolve(&path);
    tracing::debug!(path = %path, page = page.key(), "Resolved page");
    Json(state.catalog.page(page).clone())
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<Theme> {
    Json(state.theme.as_ref().clone())
}
