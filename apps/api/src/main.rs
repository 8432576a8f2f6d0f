mod config;
mod content;
mod errors;
mod models;
mod routes;
mod state;
mod theme;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::catalog::PageCatalog;
use crate::content::classifier::CategoryClassifier;
use crate::content::profile_data::StaticProfile;
use crate::routes::build_router;
use crate::state::AppState;
use crate::theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // All pages are assembled before the listener opens; any content error is fatal.
    let catalog = CategoryClassifier::builtin()
        .and_then(|classifier| PageCatalog::build(&StaticProfile, &classifier))
        .inspect_err(|e| error!("Content initialization failed: {e}"))?;
    info!("Page catalog ready: {:?}", catalog.keys());

    let state = AppState {
        catalog: Arc::new(catalog),
        theme: Arc::new(Theme::default()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(config.bind_addr, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
