use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::render::PageRenderer;
use crate::server::handlers;
use crate::utils::error::BoxResult;

/// App state shared with all handlers
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub static_dir: PathBuf,
}

/// Create the axum router serving the content root
pub fn create_app(config: &Config) -> BoxResult<Router> {
    let state = AppState {
        renderer: Arc::new(PageRenderer::new(config)?),
        static_dir: config.static_path(),
    };

    let router = Router::new()
        .route("/favicon.ico", get(handlers::favicon))
        .route("/robots.txt", get(handlers::robots))
        .fallback(handlers::dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CatchPanicLayer::new());

    Ok(router)
}
