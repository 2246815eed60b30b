use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fs;
use std::path::Path;
use log::{debug, error};

use crate::server::app::AppState;

/// Serve `/favicon.ico` from the static assets directory
pub async fn favicon(State(state): State<AppState>) -> Response {
    serve_static(&state.static_dir, "favicon.ico", "image/vnd.microsoft.icon")
}

/// Serve `/robots.txt` from the static assets directory
pub async fn robots(State(state): State<AppState>) -> Response {
    serve_static(&state.static_dir, "robots.txt", "text/plain; charset=utf-8")
}

fn serve_static(static_dir: &Path, name: &str, content_type: &str) -> Response {
    let path = static_dir.join(name);
    match fs::read(&path) {
        Ok(content) => {
            debug!("Serving static asset {}", path.display());
            Response::builder()
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(content))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
        Err(e) => {
            error!("Failed to read static asset {}: {}", path.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
