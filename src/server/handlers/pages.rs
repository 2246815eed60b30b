use axum::{
    body::Body,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::path::PathBuf;
use log::error;

use crate::content::INDEX_PAGE;
use crate::render::RenderOutcome;
use crate::server::app::AppState;
use crate::server::router::{resolve, RouteTarget};

/// Fallback handler: everything that is not an explicitly routed static
/// asset goes through the path resolver and on to the renderer.
pub async fn dispatch(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let target = match resolve(uri.path()) {
        Some(target) => target,
        None => return not_found(),
    };

    match target {
        RouteTarget::TopPage { page } => render_page(&state, None, &page),
        RouteTarget::CategoryIndex { category } => {
            render_page(&state, Some(&category), INDEX_PAGE)
        }
        RouteTarget::CategoryPage { category, page } => {
            render_page(&state, Some(&category), &page)
        }
        RouteTarget::CategoryImage { category, image } => {
            serve_image(&state, PathBuf::from(category).join(image))
        }
        RouteTarget::PageImage { category, page, image } => {
            serve_image(&state, PathBuf::from(category).join(page).join(image))
        }
    }
}

/// Render a page and map the outcome onto an HTTP response
fn render_page(state: &AppState, category: Option<&str>, page: &str) -> Response {
    match state.renderer.render_page(category, page) {
        Ok(RenderOutcome::Rendered(html)) => Html(html).into_response(),
        Ok(RenderOutcome::NotFound) => not_found(),
        Err(e) => {
            error!(
                "Failed to render {}{}: {}",
                category.map(|c| format!("{}/", c)).unwrap_or_default(),
                page,
                e
            );
            server_error(&e.to_string())
        }
    }
}

/// Stream an image from the content root
fn serve_image(state: &AppState, relative: PathBuf) -> Response {
    match state.renderer.store().read_bytes(&relative) {
        Ok(Some(bytes)) => {
            let mime_type = mime_guess::from_path(&relative).first_or_octet_stream();
            Response::builder()
                .header(header::CONTENT_TYPE, mime_type.as_ref())
                .body(Body::from(bytes))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Ok(None) => not_found(),
        Err(e) => {
            error!("Failed to read image {}: {}", relative.display(), e);
            server_error(&e.to_string())
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn server_error(message: &str) -> Response {
    let body = format!(
        "<!DOCTYPE html>\n<html><head><title>Server error</title></head>\n\
         <body><h1>Server error</h1><p>{}</p></body></html>",
        html_escape::encode_text(message)
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}
