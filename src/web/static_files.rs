//! Static file serving
//!
//! Stylesheet and page script ship embedded in the binary under
//! `/assets/`. `/uploads/` serves files the memory driver wrote to the
//! local upload directory; with the remote driver uploads resolve to the
//! bucket's public URLs and never hit this route.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::web::state::AppState;

/// Embedded stylesheet and scripts
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*"]
struct Assets;

/// GET /assets/{*path} — embedded site assets
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(content) => build_response(&path, content.data.into_owned()),
        None => not_found(),
    }
}

/// GET /uploads/{name} — locally stored uploads (memory driver)
pub async fn serve_upload(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    // Uploads are flat uuid names; anything path-like is rejected.
    if name.contains('/') || name.contains("..") || name.contains('\\') {
        return not_found();
    }

    let path = state.upload_config.path.join(&name);
    match tokio::fs::read(&path).await {
        Ok(contents) => build_response(&name, contents),
        Err(_) => not_found(),
    }
}

/// Fallback for unknown routes
pub async fn not_found_page(State(state): State<AppState>) -> Response {
    let context = crate::web::templates::Templates::base_context(Default::default(), None);
    match state.templates.render("404.html", &context) {
        Ok(html) => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(_) => not_found(),
    }
}

fn build_response(path: &str, contents: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, get_content_type(path))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Content type from the file extension
fn get_content_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext.to_lowercase().as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}
