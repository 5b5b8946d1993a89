//! Web layer — HTTP handlers and routing
//!
//! Server-rendered pages for the public site and the admin panel:
//! - Home page with gallery filters and lightbox
//! - Theme mode switching
//! - Enquiry submission
//! - Admin login, post creation/deletion, enquiry listing
//! - Embedded static assets and local uploads

pub mod admin;
pub mod compare;
pub mod contact;
pub mod flash;
pub mod home;
pub mod state;
pub mod static_files;
pub mod templates;

#[cfg(test)]
mod tests;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the complete router with middleware
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin", get(admin::panel))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/gallery", post(admin::create_post))
        .route("/admin/gallery/{id}/delete", post(admin::delete_post));

    Router::new()
        .route("/", get(home::home_page))
        .route("/theme", post(home::set_theme))
        .route("/enquiries", post(contact::submit_enquiry))
        .merge(admin_routes)
        .route("/assets/{*path}", get(static_files::serve_asset))
        .route("/uploads/{name}", get(static_files::serve_upload))
        .fallback(static_files::not_found_page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wrap rendered HTML in a response, consuming the flash cookie when one
/// was displayed
pub(crate) fn page(html: String, clear_flash: bool) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8");
    if clear_flash {
        builder = builder.header(header::SET_COOKIE, flash::Flash::clear_cookie());
    }
    builder
        .body(Body::from(html))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
