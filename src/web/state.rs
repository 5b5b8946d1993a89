//! Application state and request guards

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::config::{Config, UploadConfig};
use crate::services::{AdminSessions, EnquiryService, GalleryService};
use crate::store::DynContentStore;
use crate::theme;
use crate::web::templates::Templates;

/// Shared services for all handlers
#[derive(Clone)]
pub struct AppState {
    pub gallery: Arc<GalleryService>,
    pub enquiries: Arc<EnquiryService>,
    pub sessions: Arc<AdminSessions>,
    pub templates: Arc<Templates>,
    pub store: DynContentStore,
    pub upload_config: Arc<UploadConfig>,
}

impl AppState {
    /// Wire the services over the active store
    pub fn new(store: DynContentStore, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            gallery: GalleryService::shared(store.clone()),
            enquiries: EnquiryService::shared(store.clone()),
            sessions: Arc::new(AdminSessions::new(config.admin.password.clone())),
            templates: Arc::new(Templates::new()?),
            store,
            upload_config: Arc::new(config.upload.clone()),
        })
    }
}

/// The `Cookie` header of a request, if any
pub fn cookie_header(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}

/// An authenticated admin request
///
/// Extraction succeeds when the session cookie names a live token; every
/// other request is bounced to the admin login view.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub token: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok());
        match theme::cookie_value(cookies, theme::SESSION_COOKIE) {
            Some(token) if state.sessions.is_valid(&token) => Ok(AdminUser { token }),
            _ => Err(Redirect::to(theme::ADMIN_PREFIX)),
        }
    }
}

/// Internal error rendered as a plain 500 page
///
/// Handlers degrade remote failures into explicit page states; this only
/// covers the cases nothing can recover from, like a template that fails
/// to render.
#[derive(Debug)]
pub struct PageError(pub anyhow::Error);

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Something went wrong</h1><p>Please try again later.</p>".to_string()),
        )
            .into_response()
    }
}
