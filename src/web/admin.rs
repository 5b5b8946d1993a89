//! Admin panel
//!
//! Everything behind the shared-password gate: the login view, the two
//! panel tabs (gallery management and the read-only enquiry list), post
//! creation with staged multi-image upload, and deletion. The session is
//! an in-memory token; restarting the server logs everyone out.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::models::{catalog, Enquiry, GalleryItem, MediaKind, NewGalleryItem, ServiceMode};
use crate::theme;
use crate::web::flash::Flash;
use crate::web::state::{cookie_header, AdminUser, AppState, PageError};
use crate::web::templates::Templates;

/// Panel query: which tab is active
#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    pub tab: Option<String>,
}

/// GET /admin — login view, or the panel for a live session
pub async fn panel(
    State(state): State<AppState>,
    Query(query): Query<PanelQuery>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    let cookies = cookie_header(&headers);
    let mode = theme::mode_from_cookies(cookies);
    let flash = Flash::from_cookies(cookies);

    let authenticated = theme::cookie_value(cookies, theme::SESSION_COOKIE)
        .map(|token| state.sessions.is_valid(&token))
        .unwrap_or(false);

    if !authenticated {
        let context = Templates::base_context(mode, flash.as_ref());
        let html = state.templates.render("admin/login.html", &context)?;
        return Ok(super::page(html, flash.is_some()));
    }

    let tab = match query.tab.as_deref() {
        Some("enquiries") => "enquiries",
        _ => "posts",
    };

    let mut context = Templates::base_context(mode, flash.as_ref());
    context.insert("tab", tab);
    context.insert("workers", catalog::WORKERS);
    context.insert(
        "aluminium_services",
        &catalog::service_titles(Some(ServiceMode::Aluminium)),
    );
    context.insert(
        "painting_services",
        &catalog::service_titles(Some(ServiceMode::Painting)),
    );

    match tab {
        "enquiries" => match state.enquiries.list().await {
            Ok(enquiries) => {
                context.insert("enquiries_error", &false);
                context.insert("enquiries", &enquiries);
            }
            Err(_) => {
                context.insert("enquiries_error", &true);
                context.insert("enquiries", &Vec::<Enquiry>::new());
            }
        },
        _ => match state.gallery.list().await {
            Ok(posts) => {
                context.insert("posts_error", &false);
                context.insert("posts", &posts);
            }
            Err(_) => {
                context.insert("posts_error", &true);
                context.insert("posts", &Vec::<GalleryItem>::new());
            }
        },
    }

    let html = state.templates.render("admin/panel.html", &context)?;
    Ok(super::page(html, flash.is_some()))
}

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// POST /admin/login — compare the shared password, issue a session
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    match state.sessions.login(&form.password) {
        Some(token) => (
            [(SET_COOKIE, theme::session_cookie(&token))],
            Redirect::to(theme::ADMIN_PREFIX),
        ),
        None => (
            [(SET_COOKIE, Flash::error("Invalid Password").set_cookie())],
            Redirect::to(theme::ADMIN_PREFIX),
        ),
    }
}

/// POST /admin/logout — revoke the session token
pub async fn logout(State(state): State<AppState>, admin: AdminUser) -> impl IntoResponse {
    state.sessions.logout(&admin.token);
    (
        [(SET_COOKIE, theme::clear_session_cookie())],
        Redirect::to(theme::ADMIN_PREFIX),
    )
}

/// POST /admin/gallery — create a post from the multipart form
///
/// Fields and staged image files arrive together. Required fields are
/// checked before anything touches the store; staged files are then
/// uploaded in order and the first one that sticks becomes the cover.
pub async fn create_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, PageError> {
    let mut title = String::new();
    let mut category = ServiceMode::default();
    let mut service = String::new();
    let mut author = String::new();
    let mut description = String::new();
    let mut staged: Vec<(String, String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await?;
                // An untouched file input still submits one empty part
                if !data.is_empty() {
                    staged.push((filename, content_type, data.to_vec()));
                }
            }
            "title" => title = field.text().await?,
            "category" => {
                category = ServiceMode::from_str(&field.text().await?).unwrap_or_default()
            }
            "service" => service = field.text().await?,
            "author" => author = field.text().await?,
            "description" => description = field.text().await?,
            _ => {}
        }
    }

    let mut input = NewGalleryItem {
        title,
        category,
        service,
        author,
        date: Utc::now().to_rfc3339(),
        // Staged filenames stand in for the upload URLs so the full
        // validation (including "at least one image") runs before any
        // remote call.
        image_urls: staged.iter().map(|(name, _, _)| name.clone()).collect(),
        kind: MediaKind::Image,
        description,
    };

    if let Err(e) = input.validate() {
        return Ok(flash_redirect(Flash::error(e.to_string())));
    }

    let mut uploaded = Vec::new();
    for (filename, content_type, data) in staged {
        if !state.upload_config.is_type_allowed(&content_type) {
            tracing::warn!("skipping {filename}: type {content_type} not allowed");
            continue;
        }
        if data.len() as u64 > state.upload_config.max_file_size {
            tracing::warn!("skipping {filename}: larger than the upload limit");
            continue;
        }
        match state.store.upload_media(&filename, &content_type, data).await {
            Ok(url) => uploaded.push(url),
            Err(e) => tracing::error!("upload of {filename} failed: {e:#}"),
        }
    }

    if uploaded.is_empty() {
        return Ok(flash_redirect(Flash::error(
            "No image could be uploaded. Please try again.",
        )));
    }
    input.image_urls = uploaded;

    let flash = match state.gallery.create(&input).await {
        Ok(()) => Flash::success("Post added successfully!"),
        Err(e) => Flash::error(e.to_string()),
    };
    Ok(flash_redirect(flash))
}

/// POST /admin/gallery/{id}/delete — remove a post
///
/// Deleting an identifier that is already gone is reported as success;
/// only a store failure is surfaced.
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let flash = if state.gallery.delete(&id).await {
        Flash::success("Post deleted.")
    } else {
        Flash::error("Failed to delete the post. Please try again.")
    };
    flash_redirect(flash)
}

fn flash_redirect(flash: Flash) -> impl IntoResponse {
    (
        [(SET_COOKIE, flash.set_cookie())],
        Redirect::to(theme::ADMIN_PREFIX),
    )
}
