//! Home page
//!
//! One request renders the whole landing page: hero, services, the
//! before/after comparison, the filtered gallery (with its lightbox
//! overlay when an item is selected), the team section and the contact
//! form. The gallery is re-fetched on every request and filtered here,
//! in-process; the store is never asked to filter.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use crate::models::{catalog, GalleryItem, ServiceMode};
use crate::services::GalleryFilter;
use crate::theme;
use crate::web::compare;
use crate::web::flash::Flash;
use crate::web::state::{cookie_header, AppState, PageError};
use crate::web::templates::Templates;

/// Query parameters of the home page: gallery filters, the selected
/// lightbox item, and a shared divider position. Everything is optional
/// and tolerant of garbage.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
    pub author: Option<String>,
    pub service: Option<String>,
    /// Identifier of the item opened in the lightbox
    pub item: Option<String>,
    /// Divider position of the before/after widget
    pub split: Option<String>,
}

/// GET / — the landing page
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    let cookies = cookie_header(&headers);
    let mode = theme::mode_from_cookies(cookies);
    let flash = Flash::from_cookies(cookies);

    let filter = GalleryFilter::from_query(
        mode,
        query.category.as_deref(),
        query.author.as_deref(),
        query.service.as_deref(),
    );

    let mut context = Templates::base_context(mode, flash.as_ref());
    context.insert("services", catalog::services_for(mode));
    context.insert("team", catalog::TEAM);
    context.insert("workers", catalog::WORKERS);
    context.insert(
        "compare",
        &compare::section(query.split.as_deref().and_then(|s| s.parse().ok())),
    );

    insert_filter_context(&mut context, &filter);

    match state.gallery.list().await {
        Ok(items) => {
            let filtered: Vec<&GalleryItem> = filter.apply(&items);
            context.insert("gallery_error", &false);
            context.insert("items", &filtered);

            // Lightbox: look the selected item up in the full list so a
            // direct link works regardless of the active filters.
            let selected = query
                .item
                .as_deref()
                .and_then(|id| items.iter().find(|item| item.id == id));
            if let Some(item) = selected {
                context.insert("lightbox", item);
                context.insert("lightbox_images", &item.images());
            }
        }
        Err(_) => {
            context.insert("gallery_error", &true);
            context.insert("items", &Vec::<GalleryItem>::new());
        }
    }

    let html = state.templates.render("home.html", &context)?;
    Ok(super::page(html, flash.is_some()))
}

/// Filter state the template needs: current selections, the dependent
/// service options, and prebuilt category links (which deliberately drop
/// the service selection — changing category resets it to "all").
fn insert_filter_context(context: &mut tera::Context, filter: &GalleryFilter) {
    let author = filter.author.as_deref().unwrap_or("all");
    let service = filter.service.as_deref().unwrap_or("all");

    context.insert("filter_category", filter.category.as_str());
    context.insert("filter_author", author);
    context.insert("filter_service", service);
    context.insert("service_options", &filter.service_options());

    let category_links: Vec<_> = [
        ("all", "All"),
        (ServiceMode::Aluminium.as_str(), "Aluminium"),
        (ServiceMode::Painting.as_str(), "Painting"),
    ]
    .into_iter()
    .map(|(value, label)| {
        json!({
            "label": label,
            "active": value == filter.category.as_str(),
            "url": format!(
                "/?category={}&author={}#gallery",
                value,
                urlencoding::encode(author)
            ),
        })
    })
    .collect();
    context.insert("category_links", &category_links);

    let query = format!(
        "category={}&author={}&service={}",
        filter.category.as_str(),
        urlencoding::encode(author),
        urlencoding::encode(service)
    );
    context.insert("filter_query", &query);
    context.insert("retry_url", &format!("/?{query}#gallery"));
}

/// Form body of a mode change
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Explicit mode to select; missing means toggle
    pub mode: Option<String>,
    /// Where the visitor was, restored after the redirect
    pub back: Option<String>,
}

/// POST /theme — toggle or set the service mode
///
/// Persists the selection in the mode cookie and bounces back to a
/// sanitized version of where the visitor came from.
pub async fn set_theme(headers: HeaderMap, Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let current = theme::mode_from_cookies(cookie_header(&headers));
    let mode = form
        .mode
        .as_deref()
        .and_then(ServiceMode::from_str)
        .unwrap_or_else(|| current.toggled());

    let back = form.back.unwrap_or_default();
    (
        [(axum::http::header::SET_COOKIE, theme::mode_cookie(mode))],
        Redirect::to(&theme::redirect_url(&back)),
    )
}
