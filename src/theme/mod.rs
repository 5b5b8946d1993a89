//! Theme and routing state
//!
//! The active service mode (aluminium or painting) drives theming and
//! content filtering. It persists per visitor in the `app_mode` cookie
//! and defaults to aluminium. Navigation targets — URL fragments and the
//! "return to" values carried by forms — resolve to one of two views:
//! anything under the reserved admin prefix is the admin view, everything
//! else is the home view with an optional in-page anchor. Resolution also
//! sanitizes the target so redirects can never leave the site.

use crate::models::ServiceMode;

/// Cookie key the selected mode persists under
pub const MODE_COOKIE: &str = "app_mode";

/// Cookie key for the admin session token
pub const SESSION_COOKIE: &str = "admin_session";

/// Reserved prefix selecting the admin view
pub const ADMIN_PREFIX: &str = "/admin";

/// Delay before scrolling to an in-page anchor after a view switch, so
/// the freshly rendered view has laid out
pub const ANCHOR_SCROLL_DELAY_MS: u64 = 100;

/// Mode cookie lifetime (one year)
const MODE_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Admin,
}

/// Where a navigation target lands within its view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landing {
    /// Scroll to the top of the page
    Top,
    /// Scroll the named element into view
    Anchor(String),
}

/// Extract one cookie value from a `Cookie` request header
pub fn cookie_value(header: Option<&str>, name: &str) -> Option<String> {
    let header = header?;
    for cookie in header.split(';') {
        let cookie = cookie.trim();
        if let Some(rest) = cookie.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Active mode for a request, defaulting to aluminium
pub fn mode_from_cookies(header: Option<&str>) -> ServiceMode {
    cookie_value(header, MODE_COOKIE)
        .and_then(|value| ServiceMode::from_str(&value))
        .unwrap_or_default()
}

/// `Set-Cookie` value persisting a mode change
pub fn mode_cookie(mode: ServiceMode) -> String {
    format!(
        "{MODE_COOKIE}={}; Path=/; Max-Age={MODE_COOKIE_MAX_AGE}; SameSite=Lax",
        mode.as_str()
    )
}

/// `Set-Cookie` value establishing an admin session
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the admin session
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Resolve a navigation target to its view and landing position.
///
/// Targets arrive as fragments (`#gallery`, `#/admin`), as paths
/// (`/admin`), or as bare anchor ids; a leading `#` is ignored. The
/// empty target, the root and the admin root land at the top; any other
/// home target is an in-page anchor, reduced to identifier-safe
/// characters.
pub fn resolve(target: &str) -> (View, Landing) {
    let t = target.trim();
    let t = t.strip_prefix('#').unwrap_or(t);

    if t.starts_with(ADMIN_PREFIX) || t == "admin" {
        return (View::Admin, Landing::Top);
    }
    if t.is_empty() || t == "/" {
        return (View::Home, Landing::Top);
    }

    let id: String = t
        .trim_start_matches('/')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() {
        (View::Home, Landing::Top)
    } else {
        (View::Home, Landing::Anchor(id))
    }
}

/// The view a navigation target selects
pub fn view_for(target: &str) -> View {
    resolve(target).0
}

/// Rebuild a sanitized same-site URL for a navigation target.
///
/// Used for post-action redirects (theme toggle, form submission) so a
/// caller-supplied "return to" value can never point off-site.
pub fn redirect_url(target: &str) -> String {
    match resolve(target) {
        (View::Admin, _) => ADMIN_PREFIX.to_string(),
        (View::Home, Landing::Top) => "/".to_string(),
        (View::Home, Landing::Anchor(id)) => format!("/#{id}"),
    }
}
