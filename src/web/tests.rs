//! Route-level tests for the web layer

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;

use crate::config::Config;
use crate::models::{Enquiry, GalleryItem, NewEnquiry, NewGalleryItem};
use crate::store::{ContentStore, DynContentStore, MemoryStore};
use crate::web::{build_router, AppState};

/// Store whose every call fails, for exercising the degraded paths
struct BrokenStore;

#[async_trait]
impl ContentStore for BrokenStore {
    async fn list_gallery(&self) -> anyhow::Result<Vec<GalleryItem>> {
        Err(anyhow!("unreachable host"))
    }
    async fn insert_gallery(&self, _: &NewGalleryItem) -> anyhow::Result<()> {
        Err(anyhow!("unreachable host"))
    }
    async fn delete_gallery(&self, _: &str) -> anyhow::Result<()> {
        Err(anyhow!("unreachable host"))
    }
    async fn list_enquiries(&self) -> anyhow::Result<Vec<Enquiry>> {
        Err(anyhow!("unreachable host"))
    }
    async fn insert_enquiry(&self, _: &NewEnquiry, _: &str) -> anyhow::Result<()> {
        Err(anyhow!("unreachable host"))
    }
    async fn upload_media(&self, _: &str, _: &str, _: Vec<u8>) -> anyhow::Result<String> {
        Err(anyhow!("unreachable host"))
    }
}

fn server_with(store: DynContentStore) -> TestServer {
    let state = AppState::new(store, &Config::default()).unwrap();
    TestServer::new(build_router(state)).unwrap()
}

fn seeded_server() -> TestServer {
    server_with(Arc::new(MemoryStore::seeded(PathBuf::from("uploads"))))
}

fn set_cookie_values(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(String::from)
        .collect()
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/admin/login")
        .form(&[("password", "sneha123")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let cookie = set_cookie_values(&response)
        .into_iter()
        .find(|c| c.starts_with("admin_session="))
        .expect("login should set the session cookie");
    cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_home_page_renders_populated_gallery() {
    let server = seeded_server();
    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("Sneha Sliding"));
    // seeded aluminium post, visible under the default aluminium mode
    assert!(body.contains("Modern Office Partition"));
    // painting posts are filtered out by the default mode
    assert!(!body.contains("Living Room Makeover"));
}

#[tokio::test]
async fn test_home_page_mode_cookie_switches_content() {
    let server = seeded_server();
    let response = server
        .get("/")
        .add_header(header::COOKIE, HeaderValue::from_static("app_mode=painting"))
        .await;

    let body = response.text();
    assert!(body.contains("Living Room Makeover"));
    assert!(!body.contains("Modern Office Partition"));
}

#[tokio::test]
async fn test_gallery_failure_renders_error_state_with_retry() {
    let server = server_with(Arc::new(BrokenStore));
    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("Failed to load gallery items"));
    assert!(body.contains("Retry"));
    // not silently rendered as "no results"
    assert!(!body.contains("No projects found"));
}

#[tokio::test]
async fn test_empty_gallery_renders_empty_state() {
    let server = server_with(Arc::new(MemoryStore::new(PathBuf::from("uploads"))));
    let response = server.get("/").await;

    let body = response.text();
    assert!(body.contains("No projects found"));
    assert!(!body.contains("Retry"));
}

#[tokio::test]
async fn test_foreign_service_filter_yields_empty_grid() {
    let server = seeded_server();
    let response = server
        .get("/")
        .add_query_params(&[
            ("category", "aluminium"),
            ("service", "Wall Painting"),
        ])
        .await;

    let body = response.text();
    assert!(body.contains("No projects found"));
}

#[tokio::test]
async fn test_lightbox_renders_selected_item() {
    let server = seeded_server();
    let response = server.get("/").add_query_params(&[("item", "1")]).await;

    let body = response.text();
    assert!(body.contains("lightbox"));
    assert!(body.contains("Glass and aluminium partition"));
}

#[tokio::test]
async fn test_theme_post_persists_mode_and_redirects_on_site() {
    let server = seeded_server();
    let response = server
        .post("/theme")
        .form(&[("mode", "painting"), ("back", "#gallery")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("app_mode=painting")));
    assert_eq!(response.headers()[header::LOCATION], "/#gallery");
}

#[tokio::test]
async fn test_theme_toggle_without_explicit_mode() {
    let server = seeded_server();
    let response = server
        .post("/theme")
        .add_header(header::COOKIE, HeaderValue::from_static("app_mode=painting"))
        .form(&[("back", "")])
        .await;

    // toggled away from the current painting mode
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("app_mode=aluminium")));
}

#[tokio::test]
async fn test_enquiry_submission_sets_success_flash() {
    let store = Arc::new(MemoryStore::new(PathBuf::from("uploads")));
    let server = server_with(store.clone());

    let response = server
        .post("/enquiries")
        .form(&[
            ("name", "Asha"),
            ("phone", "+91 90000 00000"),
            ("message", "Need a balcony slider"),
            ("worker", "Santosh Soni"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#contact");
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("flash=success")));

    let saved = store.list_enquiries().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].worker.as_deref(), Some("Santosh Soni"));
}

#[tokio::test]
async fn test_enquiry_store_failure_sets_error_flash() {
    let server = server_with(Arc::new(BrokenStore));
    let response = server
        .post("/enquiries")
        .form(&[
            ("name", "Asha"),
            ("phone", "+91 90000 00000"),
            ("message", "Need a quote"),
            ("worker", ""),
        ])
        .await;

    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("flash=error")));
}

#[tokio::test]
async fn test_flash_is_consumed_on_next_render() {
    let server = seeded_server();
    let response = server
        .get("/")
        .add_header(header::COOKIE, HeaderValue::from_static("flash=success:Enquiry%20sent"))
        .await;

    assert!(response.text().contains("Enquiry sent"));
    // the render clears the one-shot cookie
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("flash=;") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn test_admin_without_session_shows_login_gate() {
    let server = seeded_server();
    let body = server.get("/admin").await.text();
    assert!(body.contains("password"));
    assert!(!body.contains("Manage Gallery"));
}

#[tokio::test]
async fn test_admin_login_rejects_wrong_password() {
    let server = seeded_server();
    let response = server
        .post("/admin/login")
        .form(&[("password", "guess")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("flash=error")));
    assert!(!set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("admin_session=")));
}

#[tokio::test]
async fn test_admin_login_opens_the_panel() {
    let server = seeded_server();
    let cookie = login(&server).await;

    let body = server
        .get("/admin")
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await
        .text();
    assert!(body.contains("Manage Gallery"));
    assert!(body.contains("Modern Office Partition"));
}

#[tokio::test]
async fn test_admin_enquiries_tab_lists_submissions() {
    let store = Arc::new(MemoryStore::new(PathBuf::from("uploads")));
    store
        .insert_enquiry(
            &NewEnquiry {
                name: "Asha".into(),
                phone: "99".into(),
                message: "hi".into(),
                worker: None,
            },
            "2024-05-05T10:00:00Z",
        )
        .await
        .unwrap();
    let server = server_with(store);
    let cookie = login(&server).await;

    let body = server
        .get("/admin")
        .add_query_params(&[("tab", "enquiries")])
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await
        .text();
    assert!(body.contains("Asha"));
}

#[tokio::test]
async fn test_admin_actions_require_a_session() {
    let server = seeded_server();
    let response = server.post("/admin/gallery/1/delete").await;

    // bounced to the login view, nothing deleted
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn test_delete_absent_id_is_noop() {
    let store = Arc::new(MemoryStore::seeded(PathBuf::from("uploads")));
    let server = server_with(store.clone());
    let cookie = login(&server).await;

    let before = store.list_gallery().await.unwrap().len();
    let response = server
        .post("/admin/gallery/no-such-id/delete")
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(set_cookie_values(&response)
        .iter()
        .any(|c| c.starts_with("flash=success")));
    assert_eq!(store.list_gallery().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_delete_removes_post() {
    let store = Arc::new(MemoryStore::seeded(PathBuf::from("uploads")));
    let server = server_with(store.clone());
    let cookie = login(&server).await;

    server
        .post("/admin/gallery/1/delete")
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await;

    assert!(store
        .list_gallery()
        .await
        .unwrap()
        .iter()
        .all(|item| item.id != "1"));
}

#[tokio::test]
async fn test_logout_revokes_the_session() {
    let server = seeded_server();
    let cookie = login(&server).await;

    server
        .post("/admin/logout")
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await;

    let body = server
        .get("/admin")
        .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
        .await
        .text();
    assert!(body.contains("password"));
}

#[tokio::test]
async fn test_embedded_assets_are_served() {
    let server = seeded_server();
    let response = server.get("/assets/site.css").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

#[tokio::test]
async fn test_unknown_route_renders_404() {
    let server = seeded_server();
    let response = server.get("/definitely/not/here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_route_rejects_path_traversal() {
    let server = seeded_server();
    let response = server.get("/uploads/..%2Fconfig.yml").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
