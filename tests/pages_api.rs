//! End-to-end tests for the informational pages.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use users_service::api::{create_router, AppState};

async fn get(uri: &str) -> (StatusCode, String) {
    let response = create_router(AppState::new())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_page() {
    assert_eq!(get("/").await, (StatusCode::OK, "Home page".to_string()));
}

#[tokio::test]
async fn about_page() {
    assert_eq!(get("/about").await, (StatusCode::OK, "About Page".to_string()));
}

#[tokio::test]
async fn other_paths_fall_through_to_404() {
    let (status, _) = get("/contact").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn about_page_with_trailing_slash() {
    assert_eq!(get("/about/").await, (StatusCode::OK, "About Page".to_string()));
}
