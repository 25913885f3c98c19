//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    about, create_user, delete_user, get_user, home, list_users, update_user, AppState,
};
use crate::metrics::track_metrics;

/// The served application: [`api_router`] with trailing slashes trimmed
/// before routing, so `/users/` and `/about/` reach their routes.
pub type App = NormalizePath<Router>;

/// Create the full application: static pages at `/`, users at `/users`.
pub fn create_router(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}

/// Routes and per-route middleware, without path normalization.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(pages_router())
        .nest("/users", users_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(track_metrics)),
        )
        .with_state(state)
}

/// Informational pages.
pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
}

/// User collection CRUD, relative to its mount point.
pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}
