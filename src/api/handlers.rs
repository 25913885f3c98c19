//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::extract::JsonBody;
use crate::error::ApiError;
use crate::metrics;
use crate::store::{User, UserStore};
use crate::utils::parse_id;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The users collection.
    pub users: Arc<UserStore>,
}

impl AppState {
    /// Create state around the seeded users collection.
    pub fn new() -> Self {
        Self::with_store(UserStore::seeded())
    }

    /// Create state around an explicit store.
    pub fn with_store(store: UserStore) -> Self {
        Self {
            users: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of create and update requests.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    /// New name; absent or `null` stores no name.
    #[serde(default)]
    pub name: Option<String>,
}

// === Static pages ===

/// `GET /`
pub async fn home() -> &'static str {
    "Home page"
}

/// `GET /about`
pub async fn about() -> &'static str {
    "About Page"
}

// === Users ===

/// `GET /users` - the whole collection in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// `POST /users` - append a user with the next id.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> impl IntoResponse {
    let user = state.users.create(payload.name).await;
    metrics::inc_users_created();
    info!(id = user.id, name = ?user.name, "User created");

    (StatusCode::CREATED, Json(user))
}

/// `GET /users/:id`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.users.get(parse_id(&id)).await {
        Some(user) => Ok(Json(user)),
        None => Err(not_found(&id)),
    }
}

/// `PUT /users/:id` - overwrite the name of the first matching user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .update(parse_id(&id), payload.name)
        .await
        .ok_or_else(|| not_found(&id))?;

    metrics::inc_users_updated();
    info!(id = user.id, name = ?user.name, "User updated");
    Ok(Json(user))
}

/// `DELETE /users/:id` - remove every user carrying the id.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    if !state.users.delete(parse_id(&id)).await {
        return Err(not_found(&id));
    }

    metrics::inc_users_deleted();
    info!(id = %id, "User deleted");
    Ok(format!("User with id {} deleted", id))
}

fn not_found(raw_id: &str) -> ApiError {
    metrics::inc_user_lookups_missed();
    debug!(id = %raw_id, "No user with requested id");
    ApiError::UserNotFound
}
