//! In-memory user collection.
//!
//! The collection is an ordered `Vec<User>` behind a [`RwLock`]. Every
//! operation holds the lock for its whole find-then-mutate sequence, so two
//! concurrent mutations never observe a half-updated collection.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

/// A single user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric id, assigned as `len + 1` at creation time.
    pub id: i64,
    /// Display name. `None` is omitted from the JSON form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Create a user record.
    pub fn new(id: i64, name: Option<String>) -> Self {
        Self { id, name }
    }
}

/// Ordered, in-memory collection of [`User`] records.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two startup records.
    pub fn seeded() -> Self {
        Self::from_users(vec![
            User::new(1, Some("TestUser1".to_string())),
            User::new(2, Some("TestUser2".to_string())),
        ])
    }

    /// Create a store holding exactly `users`, in order.
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Snapshot of the collection in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Append a new record with `id = len + 1`.
    ///
    /// Ids are not checked for collisions: after a deletion the next id can
    /// repeat one still in use.
    pub async fn create(&self, name: Option<String>) -> User {
        let mut users = self.users.write().await;
        let id = users.len() as i64 + 1;
        let user = User::new(id, name);
        users.push(user.clone());
        debug!(id, count = users.len(), "user appended");
        user
    }

    /// First record whose id equals `id`.
    ///
    /// `None` for `id` (an unparsable path segment) never matches.
    pub async fn get(&self, id: Option<i64>) -> Option<User> {
        let id = id?;
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Overwrite the name of the first record whose id equals `id`.
    ///
    /// A `None` name clears the stored name. Returns the mutated record.
    pub async fn update(&self, id: Option<i64>, name: Option<String>) -> Option<User> {
        let id = id?;
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.name = name;
        Some(user.clone())
    }

    /// Remove every record whose id equals `id`.
    ///
    /// Returns `false` when no record matched.
    pub async fn delete(&self, id: Option<i64>) -> bool {
        let Some(id) = id else {
            return false;
        };
        let mut users = self.users.write().await;
        if !users.iter().any(|u| u.id == id) {
            return false;
        }
        let before = users.len();
        users.retain(|u| u.id != id);
        debug!(id, removed = before - users.len(), "users removed");
        true
    }
}
