//! Minimal HTTP users service.
//!
//! Serves two informational pages and an in-memory users collection with
//! create/read/update/delete over JSON:
//!
//! ```text
//! GET    /             -> 200 "Home page"
//! GET    /about        -> 200 "About Page"
//! GET    /users        -> 200 [{"id":1,"name":"TestUser1"}, ...]
//! POST   /users        -> 201 {"id":3,"name":"..."}
//! GET    /users/:id    -> 200 {...} | 404 "User not found"
//! PUT    /users/:id    -> 200 {...} | 404 "User not found"
//! DELETE /users/:id    -> 200 "User with id 3 deleted" | 404 "User not found"
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: The in-memory users collection
//! - [`api`]: HTTP handlers and routing
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
pub use store::{User, UserStore};
