//! HTTP API module: static pages and the users collection.

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{api_router, create_router, App};
