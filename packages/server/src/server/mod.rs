// HTTP server setup (Axum)
pub mod app;
pub mod routes;
pub mod templates;

pub use app::*;
