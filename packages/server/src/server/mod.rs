// HTTP server setup (Axum + embedded form)
pub mod app;
pub mod checks;
pub mod routes;
pub mod static_files;

pub use app::*;
