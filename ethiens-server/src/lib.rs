//! # Ethiens Server
//!
//! HTTP front of the Ethiens movie metadata resolver. Titles are searched and
//! details fetched from TMDB, with an IMDb mirror as fallback; both answer in
//! the same canonical JSON shape.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};
pub use routes::create_app;
