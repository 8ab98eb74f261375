use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    AppState,
    handlers::{health, movie},
};

pub const SEARCH: &str = "/movie/tmdb/search";
pub const DETAIL: &str = "/movie/tmdb/{identifier}";
pub const PING: &str = "/ping";

/// Movie metadata routes. `search` is a static segment and wins over the
/// identifier capture.
pub fn create_movie_router() -> Router<AppState> {
    Router::new()
        .route(SEARCH, get(movie::search_movies_handler))
        .route(DETAIL, get(movie::movie_details_handler))
}

pub fn create_app(state: AppState) -> Router {
    let cors_layer = cors_layer(&state);

    Router::new()
        .route(PING, get(health::ping_handler))
        .merge(create_movie_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

// Allow-list from configuration, any origin when none is configured.
fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config().cors;
    let allow_origin = if cors.is_permissive() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
