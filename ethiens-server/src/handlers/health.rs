use axum::{extract::State, response::Json};
use serde_json::{Value, json};
use tracing::debug;

use crate::AppState;

pub async fn ping_handler(State(state): State<AppState>) -> Json<Value> {
    debug!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "primary_provider": state.resolver.has_primary(),
    }))
}
