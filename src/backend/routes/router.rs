/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router and adds the
 * shared layers.
 *
 * # Layers
 *
 * - `TraceLayer` - One span per request
 * - `CorsLayer` - Permissive CORS so a separately served frontend can call the API
 */

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /api/health` - Liveness check with live topic and pending token counts
/// - API routes, see `configure_api_routes`
/// - Fallback: JSON `404` for unknown routes
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/api/health", get(health));

    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, BackendError> {
    Ok(Json(json!({
        "status": "ok",
        "topics": state.hub.topic_count(),
        "pending_reset_tokens": state.tokens.len()?,
    })))
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}
