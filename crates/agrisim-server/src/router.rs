//! Axum router construction for the AgriSim API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the AgriSim server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/environmental-data` -- environmental bundle for a coordinate
/// - `POST /api/simulate` -- run one farm simulation
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/environmental-data", get(handlers::environmental_data))
        .route("/api/simulate", post(handlers::simulate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
