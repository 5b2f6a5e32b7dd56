use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use carenet_core::health::{healthz, readyz};
use carenet_core::middleware::request_id_layer;

use crate::handlers::care_request::{create_care_request, get_care_request, get_care_requests};
use crate::handlers::config::get_config;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The kiosk is served from a different origin; every route stays CORS-open
    // with no allow-list.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Config
        .route("/api/config", get(get_config))
        // Care requests
        .route("/api/care-requests", post(create_care_request))
        .route("/api/care-requests", get(get_care_requests))
        .route("/api/care-requests/{id}", get(get_care_request))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors)
        .with_state(state)
}
