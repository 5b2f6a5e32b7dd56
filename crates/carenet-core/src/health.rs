use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. The portal has no external
/// backing services, so ready is the same as alive.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
