use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use carenet_portal::router::build_router;
use carenet_portal::state::AppState;
use carenet_testing::server::TestServer;

/// Spawn a real portal (empty store) on an ephemeral port.
pub async fn spawn_portal() -> TestServer {
    TestServer::spawn(build_router(AppState::default())).await
}

/// Stub portal that serves a fixed `/api/config` body and counts hits.
pub async fn spawn_config_stub(body: serde_json::Value) -> (TestServer, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = (body, Arc::clone(&hits));
    let router = Router::new()
        .route(
            "/api/config",
            get(
                |State((body, hits)): State<(serde_json::Value, Arc<AtomicUsize>)>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(body)
                },
            ),
        )
        .with_state(state);
    (TestServer::spawn(router).await, hits)
}

/// Stub portal whose `/api/config` always answers 500.
pub async fn spawn_broken_config_stub() -> TestServer {
    let router = Router::new().route(
        "/api/config",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    TestServer::spawn(router).await
}

/// A base URL with nothing listening behind it.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
