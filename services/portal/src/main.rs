use std::path::Path;

use tracing::info;

use carenet_portal::config::PortalConfig;
use carenet_portal::router::build_router;
use carenet_portal::state::AppState;

#[tokio::main]
async fn main() {
    // `.env` lives one level above the service checkout; a missing file is fine.
    let _ = dotenv::from_path(Path::new("..").join(".env"));
    carenet_core::tracing::init_tracing();

    let config = PortalConfig::from_env();
    let state = AppState::default();

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("portal service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
