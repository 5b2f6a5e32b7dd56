use axum::Json;

use carenet_domain::config::AppConfig;

// ── GET /api/config ──────────────────────────────────────────────────────────

/// Expose the map-provider configuration to the kiosk.
///
/// Values are read from the environment on every request and passed through
/// verbatim — unset variables serialize as `null` and empty strings stay
/// empty. The kiosk decides whether the key is usable.
pub async fn get_config() -> Json<AppConfig> {
    Json(AppConfig {
        arcgis_api_key: std::env::var("ARCGIS_API_KEY").ok(),
        arcgis_portal_url: std::env::var("ARCGIS_PORTAL_URL").ok(),
    })
}
