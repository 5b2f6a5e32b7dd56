/// Portal service configuration loaded from environment variables.
///
/// The map-provider values (`ARCGIS_API_KEY`, `ARCGIS_PORTAL_URL`) are
/// deliberately not part of this struct — the config handler reads them
/// from the environment on every request so they are never cached.
#[derive(Debug)]
pub struct PortalConfig {
    /// TCP port for the HTTP server (default 3001). Env var: `PORT`.
    pub port: u16,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
        }
    }
}
