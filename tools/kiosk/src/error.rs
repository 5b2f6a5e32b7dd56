use crate::map::MapSdkError;

/// Kiosk failures, each carrying its user-facing message as the `Display`
/// text. `ConfigFetch` and `MapInit` are deliberately distinct so the user
/// can tell a dead backend from a bad key.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    /// `GET /api/config` returned non-2xx or could not be reached.
    #[error("Failed to load map configuration. Please check if the backend server is running.")]
    ConfigFetch(#[source] FetchCause),

    /// The map SDK rejected the initialization parameters.
    #[error("Failed to initialize map. Please check your ArcGIS API key.")]
    MapInit(#[source] MapSdkError),
}

/// Low-level reason a config fetch failed. Logged, never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum FetchCause {
    #[error("unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
