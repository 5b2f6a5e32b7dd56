//! Fetch-then-initialize sequencing for the map view.

use carenet_domain::config::AppConfig;

use crate::config_api::ConfigApi;
use crate::error::KioskError;
use crate::map::{MapSdk, MapView, MapViewInit};

/// Phase of the map bootstrap.
///
/// `Failed` is terminal for the session — there is no retry and no re-fetch.
/// `ConfigLoaded` is where the machine stops when the fetched config carries
/// no usable API key; the map is never initialized from such a config.
#[derive(Debug)]
pub enum MapPhase {
    Loading,
    ConfigLoaded(AppConfig),
    MapReady(MapView),
    Failed(KioskError),
}

impl MapPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::MapReady(_))
    }
}

impl Default for MapPhase {
    fn default() -> Self {
        Self::Loading
    }
}

/// Drives `Loading → ConfigLoaded → MapReady`.
#[derive(Default)]
pub struct MapBootstrap {
    phase: MapPhase,
}

impl MapBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &MapPhase {
        &self.phase
    }

    /// Run the bootstrap: one config fetch, then at most one SDK
    /// initialization. Calling again after the machine has left `Loading`
    /// does nothing — the config is fetched exactly once per session.
    pub async fn run<S: MapSdk>(&mut self, api: &ConfigApi, sdk: &S) {
        if !matches!(self.phase, MapPhase::Loading) {
            return;
        }

        let config = match api.fetch().await {
            Ok(config) => config,
            Err(e) => {
                self.phase = MapPhase::Failed(e);
                return;
            }
        };

        if !config.has_api_key() {
            tracing::warn!("config carries no usable API key; map stays uninitialized");
            self.phase = MapPhase::ConfigLoaded(config);
            return;
        }
        // has_api_key above guarantees a non-empty key.
        let api_key = config.arcgis_api_key.clone().unwrap_or_default();

        self.phase = match sdk.create_view(MapViewInit::with_defaults(api_key)) {
            Ok(view) => MapPhase::MapReady(view),
            Err(e) => MapPhase::Failed(KioskError::MapInit(e)),
        };
    }
}
