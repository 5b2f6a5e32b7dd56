//! Map SDK seam.
//!
//! Basemap rendering is owned by the third-party SDK; the kiosk only hands it
//! an initialization object. The API key travels inside [`MapViewInit`] rather
//! than through any process-wide SDK state.

/// Default basemap style.
pub const DEFAULT_BASEMAP: &str = "streets-vector";
/// Default view center, longitude/latitude (Hefei, China).
pub const DEFAULT_CENTER: [f64; 2] = [117.2808, 31.8639];
/// Default zoom level (city view).
pub const DEFAULT_ZOOM: u8 = 10;

/// Everything the SDK needs to construct a view, passed explicitly per call.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewInit {
    pub api_key: String,
    pub basemap: String,
    pub center: [f64; 2],
    pub zoom: u8,
}

impl MapViewInit {
    /// Initialization parameters with the fixed defaults and the given key.
    pub fn with_defaults(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            basemap: DEFAULT_BASEMAP.to_owned(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Handle to an initialized map view.
#[derive(Debug, Clone)]
pub struct MapView {
    pub basemap: String,
    pub center: [f64; 2],
    pub zoom: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum MapSdkError {
    #[error("invalid API key format")]
    InvalidApiKey,
}

/// Constructor seam for map views. Production code uses [`EsriSdk`]; tests
/// substitute their own implementations to force failures.
pub trait MapSdk {
    fn create_view(&self, init: MapViewInit) -> Result<MapView, MapSdkError>;
}

/// SDK binding used by the kiosk binary. Validates the key shape before
/// constructing the view; rendering itself happens outside this process.
#[derive(Debug, Clone, Default)]
pub struct EsriSdk;

impl MapSdk for EsriSdk {
    fn create_view(&self, init: MapViewInit) -> Result<MapView, MapSdkError> {
        if init.api_key.is_empty() || init.api_key.chars().any(char::is_whitespace) {
            return Err(MapSdkError::InvalidApiKey);
        }
        Ok(MapView {
            basemap: init.basemap,
            center: init.center,
            zoom: init.zoom,
        })
    }
}
