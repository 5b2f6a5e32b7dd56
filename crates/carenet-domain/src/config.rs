//! Map-provider configuration exchanged over `GET /api/config`.

use serde::{Deserialize, Serialize};

/// Environment-derived configuration the portal hands to the kiosk.
///
/// Wire format: camelCase keys, `null` for unset environment variables.
/// Values are passed through verbatim — an empty string stays an empty
/// string, so consumers must check [`AppConfig::has_api_key`] before
/// touching the map SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// ArcGIS API key, from `ARCGIS_API_KEY`.
    pub arcgis_api_key: Option<String>,
    /// ArcGIS portal URL, from `ARCGIS_PORTAL_URL`.
    pub arcgis_portal_url: Option<String>,
}

impl AppConfig {
    /// Whether the API key is present and non-empty.
    pub fn has_api_key(&self) -> bool {
        self.arcgis_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
