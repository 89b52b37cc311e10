use serde::{Deserialize, Serialize};

/// Envelope returned by the map catalog endpoint. Only `data` is read; the
/// service's other top-level fields are ignored.
#[derive(Debug, Deserialize)]
pub struct MapsResponse {
    pub data: Vec<MapDescriptor>
}

/// Remote-sourced record describing one playable map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapDescriptor {
    /// Splash-image URL for the map
    pub splash: String,

    /// Whether the map is currently in the active rotation pool
    pub in_rotation: bool
}
