use geo::{coord, Coord};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// View settings for a plot map.
///
/// Deserializes from JSON with every field optional, falling back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial center as `[lon, lat]`.
    /// Default: San Juan, Argentina.
    pub initial_center: [f64; 2],

    /// Initial zoom level.
    /// Default: 13
    pub initial_zoom: u8,

    /// Zoom used when centering on a geometry whose bounds cannot be fit,
    /// such as a single point.
    /// Default: 15
    pub fallback_zoom: u8,

    /// Highest zoom level the tile source serves.
    /// Default: 20
    pub max_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: [-68.49125, -31.65394],
            initial_zoom: 13,
            fallback_zoom: 15,
            max_zoom: 20,
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn initial_center(&self) -> Coord {
        coord! { x: self.initial_center[0], y: self.initial_center[1] }
    }

    pub fn initial_zoom(&self) -> u8 {
        self.initial_zoom.min(self.max_zoom)
    }

    pub fn fallback_zoom(&self) -> u8 {
        self.fallback_zoom.min(self.max_zoom)
    }
}
