//! Map projection: converts between screen pixels and lat/lon within the
//! planning area.
//!
//! A fixed rectangular bounding box maps linearly onto the viewport. No
//! projection distortion beyond linear scaling is modeled. North is at the
//! top of the screen, so the y axis is inverted relative to latitude.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use gcs_core::constants::{MAP_MAX_LAT, MAP_MAX_LON, MAP_MIN_LAT, MAP_MIN_LON};
use gcs_core::types::GeoCoordinate;

/// Geographic bounding box of the planning map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            min_lat: MAP_MIN_LAT,
            max_lat: MAP_MAX_LAT,
            min_lon: MAP_MIN_LON,
            max_lon: MAP_MAX_LON,
        }
    }
}

impl MapBounds {
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Convert a screen point (pixels, origin top-left) to a geographic
    /// coordinate for the given viewport size.
    pub fn screen_to_geo(&self, point: DVec2, viewport: DVec2) -> GeoCoordinate {
        let lon = self.min_lon + (point.x / viewport.x) * self.lon_span();
        let lat = self.max_lat - (point.y / viewport.y) * self.lat_span();
        GeoCoordinate::new(lat, lon)
    }

    /// Convert a geographic coordinate to a screen point for the given
    /// viewport size.
    pub fn geo_to_screen(&self, coord: GeoCoordinate, viewport: DVec2) -> DVec2 {
        DVec2::new(
            ((coord.lon - self.min_lon) / self.lon_span()) * viewport.x,
            ((self.max_lat - coord.lat) / self.lat_span()) * viewport.y,
        )
    }
}
