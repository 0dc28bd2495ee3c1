//! Layout configuration.

use hexmap_geometry::{Orientation, Projection};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default hex circumradius in pixels.
pub const DEFAULT_HEX_SIZE: f64 = 20.0;

/// Default minimum hex distance between cells of different clusters.
pub const DEFAULT_MIN_GAP: u64 = 3;

/// Default number of rings the origin search expands through.
pub const DEFAULT_MAX_SEARCH_RINGS: u64 = 150;

/// Default q-offset multiplier for clusters placed after search exhaustion.
pub const DEFAULT_FALLBACK_SPACING: i64 = 20;

/// Largest accepted `min_gap`.
pub const MAX_MIN_GAP: u64 = 1 << 16;

/// Largest accepted `max_search_rings`.
pub const MAX_SEARCH_RINGS_LIMIT: u64 = 1 << 20;

/// Largest accepted `fallback_spacing`; keeps fallback offsets inside i64.
pub const MAX_FALLBACK_SPACING: i64 = 1 << 24;

/// Configuration for one layout run.
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Hex circumradius in pixels
    pub hex_size: f64,
    /// Grid orientation for pixel projection
    pub orientation: Orientation,
    /// Minimum distance between hexes of different clusters
    pub min_gap: u64,
    /// Rings searched for a free cluster origin before falling back
    pub max_search_rings: u64,
    /// Fallback origin is (placed_clusters * fallback_spacing, 0)
    pub fallback_spacing: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            orientation: Orientation::PointyTop,
            min_gap: DEFAULT_MIN_GAP,
            max_search_rings: DEFAULT_MAX_SEARCH_RINGS,
            fallback_spacing: DEFAULT_FALLBACK_SPACING,
        }
    }
}

impl LayoutConfig {
    pub fn with_hex_size(mut self, hex_size: f64) -> Self {
        self.hex_size = hex_size;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_min_gap(mut self, min_gap: u64) -> Self {
        self.min_gap = min_gap;
        self
    }

    pub fn with_max_search_rings(mut self, rings: u64) -> Self {
        self.max_search_rings = rings;
        self
    }

    pub fn with_fallback_spacing(mut self, spacing: i64) -> Self {
        self.fallback_spacing = spacing;
        self
    }

    /// Projection used for centroids and bounds.
    pub fn projection(&self) -> Projection {
        Projection::new(self.orientation, self.hex_size)
    }

    /// Reject values that would break the layout invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.hex_size.is_finite() || self.hex_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "hex size must be positive and finite, got {}",
                self.hex_size
            )));
        }
        // A zero gap would let clusters share cells.
        if self.min_gap == 0 {
            return Err(Error::InvalidConfig("min gap must be at least 1".into()));
        }
        if self.min_gap > MAX_MIN_GAP {
            return Err(Error::InvalidConfig(format!(
                "min gap must be at most {MAX_MIN_GAP}, got {}",
                self.min_gap
            )));
        }
        if self.max_search_rings > MAX_SEARCH_RINGS_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max search rings must be at most {MAX_SEARCH_RINGS_LIMIT}, got {}",
                self.max_search_rings
            )));
        }
        if self.fallback_spacing <= 0 || self.fallback_spacing > MAX_FALLBACK_SPACING {
            return Err(Error::InvalidConfig(format!(
                "fallback spacing must be in 1..={MAX_FALLBACK_SPACING}, got {}",
                self.fallback_spacing
            )));
        }
        Ok(())
    }
}
