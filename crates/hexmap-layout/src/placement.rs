//! Collision-free cluster placement on the shared grid.
//!
//! Groups are packed as spirals. The first group is anchored at the origin;
//! every later group searches outward ring by ring around the origin for a
//! candidate center whose whole spiral keeps `min_gap` distance from every
//! occupied cell. The search is capped; past the cap a group is parked at a
//! deterministic offset that keeps cells unique but may break the gap.

use std::collections::HashSet;

use hexmap_geometry::{hex_disk, hex_spiral, total_slots_through, AxialCoord, Spiral};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LayoutConfig;

/// How a cluster's origin was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Placement {
    /// First cluster, at the grid origin.
    Anchor,
    /// Found by the expanding-ring search at this ring.
    Searched { ring: u64 },
    /// Search exhausted; uniqueness holds but the gap may not.
    Fallback,
}

impl Placement {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Occupied cells of one layout run.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashSet<AxialCoord>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: AxialCoord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn extend(&mut self, coords: impl IntoIterator<Item = AxialCoord>) {
        self.cells.extend(coords);
    }

    /// Whether every occupied cell is at least `min_gap` steps from `coord`.
    pub fn is_clear(&self, coord: AxialCoord, min_gap: u64) -> bool {
        if min_gap <= 1 {
            return !self.contains(coord);
        }
        let reach = min_gap - 1;
        // Scan whichever side is smaller: the occupied set or the exclusion disk.
        if (self.cells.len() as u64) < total_slots_through(reach) {
            self.cells.iter().all(|c| c.hex_distance(&coord) >= min_gap)
        } else {
            hex_disk(coord, reach).into_iter().all(|c| !self.contains(c))
        }
    }

    /// Whether every cell of `coords` is clear at `min_gap`.
    pub fn fits(&self, coords: impl IntoIterator<Item = AxialCoord>, min_gap: u64) -> bool {
        coords.into_iter().all(|c| self.is_clear(c, min_gap))
    }
}

/// Cells assigned to one group.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGroup {
    pub origin: AxialCoord,
    pub cells: Vec<AxialCoord>,
    pub placement: Placement,
}

/// Places groups one after another, tracking occupancy for a single run.
#[derive(Debug)]
pub struct Placer<'a> {
    config: &'a LayoutConfig,
    occupancy: Occupancy,
    placed: usize,
}

impl<'a> Placer<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            occupancy: Occupancy::new(),
            placed: 0,
        }
    }

    /// Number of groups placed so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Place a group of `count` cells and mark them occupied.
    pub fn place(&mut self, count: usize) -> PlacedGroup {
        let offsets = hex_spiral(AxialCoord::ORIGIN, count);

        let (origin, placement) = if self.placed == 0 {
            (AxialCoord::ORIGIN, Placement::Anchor)
        } else if let Some((origin, ring)) = self.search(&offsets) {
            (origin, Placement::Searched { ring })
        } else {
            let origin = self.fallback(&offsets);
            warn!(
                "No free origin within {} rings for group of {}; falling back to {}",
                self.config.max_search_rings, count, origin
            );
            (origin, Placement::Fallback)
        };

        let cells: Vec<AxialCoord> = offsets.iter().map(|&o| origin + o).collect();
        self.occupancy.extend(cells.iter().copied());
        self.placed += 1;

        debug!(
            "Placed group {} ({} cells) at {} via {:?}",
            self.placed, count, origin, placement
        );

        PlacedGroup {
            origin,
            cells,
            placement,
        }
    }

    /// First candidate, ring by ring around the origin, whose packed cells
    /// all clear the gap.
    fn search(&self, offsets: &[AxialCoord]) -> Option<(AxialCoord, u64)> {
        let min_gap = self.config.min_gap;
        Spiral::rings(AxialCoord::ORIGIN, 1, self.config.max_search_rings)
            .find(|&candidate| {
                self.occupancy
                    .fits(offsets.iter().map(|&o| candidate + o), min_gap)
            })
            .map(|origin| (origin, origin.ring()))
    }

    /// Deterministic parking spot: `(placed * spacing, 0)`, stepped along +q
    /// until no packed cell collides with an occupied one.
    fn fallback(&self, offsets: &[AxialCoord]) -> AxialCoord {
        let spacing = self.config.fallback_spacing;
        let step = AxialCoord::new(spacing, 0);
        let offset = i64::try_from(self.placed).map_or(i64::MAX, |n| spacing.saturating_mul(n));
        let mut origin = AxialCoord::new(offset, 0);
        while offsets.iter().any(|&o| self.occupancy.contains(origin + o)) {
            origin = origin + step;
        }
        origin
    }
}
