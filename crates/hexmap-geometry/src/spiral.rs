//! Ring-by-ring spiral enumeration of the hex grid.
//!
//! Every cell has a unique spiral index relative to a center. Index 0 is the
//! center itself; ring n > 0 occupies indices `total_slots_through(n - 1)`
//! up to `total_slots_through(n) - 1`.
//!
//! # Ring Walk
//!
//! Ring n starts at the east corner (n, 0) and walks six sides of n cells:
//!
//! ```text
//! side 0: (n, 0)   -> towards (0, n)    step (-1, +1)
//! side 1: (0, n)   -> towards (-n, n)   step (-1,  0)
//! side 2: (-n, n)  -> towards (-n, 0)   step ( 0, -1)
//! side 3: (-n, 0)  -> towards (0, -n)   step (+1, -1)
//! side 4: (0, -n)  -> towards (n, -n)   step (+1,  0)
//! side 5: (n, -n)  -> towards (n, 0)    step ( 0, +1)
//! ```
//!
//! Spiral packing of k cells is the first k indices of this walk, so a packed
//! group is always as round as the grid allows.

use crate::AxialCoord;

/// Unique slot identifier in the spiral enumeration around a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// Center slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-6
    /// Ring 2: indices 7-18
    /// Ring n: indices from total_slots(n-1) to total_slots(n)-1
    pub fn ring(&self) -> u64 {
        if self.0 == 0 {
            return 0;
        }

        // Total slots through ring n = 1 + 3n(n+1)
        let mut low = 1u64;
        let mut high = ((self.0 as f64).sqrt() as u64) + 2;

        while low < high {
            let mid = (low + high) / 2;
            if total_slots_through(mid) <= self.0 {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Offset within the ring (0 to 6n-1 for ring n > 0).
    pub fn offset_in_ring(&self) -> u64 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        self.0 - total_slots_through(ring - 1)
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

/// Total number of slots in ring n.
///
/// - Ring 0: 1 slot (center)
/// - Ring n > 0: 6n slots
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Total slots through ring n (inclusive).
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn total_slots_through(ring: u64) -> u64 {
    1 + 3 * ring * (ring + 1)
}

/// Iterator over spiral coordinates around a center.
#[derive(Debug, Clone)]
pub struct Spiral {
    center: AxialCoord,
    current: u64,
    limit: Option<u64>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting at `center`.
    pub fn new(center: AxialCoord) -> Self {
        Self {
            center,
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(center: AxialCoord, count: u64) -> Self {
        Self {
            center,
            current: 0,
            limit: Some(count),
        }
    }

    /// Create a spiral iterator for a specific ring range (inclusive).
    pub fn rings(center: AxialCoord, start_ring: u64, end_ring: u64) -> Self {
        let start_slot = if start_ring == 0 {
            0
        } else {
            total_slots_through(start_ring - 1)
        };
        let end_slot = total_slots_through(end_ring);

        Self {
            center,
            current: start_slot,
            limit: Some(end_slot),
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new(AxialCoord::ORIGIN)
    }
}

impl Iterator for Spiral {
    type Item = AxialCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let coord = self.center + spiral_to_coord(SpiralIndex(self.current));
        self.current += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current);
                (remaining as usize, Some(remaining as usize))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Corner where each side of ring `n` starts.
fn ring_corners(n: i64) -> [AxialCoord; 6] {
    [
        AxialCoord::new(n, 0),
        AxialCoord::new(0, n),
        AxialCoord::new(-n, n),
        AxialCoord::new(-n, 0),
        AxialCoord::new(0, -n),
        AxialCoord::new(n, -n),
    ]
}

/// Step taken along each side of a ring.
const SIDE_STEPS: [AxialCoord; 6] = [
    AxialCoord::new(-1, 1),
    AxialCoord::new(-1, 0),
    AxialCoord::new(0, -1),
    AxialCoord::new(1, -1),
    AxialCoord::new(1, 0),
    AxialCoord::new(0, 1),
];

/// Convert a spiral index to coordinates relative to the spiral center.
pub fn spiral_to_coord(index: SpiralIndex) -> AxialCoord {
    if index.0 == 0 {
        return AxialCoord::ORIGIN;
    }

    let ring = index.ring();
    let offset = index.offset_in_ring();

    let side = (offset / ring) as usize;
    let pos_on_side = (offset % ring) as i64;

    ring_corners(ring as i64)[side] + SIDE_STEPS[side] * pos_on_side
}

/// Convert coordinates relative to the spiral center to a spiral index.
///
/// Inverse of [`spiral_to_coord`]; defined for every coordinate.
///
/// ```
/// use hexmap_geometry::{coord_to_spiral, spiral_to_coord, AxialCoord};
///
/// let coord = AxialCoord::new(3, -5);
/// assert_eq!(spiral_to_coord(coord_to_spiral(coord)), coord);
/// assert_eq!(coord_to_spiral(AxialCoord::ORIGIN).value(), 0);
/// ```
pub fn coord_to_spiral(coord: AxialCoord) -> SpiralIndex {
    if coord == AxialCoord::ORIGIN {
        return SpiralIndex::ORIGIN;
    }

    let ring = coord.ring();
    let n = ring as i64;
    let (q, r, s) = (coord.q, coord.r, coord.s());

    // Each cell of the ring belongs to exactly one half-open side.
    let (side, pos) = if s == -n && q > 0 {
        (0, r)
    } else if r == n && q <= 0 {
        (1, -q)
    } else if q == -n && r > 0 {
        (2, n - r)
    } else if s == n && q < 0 {
        (3, q + n)
    } else if r == -n && q >= 0 {
        (4, q)
    } else {
        (5, r + n)
    };

    let base = total_slots_through(ring - 1);
    SpiralIndex(base + side * ring + pos as u64)
}

/// The cells at exactly `radius` steps from `center`.
///
/// `6 * radius` cells for `radius >= 1`, just `center` for `radius == 0`.
pub fn hex_ring(center: AxialCoord, radius: u64) -> Vec<AxialCoord> {
    Spiral::rings(center, radius, radius).collect()
}

/// All cells within `radius` steps of `center`, ring by ring.
///
/// Always `3 * radius * (radius + 1) + 1` cells.
pub fn hex_disk(center: AxialCoord, radius: u64) -> Vec<AxialCoord> {
    Spiral::rings(center, 0, radius).collect()
}

/// The first `count` cells of the spiral walk around `center`.
pub fn hex_spiral(center: AxialCoord, count: usize) -> Vec<AxialCoord> {
    Spiral::take_slots(center, count as u64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_distance;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn slots_in_ring_formula() {
        assert_eq!(slots_in_ring(0), 1);
        assert_eq!(slots_in_ring(1), 6);
        assert_eq!(slots_in_ring(2), 12);
        assert_eq!(slots_in_ring(3), 18);
        assert_eq!(slots_in_ring(10), 60);
    }

    #[test]
    fn total_slots_formula() {
        // 1 + 3n(n+1)
        assert_eq!(total_slots_through(0), 1);
        assert_eq!(total_slots_through(1), 7);
        assert_eq!(total_slots_through(2), 19);
        assert_eq!(total_slots_through(3), 37);
        assert_eq!(total_slots_through(10), 331);
    }

    #[test]
    fn spiral_index_ring() {
        assert_eq!(SpiralIndex(0).ring(), 0);

        for i in 1..=6 {
            assert_eq!(SpiralIndex(i).ring(), 1, "index {} should be ring 1", i);
        }
        for i in 7..=18 {
            assert_eq!(SpiralIndex(i).ring(), 2, "index {} should be ring 2", i);
        }
        for i in 19..=36 {
            assert_eq!(SpiralIndex(i).ring(), 3, "index {} should be ring 3", i);
        }
    }

    #[test]
    fn origin_is_slot_zero() {
        assert_eq!(spiral_to_coord(SpiralIndex::ORIGIN), AxialCoord::ORIGIN);
        assert_eq!(coord_to_spiral(AxialCoord::ORIGIN), SpiralIndex::ORIGIN);
    }

    #[test]
    fn ring_starts_at_east_corner() {
        assert_eq!(hex_ring(AxialCoord::ORIGIN, 2)[0], AxialCoord::new(2, 0));
        assert_eq!(hex_ring(AxialCoord::new(5, 5), 1)[0], AxialCoord::new(6, 5));
    }

    #[test]
    fn ring_walk_is_contiguous() {
        // Consecutive ring cells are neighbors, and the walk closes on itself.
        for radius in 1..6 {
            let ring = hex_ring(AxialCoord::ORIGIN, radius);
            for pair in ring.windows(2) {
                assert_eq!(hex_distance(pair[0], pair[1]), 1);
            }
            assert_eq!(hex_distance(ring[ring.len() - 1], ring[0]), 1);
        }
    }

    #[test]
    fn spiral_bijection_ring_0_to_6() {
        for i in 0..total_slots_through(6) {
            let coord = spiral_to_coord(SpiralIndex(i));
            let back = coord_to_spiral(coord);
            assert_eq!(back.0, i, "Round-trip failed for index {}: coord {:?}", i, coord);
        }
    }

    #[test]
    fn degenerate_inputs() {
        let c = AxialCoord::new(3, -2);
        assert_eq!(hex_ring(c, 0), vec![c]);
        assert_eq!(hex_disk(c, 0), vec![c]);
        assert!(hex_spiral(c, 0).is_empty());
    }

    #[test]
    fn spiral_rings_iterator() {
        let ring_0: Vec<_> = Spiral::rings(AxialCoord::ORIGIN, 0, 0).collect();
        assert_eq!(ring_0, vec![AxialCoord::ORIGIN]);

        assert_eq!(Spiral::rings(AxialCoord::ORIGIN, 1, 1).count(), 6);
        assert_eq!(Spiral::rings(AxialCoord::ORIGIN, 0, 2).count(), 19);
        assert_eq!(Spiral::rings(AxialCoord::ORIGIN, 3, 2).count(), 0);
    }

    #[test]
    fn spiral_iterator_size_hint() {
        let mut spiral = Spiral::take_slots(AxialCoord::ORIGIN, 10);
        assert_eq!(spiral.size_hint(), (10, Some(10)));
        spiral.next();
        assert_eq!(spiral.size_hint(), (9, Some(9)));
        assert_eq!(Spiral::default().size_hint().1, None);
    }

    #[test]
    fn large_ring_formula() {
        let ring = 1000;
        assert_eq!(total_slots_through(ring), 1 + 3 * 1000 * 1001);
        assert_eq!(SpiralIndex(total_slots_through(ring) - 1).ring(), ring);
        assert_eq!(SpiralIndex(total_slots_through(ring)).ring(), ring + 1);
    }

    proptest! {
        #[test]
        fn ring_cardinality(q in -50i64..50, r in -50i64..50, radius in 0u64..30) {
            let center = AxialCoord::new(q, r);
            let ring = hex_ring(center, radius);
            let expected = if radius == 0 { 1 } else { 6 * radius as usize };
            prop_assert_eq!(ring.len(), expected);
            for c in &ring {
                prop_assert_eq!(hex_distance(*c, center), radius);
            }
            let unique: HashSet<_> = ring.iter().collect();
            prop_assert_eq!(unique.len(), ring.len());
        }

        #[test]
        fn disk_cardinality(q in -50i64..50, r in -50i64..50, radius in 0u64..30) {
            let center = AxialCoord::new(q, r);
            let disk = hex_disk(center, radius);
            prop_assert_eq!(disk.len() as u64, 3 * radius * (radius + 1) + 1);
            for c in &disk {
                prop_assert!(hex_distance(*c, center) <= radius);
            }
        }

        #[test]
        fn spiral_exactness(q in -50i64..50, r in -50i64..50, count in 0usize..500) {
            let center = AxialCoord::new(q, r);
            let spiral = hex_spiral(center, count);
            prop_assert_eq!(spiral.len(), count);
            if count > 0 {
                prop_assert_eq!(spiral[0], center);
            }
            let unique: HashSet<_> = spiral.iter().collect();
            prop_assert_eq!(unique.len(), count);
        }

        #[test]
        fn coord_to_spiral_inverts(q in -200i64..200, r in -200i64..200) {
            let coord = AxialCoord::new(q, r);
            prop_assert_eq!(spiral_to_coord(coord_to_spiral(coord)), coord);
        }
    }
}
