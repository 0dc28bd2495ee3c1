//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. This gives us efficient storage (2 values instead
//! of 3) while maintaining the hexagonal symmetry.

use std::ops::{Add, Mul, Neg, Sub};

/// A cell on the hexagonal grid.
///
/// The implicit third axis is s = -q - r. Two coordinates are equal iff both
/// stored components match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl AxialCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six unit directions, starting east and turning counter-clockwise.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: 0 },  // East
        Self { q: 1, r: -1 }, // Northeast
        Self { q: 0, r: -1 }, // Northwest
        Self { q: -1, r: 0 }, // West
        Self { q: -1, r: 1 }, // Southwest
        Self { q: 0, r: 1 },  // Southeast
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Number of steps between two cells.
    ///
    /// (|dq| + |dq + dr| + |dr|) / 2, which equals max(|dq|, |dr|, |ds|).
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.unsigned_abs() + (dq + dr).unsigned_abs() + dr.unsigned_abs()) / 2
    }

    /// Ring number around the origin (0 = origin, 1 = first ring, etc.)
    pub fn ring(&self) -> u64 {
        self.hex_distance(&Self::ORIGIN)
    }

    /// Get all six neighbors, in [`Self::DIRECTIONS`] order.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Round fractional axial coordinates to the containing cell.
    ///
    /// Each cube component is rounded independently, then the component with
    /// the largest rounding error is recomputed from the other two so that
    /// q + r + s = 0 holds exactly.
    pub fn round(fq: f64, fr: f64) -> Self {
        let fs = -fq - fr;

        let mut q = fq.round();
        let mut r = fr.round();
        let s = fs.round();

        let q_diff = (q - fq).abs();
        let r_diff = (r - fr).abs();
        let s_diff = (s - fs).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }

        Self::new(q as i64, r as i64)
    }
}

/// The six neighbors of `coord`, each at distance exactly 1.
pub fn hex_neighbors(coord: AxialCoord) -> [AxialCoord; 6] {
    coord.neighbors()
}

/// Steps between `a` and `b`. Symmetric, zero iff `a == b`.
pub fn hex_distance(a: AxialCoord, b: AxialCoord) -> u64 {
    a.hex_distance(&b)
}

impl Add for AxialCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for AxialCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for AxialCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl Mul<i64> for AxialCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        Self {
            q: self.q * k,
            r: self.r * k,
        }
    }
}

impl From<(i64, i64)> for AxialCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self { q, r }
    }
}

impl std::fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
