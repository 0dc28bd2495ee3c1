//! Projection between axial grid space and Cartesian pixel space.
//!
//! The circumradius ("hex size") is the distance from a cell's center to any
//! of its corners. For a pointy-top cell the footprint is `sqrt(3) * size`
//! wide and `2 * size` tall; flat-top swaps the two.

use crate::AxialCoord;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the hexagons point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    /// A corner points up; rows of cells are horizontal.
    #[default]
    PointyTop,
    /// A flat edge faces up; columns of cells are vertical.
    FlatTop,
}

impl Orientation {
    /// Angle of the first corner, in degrees.
    pub const fn start_angle(&self) -> f64 {
        match self {
            Self::PointyTop => -30.0,
            Self::FlatTop => 0.0,
        }
    }
}

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelCoord {
    pub x: f64,
    pub y: f64,
}

impl PixelCoord {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// The degenerate box returned for empty input.
    pub const ZERO: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Box from its corner extents; width and height are derived.
    pub fn from_extents(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Whether `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: PixelCoord) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Whether the box was built from zero hexes.
    pub fn is_empty(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Grid-to-pixel mapping for one orientation and circumradius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub orientation: Orientation,
    pub size: f64,
}

impl Projection {
    pub const fn new(orientation: Orientation, size: f64) -> Self {
        Self { orientation, size }
    }

    pub const fn pointy(size: f64) -> Self {
        Self::new(Orientation::PointyTop, size)
    }

    pub const fn flat(size: f64) -> Self {
        Self::new(Orientation::FlatTop, size)
    }

    /// Center of `coord` in pixel space. The origin always maps to (0, 0).
    pub fn hex_to_pixel(&self, coord: AxialCoord) -> PixelCoord {
        let q = coord.q as f64;
        let r = coord.r as f64;
        match self.orientation {
            Orientation::PointyTop => PixelCoord::new(
                self.size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
                self.size * (1.5 * r),
            ),
            Orientation::FlatTop => PixelCoord::new(
                self.size * (1.5 * q),
                self.size * (SQRT_3 / 2.0 * q + SQRT_3 * r),
            ),
        }
    }

    /// The cell whose footprint contains `point`.
    pub fn pixel_to_hex(&self, point: PixelCoord) -> AxialCoord {
        let x = point.x / self.size;
        let y = point.y / self.size;
        let (fq, fr) = match self.orientation {
            Orientation::PointyTop => (SQRT_3 / 3.0 * x - y / 3.0, 2.0 / 3.0 * y),
            Orientation::FlatTop => (2.0 / 3.0 * x, -x / 3.0 + SQRT_3 / 3.0 * y),
        };
        AxialCoord::round(fq, fr)
    }

    /// Half the footprint's width and height.
    pub fn half_extents(&self) -> (f64, f64) {
        let narrow = SQRT_3 / 2.0 * self.size;
        match self.orientation {
            Orientation::PointyTop => (narrow, self.size),
            Orientation::FlatTop => (self.size, narrow),
        }
    }

    /// Corner points of the hexagon centered on `center`, counter-clockwise
    /// in screen space starting at the orientation's start angle.
    pub fn corners(&self, center: PixelCoord) -> [PixelCoord; 6] {
        let start = self.orientation.start_angle();
        std::array::from_fn(|i| {
            let angle = (start + 60.0 * i as f64).to_radians();
            PixelCoord::new(
                center.x + self.size * angle.cos(),
                center.y + self.size * angle.sin(),
            )
        })
    }

    /// Smallest box covering every cell's full footprint.
    pub fn bounding_box<I>(&self, coords: I) -> BoundingBox
    where
        I: IntoIterator<Item = AxialCoord>,
    {
        let (half_w, half_h) = self.half_extents();
        let mut extents: Option<(f64, f64, f64, f64)> = None;

        for coord in coords {
            let p = self.hex_to_pixel(coord);
            let (min_x, min_y, max_x, max_y) = extents.unwrap_or((p.x, p.y, p.x, p.y));
            extents = Some((
                min_x.min(p.x),
                min_y.min(p.y),
                max_x.max(p.x),
                max_y.max(p.y),
            ));
        }

        match extents {
            Some((min_x, min_y, max_x, max_y)) => BoundingBox::from_extents(
                min_x - half_w,
                min_y - half_h,
                max_x + half_w,
                max_y + half_h,
            ),
            None => BoundingBox::ZERO,
        }
    }

    /// Whether `point` lies inside the hexagon centered on `center`.
    ///
    /// Half-plane test on the folded first quadrant: within the half-width,
    /// and under the slanted edge joining the apex to the side corner.
    pub fn contains(&self, center: PixelCoord, point: PixelCoord) -> bool {
        let dx = (point.x - center.x).abs();
        let dy = (point.y - center.y).abs();
        let (across, along) = match self.orientation {
            Orientation::PointyTop => (dx, dy),
            Orientation::FlatTop => (dy, dx),
        };
        across <= SQRT_3 / 2.0 * self.size && along <= self.size - across / SQRT_3
    }
}

/// Pointy-top center of the cell (q, r).
pub fn hex_to_pixel(q: i64, r: i64, size: f64) -> PixelCoord {
    Projection::pointy(size).hex_to_pixel(AxialCoord::new(q, r))
}

/// Pointy-top cell containing (x, y).
pub fn pixel_to_hex(x: f64, y: f64, size: f64) -> AxialCoord {
    Projection::pointy(size).pixel_to_hex(PixelCoord::new(x, y))
}

/// Pointy-top corners of the hexagon centered on (cx, cy).
pub fn hex_corners(cx: f64, cy: f64, size: f64) -> [PixelCoord; 6] {
    Projection::pointy(size).corners(PixelCoord::new(cx, cy))
}

/// Pointy-top footprint box over `coords`.
pub fn hex_bounding_box(coords: &[AxialCoord], size: f64) -> BoundingBox {
    Projection::pointy(size).bounding_box(coords.iter().copied())
}

/// Pointy-top containment test of (px, py) in the hexagon centered on (cx, cy).
pub fn point_in_hex(px: f64, py: f64, cx: f64, cy: f64, size: f64) -> bool {
    Projection::pointy(size).contains(PixelCoord::new(cx, cy), PixelCoord::new(px, py))
}

/// Arithmetic mean of `points`; (0, 0) when there are none.
pub fn centroid<I>(points: I) -> PixelCoord
where
    I: IntoIterator<Item = PixelCoord>,
{
    let (sum_x, sum_y, count) = points
        .into_iter()
        .fold((0.0, 0.0, 0usize), |(sx, sy, n), p| (sx + p.x, sy + p.y, n + 1));

    if count == 0 {
        return PixelCoord::ZERO;
    }
    PixelCoord::new(sum_x / count as f64, sum_y / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hex_disk, hex_neighbors};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: PixelCoord, b: PixelCoord) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn origin_maps_to_zero() {
        for size in [1.0, 12.5, 40.0] {
            assert_eq!(hex_to_pixel(0, 0, size), PixelCoord::ZERO);
            assert_eq!(Projection::flat(size).hex_to_pixel(AxialCoord::ORIGIN), PixelCoord::ZERO);
        }
    }

    #[test]
    fn pointy_top_axes() {
        let p = hex_to_pixel(1, 0, 10.0);
        assert!(close(p, PixelCoord::new(10.0 * SQRT_3, 0.0)));

        let p = hex_to_pixel(0, 1, 10.0);
        assert!(close(p, PixelCoord::new(5.0 * SQRT_3, 15.0)));
    }

    #[test]
    fn neighbor_centers_are_equidistant() {
        for projection in [Projection::pointy(7.0), Projection::flat(7.0)] {
            let center = projection.hex_to_pixel(AxialCoord::ORIGIN);
            for n in hex_neighbors(AxialCoord::ORIGIN) {
                let p = projection.hex_to_pixel(n);
                let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
                assert!((d - 7.0 * SQRT_3).abs() < EPS);
            }
        }
    }

    #[test]
    fn corners_lie_on_circumcircle() {
        let corners = hex_corners(3.0, -4.0, 10.0);
        for c in corners {
            let d = ((c.x - 3.0).powi(2) + (c.y + 4.0).powi(2)).sqrt();
            assert!((d - 10.0).abs() < EPS);
        }
        // Pointy-top starts at -30 degrees.
        assert!(close(corners[0], PixelCoord::new(3.0 + 5.0 * SQRT_3, -9.0)));

        let flat = Projection::flat(10.0).corners(PixelCoord::ZERO);
        assert!(close(flat[0], PixelCoord::new(10.0, 0.0)));
    }

    #[test]
    fn bounding_box_single_hex() {
        let bb = hex_bounding_box(&[AxialCoord::ORIGIN], 10.0);
        assert!((bb.width - 10.0 * SQRT_3).abs() < EPS);
        assert!((bb.height - 20.0).abs() < EPS);
        assert!((bb.min_x + bb.max_x).abs() < EPS);
    }

    #[test]
    fn bounding_box_covers_corners() {
        let projection = Projection::pointy(10.0);
        let coords = hex_disk(AxialCoord::new(2, -1), 2);
        let bb = projection.bounding_box(coords.iter().copied());
        for c in coords {
            for corner in projection.corners(projection.hex_to_pixel(c)) {
                assert!(corner.x >= bb.min_x - EPS && corner.x <= bb.max_x + EPS);
                assert!(corner.y >= bb.min_y - EPS && corner.y <= bb.max_y + EPS);
            }
        }
    }

    #[test]
    fn bounding_box_contains_centers() {
        let projection = Projection::flat(5.0);
        let coords = [AxialCoord::new(-3, 1), AxialCoord::new(4, 4), AxialCoord::new(0, -6)];
        let bb = projection.bounding_box(coords);
        for c in coords {
            assert!(bb.contains(projection.hex_to_pixel(c)));
        }
        assert!(!bb.contains(PixelCoord::new(bb.max_x + 1.0, bb.min_y)));
        assert!((bb.width - (bb.max_x - bb.min_x)).abs() < EPS);
    }

    #[test]
    fn bounding_box_empty() {
        let bb = hex_bounding_box(&[], 10.0);
        assert_eq!(bb, BoundingBox::ZERO);
        assert!(bb.is_empty());
    }

    #[test]
    fn point_in_hex_center_and_edges() {
        assert!(point_in_hex(0.0, 0.0, 0.0, 0.0, 10.0));
        // Apex and side midpoint are on the boundary.
        assert!(point_in_hex(0.0, 10.0, 0.0, 0.0, 10.0));
        assert!(point_in_hex(5.0 * SQRT_3, 0.0, 0.0, 0.0, 10.0));
        // Beyond the flat side and above the apex.
        assert!(!point_in_hex(5.0 * SQRT_3 + 0.1, 0.0, 0.0, 0.0, 10.0));
        assert!(!point_in_hex(0.0, 10.1, 0.0, 0.0, 10.0));
        // Inside the bounding rectangle, outside the slanted edge.
        assert!(!point_in_hex(8.5, 9.0, 0.0, 0.0, 10.0));
    }

    #[test]
    fn flat_top_contains_swaps_axes() {
        let projection = Projection::flat(10.0);
        assert!(projection.contains(PixelCoord::ZERO, PixelCoord::new(10.0, 0.0)));
        assert!(!projection.contains(PixelCoord::ZERO, PixelCoord::new(0.0, 10.0)));
    }

    #[test]
    fn centroid_of_nothing_is_zero() {
        let c = centroid(std::iter::empty());
        assert_eq!(c, PixelCoord::ZERO);
        assert!(!c.x.is_nan());
    }

    #[test]
    fn centroid_of_ring_is_center() {
        let projection = Projection::pointy(10.0);
        let center = AxialCoord::new(4, -2);
        let points = crate::hex_ring(center, 3).into_iter().map(|c| projection.hex_to_pixel(c));
        assert!(close(centroid(points), projection.hex_to_pixel(center)));
    }

    proptest! {
        #[test]
        fn pixel_round_trip(q in -2000i64..2000, r in -2000i64..2000, size in 0.5f64..200.0) {
            let coord = AxialCoord::new(q, r);
            let p = hex_to_pixel(q, r, size);
            prop_assert_eq!(pixel_to_hex(p.x, p.y, size), coord);

            let flat = Projection::flat(size);
            prop_assert_eq!(flat.pixel_to_hex(flat.hex_to_pixel(coord)), coord);
        }

        #[test]
        fn center_is_inside_own_hex(q in -100i64..100, r in -100i64..100, size in 1.0f64..50.0) {
            let p = hex_to_pixel(q, r, size);
            prop_assert!(point_in_hex(p.x, p.y, p.x, p.y, size));
        }
    }
}
