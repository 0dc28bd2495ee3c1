//! Hexmap Geometry
//!
//! Pure coordinate math for an axial hexagonal grid.
//!
//! # Coordinate System
//!
//! Cells are addressed with axial coordinates (q, r). The implicit third cube
//! axis s = -q - r is never stored; it only appears in distance and rounding.
//!
//! # Enumeration
//!
//! Rings, disks and spirals all walk the grid in the same deterministic order:
//! ring 0 is the center, ring n > 0 is six sides of n cells each, walked
//! consecutively starting from the east corner. A cell's position in that
//! walk is its [`SpiralIndex`]; [`spiral_to_coord`] and [`coord_to_spiral`]
//! convert between the two forms for every coordinate, so a spiral index can
//! serve as a stable one-dimensional key for a cell.
//!
//! # Pixel Space
//!
//! A [`Projection`] pairs an [`Orientation`] with a circumradius and converts
//! between grid and pixel space. `pixel_to_hex(hex_to_pixel(c)) == c` holds for
//! every integer coordinate.
//!
//! Nothing here allocates shared state or fails: degenerate inputs (radius 0,
//! count 0, empty iterators) yield trivial results.

mod hex;
mod pixel;
mod spiral;

pub use hex::{hex_distance, hex_neighbors, AxialCoord};
pub use pixel::{
    centroid, hex_bounding_box, hex_corners, hex_to_pixel, pixel_to_hex, point_in_hex,
    BoundingBox, Orientation, PixelCoord, Projection,
};
pub use spiral::{
    coord_to_spiral, hex_disk, hex_ring, hex_spiral, slots_in_ring, spiral_to_coord,
    total_slots_through, Spiral, SpiralIndex,
};

/// Number of neighbors of every hex cell.
pub const HEX_NEIGHBORS: usize = 6;
