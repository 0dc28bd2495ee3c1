//! Hexmap Domain Layout
//!
//! Places catalog entities on a shared hex grid, one color-coded cluster per
//! domain.
//!
//! # Pipeline
//!
//! - **Grouping**: entities are partitioned by domain; a missing or blank
//!   domain becomes [`OTHER_DOMAIN`]
//! - **Ordering**: domains are sorted by population, largest first, ties in
//!   first-seen order
//! - **Placement**: the first domain is anchored at the origin; each later one
//!   searches outward ring by ring for a spiral that keeps `min_gap` hexes
//!   from every occupied cell
//! - **Assembly**: clusters get a palette color, a pixel centroid and
//!   optional sub-clusters; the layout gets a pixel bounding box
//!
//! # Invariants
//!
//! Every entity lands in exactly one cluster on exactly one cell, and no two
//! entities share a cell. Clusters keep at least `min_gap` hexes apart unless
//! the search cap was hit, in which case the cluster is marked
//! [`Placement::Fallback`] and [`Layout::is_degraded`] reports it.
//!
//! # Usage
//!
//! ```
//! use hexmap_layout::{ClusterLayout, Entity, LayoutConfig};
//!
//! let entities = vec![
//!     Entity::new("a1", "Campaigns").with_domain("Marketing"),
//!     Entity::new("a2", "Leads").with_domain("Marketing"),
//!     Entity::new("b1", "Ledger").with_domain("Finance"),
//! ];
//!
//! let engine = ClusterLayout::new(LayoutConfig::default())?;
//! let layout = engine.layout(&entities)?;
//!
//! assert_eq!(layout.clusters.len(), 2);
//! assert_eq!(layout.clusters[0].domain, "Marketing");
//! # Ok::<(), hexmap_layout::Error>(())
//! ```
//!
//! Each call is self-contained: occupancy lives inside the call, so the
//! engine can be shared across threads freely.

mod cluster;
mod color;
mod config;
mod engine;
mod entity;
mod error;
mod group;
mod placement;

pub use cluster::{Cluster, Layout, PositionedAsset, SubCluster, CLUSTER_ID_PREFIX};
pub use color::{domain_color, palette_color, shade_variant, Rgb, PALETTE};
pub use config::{
    LayoutConfig, DEFAULT_FALLBACK_SPACING, DEFAULT_HEX_SIZE, DEFAULT_MAX_SEARCH_RINGS,
    DEFAULT_MIN_GAP, MAX_FALLBACK_SPACING, MAX_MIN_GAP, MAX_SEARCH_RINGS_LIMIT,
};
pub use engine::{compute_layout, ClusterLayout, SUB_CLUSTER_SHADE_STEP};
pub use entity::{parse_entities, validate_entities, Entity, MAX_QUALITY_SCORE, OTHER_DOMAIN};
pub use error::{Error, Result};
pub use group::{group_by_domain, DomainGroup};
pub use placement::{Occupancy, PlacedGroup, Placement, Placer};

pub use hexmap_geometry as geometry;
