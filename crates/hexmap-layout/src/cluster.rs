//! Layout output: positioned assets, clusters, sub-clusters.
//!
//! These are plain data handed to the rendering layer. Field names serialize
//! in camelCase (`subClusters`, `hexSize`, `minX`, ...).

use std::collections::BTreeMap;

use hexmap_geometry::{AxialCoord, BoundingBox, Orientation, PixelCoord, Projection};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::entity::Entity;
use crate::error::Result;
use crate::placement::Placement;

/// Prefix of every cluster id.
pub const CLUSTER_ID_PREFIX: &str = "cluster:";

/// An entity together with its grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedAsset {
    #[serde(flatten)]
    pub entity: Entity,
    pub position: AxialCoord,
}

impl PositionedAsset {
    pub fn id(&self) -> &str {
        &self.entity.id
    }
}

/// All assets of one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub label: String,
    pub domain: String,
    pub color: Rgb,
    pub assets: Vec<PositionedAsset>,
    pub centroid: PixelCoord,
    /// Center of the spiral the assets were packed into
    pub origin: AxialCoord,
    pub placement: Placement,
}

impl Cluster {
    /// Cluster id for a domain.
    pub fn id_for(domain: &str) -> String {
        format!("{CLUSTER_ID_PREFIX}{domain}")
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = AxialCoord> + '_ {
        self.assets.iter().map(|a| a.position)
    }

    pub fn contains(&self, coord: AxialCoord) -> bool {
        self.assets.iter().any(|a| a.position == coord)
    }
}

/// Assets of one sub-domain inside a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCluster {
    pub sub_domain: String,
    pub asset_ids: Vec<String>,
    pub centroid: PixelCoord,
    /// Parent color shaded by the sub-cluster's rank
    pub color: Rgb,
}

/// A complete layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Clusters in placement order, most populous domain first
    pub clusters: Vec<Cluster>,
    /// Sub-clusters keyed by cluster id; clusters without any are absent
    pub sub_clusters: BTreeMap<String, Vec<SubCluster>>,
    pub hex_size: f64,
    pub orientation: Orientation,
    pub bounds: BoundingBox,
}

impl Layout {
    /// A layout of zero entities.
    pub fn empty(hex_size: f64, orientation: Orientation) -> Self {
        Self {
            clusters: Vec::new(),
            sub_clusters: BTreeMap::new(),
            hex_size,
            orientation,
            bounds: BoundingBox::ZERO,
        }
    }

    pub fn projection(&self) -> Projection {
        Projection::new(self.orientation, self.hex_size)
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.iter().all(Cluster::is_empty)
    }

    pub fn asset_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Whether any cluster was placed by the fallback path, i.e. the gap
    /// between clusters is not guaranteed.
    pub fn is_degraded(&self) -> bool {
        self.clusters.iter().any(|c| c.placement.is_fallback())
    }

    pub fn assets(&self) -> impl Iterator<Item = &PositionedAsset> + '_ {
        self.clusters.iter().flat_map(|c| c.assets.iter())
    }

    pub fn cluster(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    pub fn sub_clusters_of(&self, cluster_id: &str) -> &[SubCluster] {
        self.sub_clusters
            .get(cluster_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The cluster holding the asset with `asset_id`.
    pub fn cluster_of(&self, asset_id: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.assets.iter().any(|a| a.id() == asset_id))
    }

    /// The asset occupying `coord`, with its cluster.
    pub fn asset_at(&self, coord: AxialCoord) -> Option<(&Cluster, &PositionedAsset)> {
        self.clusters.iter().find_map(|c| {
            c.assets
                .iter()
                .find(|a| a.position == coord)
                .map(|a| (c, a))
        })
    }

    /// The asset drawn under pixel (x, y), if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&PositionedAsset> {
        let projection = self.projection();
        let point = PixelCoord::new(x, y);
        let coord = projection.pixel_to_hex(point);
        if !projection.contains(projection.hex_to_pixel(coord), point) {
            return None;
        }
        self.asset_at(coord).map(|(_, asset)| asset)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    fn asset(id: &str, q: i64, r: i64) -> PositionedAsset {
        PositionedAsset {
            entity: Entity::new(id, id).with_domain("D"),
            position: AxialCoord::new(q, r),
        }
    }

    fn sample() -> Layout {
        let cluster = Cluster {
            id: Cluster::id_for("D"),
            label: "D".into(),
            domain: "D".into(),
            color: PALETTE[0],
            assets: vec![asset("a", 0, 0), asset("b", 1, 0)],
            centroid: PixelCoord::new(10.0, 0.0),
            origin: AxialCoord::ORIGIN,
            placement: Placement::Anchor,
        };
        Layout {
            clusters: vec![cluster],
            sub_clusters: BTreeMap::new(),
            hex_size: 10.0,
            orientation: Orientation::PointyTop,
            bounds: BoundingBox::ZERO,
        }
    }

    #[test]
    fn cluster_ids_are_prefixed() {
        assert_eq!(Cluster::id_for("Finance"), "cluster:Finance");
    }

    #[test]
    fn lookups() {
        let layout = sample();
        assert_eq!(layout.asset_count(), 2);
        assert!(!layout.is_empty());
        assert!(!layout.is_degraded());
        assert_eq!(layout.cluster_of("b").map(|c| c.domain.as_str()), Some("D"));
        assert!(layout.cluster_of("zzz").is_none());
        assert_eq!(layout.asset_at(AxialCoord::new(1, 0)).map(|(_, a)| a.id()), Some("b"));
        assert!(layout.asset_at(AxialCoord::new(5, 5)).is_none());
        assert!(layout.cluster("cluster:D").is_some());
        assert!(layout.sub_clusters_of("cluster:D").is_empty());
    }

    #[test]
    fn hit_test_finds_cell_under_point() {
        let layout = sample();
        let center = layout.projection().hex_to_pixel(AxialCoord::new(1, 0));
        assert_eq!(layout.hit_test(center.x + 1.0, center.y - 2.0).map(|a| a.id()), Some("b"));
        assert!(layout.hit_test(0.0, 100.0).is_none());
    }

    #[test]
    fn empty_layout() {
        let layout = Layout::empty(20.0, Orientation::PointyTop);
        assert!(layout.is_empty());
        assert_eq!(layout.asset_count(), 0);
        assert_eq!(layout.bounds, BoundingBox::ZERO);
    }

    #[test]
    fn json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["hexSize"], 10.0);
        assert_eq!(json["clusters"][0]["color"], "#1a2e5a");
        assert_eq!(json["clusters"][0]["assets"][1]["id"], "b");
        assert_eq!(json["clusters"][0]["assets"][1]["position"]["q"], 1);
        assert_eq!(json["clusters"][0]["placement"]["kind"], "anchor");
        assert!(json["bounds"]["minX"].is_number());
        assert!(json["subClusters"].is_object());
    }

    #[test]
    fn json_round_trip() {
        let layout = sample();
        let back: Layout = serde_json::from_str(&layout.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, layout);
    }
}
