//! The layout pipeline: group, order, place, assemble.

use std::collections::BTreeMap;

use hexmap_geometry::{centroid, AxialCoord, PixelCoord, Projection};
use tracing::debug;

use crate::cluster::{Cluster, Layout, PositionedAsset, SubCluster};
use crate::color::domain_color;
use crate::config::LayoutConfig;
use crate::entity::{validate_entities, Entity};
use crate::error::Result;
use crate::group::{group_by_domain, group_first_seen};
use crate::placement::{PlacedGroup, Placer};

/// Shade added per sub-cluster rank to the parent cluster's color.
pub const SUB_CLUSTER_SHADE_STEP: i32 = 18;

/// Turns entity lists into layouts under one validated configuration.
///
/// Holds no state between runs; one engine may serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct ClusterLayout {
    config: LayoutConfig,
}

impl ClusterLayout {
    /// Create an engine, rejecting unusable configurations.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Validate `entities` and lay them out.
    ///
    /// Fails only on malformed input (empty id or name, out-of-range score,
    /// duplicate id). The layout itself is total.
    pub fn layout(&self, entities: &[Entity]) -> Result<Layout> {
        validate_entities(entities)?;
        Ok(self.layout_unchecked(entities))
    }

    /// Lay out entities already validated by the caller.
    pub fn layout_unchecked(&self, entities: &[Entity]) -> Layout {
        if entities.is_empty() {
            return Layout::empty(self.config.hex_size, self.config.orientation);
        }

        let projection = self.config.projection();
        let groups = group_by_domain(entities);
        let domains: Vec<&str> = groups.iter().map(|g| g.domain).collect();

        debug!(
            "Laying out {} entities across {} domains",
            entities.len(),
            domains.len()
        );

        let mut placer = Placer::new(&self.config);
        let mut clusters = Vec::with_capacity(groups.len());
        let mut sub_clusters = BTreeMap::new();

        for group in &groups {
            let placed = placer.place(group.len());
            let cluster =
                assemble_cluster(group.domain, &group.members, placed, &domains, projection);

            let subs = assemble_sub_clusters(&cluster, projection);
            if !subs.is_empty() {
                sub_clusters.insert(cluster.id.clone(), subs);
            }
            clusters.push(cluster);
        }

        let bounds = projection.bounding_box(clusters.iter().flat_map(Cluster::positions));

        debug!(
            "Layout complete: {} cells occupied, bounds {:.1} x {:.1}",
            placer.occupancy().len(),
            bounds.width,
            bounds.height
        );

        Layout {
            clusters,
            sub_clusters,
            hex_size: self.config.hex_size,
            orientation: self.config.orientation,
            bounds,
        }
    }
}

/// Lay out `entities` with default settings and the given hex size.
pub fn compute_layout(entities: &[Entity], hex_size: f64) -> Result<Layout> {
    ClusterLayout::new(LayoutConfig::default().with_hex_size(hex_size))?.layout(entities)
}

fn pixel_centroid(
    cells: impl IntoIterator<Item = AxialCoord>,
    projection: Projection,
) -> PixelCoord {
    centroid(cells.into_iter().map(|c| projection.hex_to_pixel(c)))
}

fn assemble_cluster(
    domain: &str,
    members: &[&Entity],
    placed: PlacedGroup,
    domains: &[&str],
    projection: Projection,
) -> Cluster {
    let assets: Vec<PositionedAsset> = members
        .iter()
        .zip(&placed.cells)
        .map(|(&entity, &position)| PositionedAsset {
            entity: entity.clone(),
            position,
        })
        .collect();

    Cluster {
        id: Cluster::id_for(domain),
        label: domain.to_string(),
        domain: domain.to_string(),
        color: domain_color(domain, domains),
        centroid: pixel_centroid(placed.cells.iter().copied(), projection),
        assets,
        origin: placed.origin,
        placement: placed.placement,
    }
}

fn assemble_sub_clusters(cluster: &Cluster, projection: Projection) -> Vec<SubCluster> {
    group_first_seen(&cluster.assets, |a| a.entity.sub_domain_key().map(str::to_string))
        .into_iter()
        .enumerate()
        .map(|(rank, (sub_domain, assets))| SubCluster {
            sub_domain,
            asset_ids: assets.iter().map(|a| a.entity.id.clone()).collect(),
            centroid: pixel_centroid(assets.iter().map(|a| a.position), projection),
            color: cluster
                .color
                .shade(SUB_CLUSTER_SHADE_STEP * (rank as i32 + 1)),
        })
        .collect()
}
