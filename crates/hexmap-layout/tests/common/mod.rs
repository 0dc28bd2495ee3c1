//! Shared helpers for layout integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use hexmap_layout::geometry::{hex_distance, AxialCoord};
use hexmap_layout::{Entity, Layout};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness; `RUST_LOG=hexmap_layout=debug`
/// shows placement decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn entity(id: &str, domain: &str) -> Entity {
    Entity::new(id, format!("Entity {id}")).with_domain(domain)
}

/// `per_domain` entities in each of `domains`, interleaved round-robin.
pub fn interleaved(domains: &[&str], per_domain: usize) -> Vec<Entity> {
    (0..per_domain)
        .flat_map(|i| domains.iter().map(move |d| entity(&format!("{d}-{i}"), d)))
        .collect()
}

/// Cell -> cluster id for every asset; panics on a shared cell.
pub fn cell_owners(layout: &Layout) -> HashMap<AxialCoord, &str> {
    let mut owners = HashMap::new();
    for cluster in &layout.clusters {
        for asset in &cluster.assets {
            let previous = owners.insert(asset.position, cluster.id.as_str());
            assert!(previous.is_none(), "cell {} assigned twice", asset.position);
        }
    }
    owners
}

/// Smallest hex distance between cells of different clusters.
pub fn min_cross_cluster_distance(layout: &Layout) -> Option<u64> {
    let mut best: Option<u64> = None;
    for (i, a) in layout.clusters.iter().enumerate() {
        for b in &layout.clusters[i + 1..] {
            for pa in a.positions() {
                for pb in b.positions() {
                    let d = hex_distance(pa, pb);
                    best = Some(best.map_or(d, |m| m.min(d)));
                }
            }
        }
    }
    best
}
