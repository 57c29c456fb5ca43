//! Elevation band derivation
//!
//! After relaxation, every node gets a [min, max] envelope describing how far
//! its terrain may plausibly rise or fall without breaking the slope budget
//! against its neighborhood. The envelope uses the node's own biome slope
//! limit against each neighbor elevation; boundary neighbors count, river
//! flow edges do not. The result always contains the node's average
//! elevation. Consistency is one hop only: the pass makes no multi-hop slope
//! guarantee.

use crate::biomes::BiomeCatalog;
use crate::graph::{NeighborRef, WorldGraph};

/// Compute and store `min_elevation`/`max_elevation` for every node.
pub fn derive_bands(graph: &mut WorldGraph, catalog: &BiomeCatalog) {
    let mut bands = Vec::with_capacity(graph.len());

    for node in graph.nodes() {
        let max_slope = catalog.profile_for(&node.biome, node.elevation).max_slope;

        let mut floor = f64::INFINITY;
        let mut ceiling = f64::NEG_INFINITY;
        for neighbor in &node.neighbors {
            let elevation = match neighbor {
                NeighborRef::Hex(j) => graph.nodes()[*j].elevation,
                NeighborRef::Edge { elevation, .. } => *elevation,
            };
            ceiling = ceiling.max(elevation - max_slope);
            floor = floor.min(elevation + max_slope);
        }

        let band = if node.neighbors.is_empty() {
            let e = node.elevation.round() as i64;
            (e, e)
        } else {
            (
                node.elevation.min(floor).round() as i64,
                node.elevation.max(ceiling).round() as i64,
            )
        };
        bands.push(band);
    }

    for (node, (min, max)) in graph.nodes_mut().iter_mut().zip(bands) {
        node.min_elevation = Some(min);
        node.max_elevation = Some(max);
    }
}
