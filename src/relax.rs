//! Elevation relaxation engine
//!
//! A synchronous Jacobi-style fixed-point solver. Every pass computes new
//! elevations for all non-fixed nodes from a snapshot taken at the start of
//! the pass, then applies them simultaneously; a pass never reads a sibling
//! node's already-updated value. Each node is pulled half-way toward its
//! biome target range and half-way toward the mean of its neighborhood
//! (neighbors, boundary literals, and river targets lowered by the expected
//! downstream drop), with the move clamped to a per-pass step limit.

use crate::biomes::BiomeCatalog;
use crate::graph::{NeighborRef, WorldGraph};

/// Relaxation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct RelaxParams {
    /// Maximum number of passes (default: 25)
    pub iterations: usize,

    /// Maximum elevation change per node per pass (default: 200)
    pub step_size: f64,

    /// Early-stop threshold on the total per-pass change. `None` runs the
    /// full iteration budget.
    pub threshold: Option<f64>,

    /// Reset all non-fixed elevations to 0 before the first pass.
    pub zero_init: bool,

    /// Expected elevation drop along a river flow edge (default: 300)
    pub flow_drop: f64,
}

impl Default for RelaxParams {
    fn default() -> Self {
        Self {
            iterations: 25,
            step_size: 200.0,
            threshold: None,
            zero_init: false,
            flow_drop: 300.0,
        }
    }
}

/// Outcome of a relaxation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelaxStats {
    /// Passes actually executed.
    pub passes: usize,
    /// Total |delta| of the final pass.
    pub final_change: f64,
    /// Whether the run stopped early on the threshold.
    pub converged: bool,
}

/// Run the relaxation loop over the graph, mutating node elevations in place.
pub fn relax(graph: &mut WorldGraph, catalog: &BiomeCatalog, params: &RelaxParams) -> RelaxStats {
    if params.zero_init {
        for node in graph.nodes_mut() {
            if !node.fixed {
                node.elevation = 0.0;
            }
        }
    }

    let mut stats = RelaxStats {
        passes: 0,
        final_change: 0.0,
        converged: false,
    };

    for pass in 0..params.iterations {
        let snapshot: Vec<f64> = graph.nodes().iter().map(|n| n.elevation).collect();
        let mut updated = Vec::with_capacity(snapshot.len());
        let mut total_change = 0.0;

        for (i, node) in graph.nodes().iter().enumerate() {
            if node.fixed {
                updated.push(snapshot[i]);
                continue;
            }
            let current = snapshot[i];
            let profile = catalog.profile_for(&node.biome, current);
            let bias = profile.bias(current);

            let mut sample_sum = 0.0;
            let mut sample_count = 0usize;
            for neighbor in &node.neighbors {
                sample_sum += match neighbor {
                    NeighborRef::Hex(j) => snapshot[*j],
                    NeighborRef::Edge { elevation, .. } => *elevation,
                };
                sample_count += 1;
            }
            for &target in &node.flow_to {
                // Water is expected to run downhill toward the target
                sample_sum += snapshot[target] - params.flow_drop;
                sample_count += 1;
            }

            let neighbor_avg = if sample_count == 0 {
                current
            } else {
                sample_sum / sample_count as f64
            };

            let desired = current + 0.5 * bias + 0.5 * (neighbor_avg - current);
            let delta = (desired - current).clamp(-params.step_size, params.step_size);
            total_change += delta.abs();
            updated.push((current + delta).round());
        }

        for (node, value) in graph.nodes_mut().iter_mut().zip(updated) {
            node.elevation = value;
        }

        stats.passes = pass + 1;
        stats.final_change = total_change;
        println!("  pass {:>2}: total change {:.0}", pass + 1, total_change);

        if let Some(threshold) = params.threshold {
            if total_change < threshold {
                stats.converged = true;
                break;
            }
        }
    }

    stats
}
