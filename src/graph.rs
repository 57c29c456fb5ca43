//! World graph built from hex and river records
//!
//! Nodes are stored densely, ordered by id, with an id-to-index map on the
//! side; neighbor and flow references are indices into the node vector.
//! References that point outside the loaded node set are dropped at build
//! time, so the solver never chases a dangling id.

use std::collections::{BTreeMap, HashMap};

use crate::biomes::BiomeCatalog;
use crate::boundary::EdgePolicy;
use crate::loader::HexRecord;
use crate::topology::{format_hex_id, neighbor_coords, parse_hex_id};

/// A neighbor reference: another node in the graph, or a synthetic off-grid
/// neighbor carrying a literal biome/elevation from the edge policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeighborRef {
    Hex(usize),
    Edge { biome: &'static str, elevation: f64 },
}

/// One hex cell of the world graph.
#[derive(Debug, Clone)]
pub struct HexNode {
    pub id: String,
    pub biome: String,
    /// Current elevation. Kept integral by the per-pass rounding.
    pub elevation: f64,
    /// Anchored nodes never move.
    pub fixed: bool,
    pub neighbors: Vec<NeighborRef>,
    /// Downstream river targets (indices into the node vector).
    pub flow_to: Vec<usize>,
    /// Lower edge of the derived elevation band.
    pub min_elevation: Option<i64>,
    /// Upper edge of the derived elevation band.
    pub max_elevation: Option<i64>,
}

/// The in-memory world model: nodes plus id lookup.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    nodes: Vec<HexNode>,
    index: HashMap<String, usize>,
}

impl WorldGraph {
    /// Build nodes from hex records. Later records win on duplicate ids, and
    /// nodes end up ordered by id so passes are deterministic.
    pub fn from_records(
        records: impl IntoIterator<Item = HexRecord>,
        catalog: &BiomeCatalog,
    ) -> Self {
        let mut by_id: BTreeMap<String, HexRecord> = BTreeMap::new();
        for record in records {
            by_id.insert(record.id.clone(), record);
        }

        let mut nodes = Vec::with_capacity(by_id.len());
        let mut index = HashMap::with_capacity(by_id.len());
        for (id, record) in by_id {
            index.insert(id.clone(), nodes.len());
            let fixed = catalog.is_anchor(&record.biome);
            nodes.push(HexNode {
                id,
                biome: record.biome,
                elevation: record.avg_elevation,
                fixed,
                neighbors: Vec::new(),
                flow_to: Vec::new(),
                min_elevation: None,
                max_elevation: None,
            });
        }
        Self { nodes, index }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[HexNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [HexNode] {
        &mut self.nodes
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&HexNode> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    pub fn flow_edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.flow_to.len()).sum()
    }

    /// Count of anchored (fixed) nodes.
    pub fn anchor_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.fixed).count()
    }

    /// Populate every node's neighbor list. Candidates found in the node set
    /// become real neighbors; misses are resolved through the edge policy or
    /// omitted. A node whose id does not parse gets no neighbors at all.
    pub fn link_neighbors(&mut self, policy: &EdgePolicy) {
        let mut linked: Vec<Vec<NeighborRef>> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let Ok(coord) = parse_hex_id(&node.id) else {
                linked.push(Vec::new());
                continue;
            };
            let mut refs = Vec::new();
            for candidate in neighbor_coords(coord) {
                if candidate.col >= 0 && candidate.row >= 0 {
                    let id = format_hex_id(candidate.col, candidate.row);
                    if let Some(&idx) = self.index.get(&id) {
                        refs.push(NeighborRef::Hex(idx));
                        continue;
                    }
                }
                if let Some(rule) = policy.resolve(candidate.col, candidate.row) {
                    refs.push(NeighborRef::Edge {
                        biome: rule.biome,
                        elevation: rule.elevation,
                    });
                }
            }
            linked.push(refs);
        }
        for (node, refs) in self.nodes.iter_mut().zip(linked) {
            node.neighbors = refs;
        }
    }

    /// Thread one river path through the graph: for each consecutive pair of
    /// waypoints whose hexes both exist, add a flow edge earlier -> later.
    /// Waypoints that are not exactly `hexId:token` are skipped; waypoints
    /// naming unknown hexes break the chain. Returns the number of edges
    /// added (duplicates and self-loops are not).
    pub fn add_river_path(&mut self, points: &[String]) -> usize {
        let mut added = 0;
        let mut prev: Option<&str> = None;
        for point in points {
            let parts: Vec<&str> = point.split(':').collect();
            if parts.len() != 2 {
                continue;
            }
            let hex = parts[0];
            if let Some(prev_hex) = prev {
                let from = self.index.get(prev_hex).copied();
                let to = self.index.get(hex).copied();
                if let (Some(from), Some(to)) = (from, to) {
                    if from != to && !self.nodes[from].flow_to.contains(&to) {
                        self.nodes[from].flow_to.push(to);
                        added += 1;
                    }
                }
            }
            prev = Some(hex);
        }
        added
    }
}
