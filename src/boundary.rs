//! Edge policy for off-grid neighbors
//!
//! Cells on the rim of the mapped area still feel terrain beyond it: the map
//! is bounded by ocean to the south and east, a polar highland to the north,
//! and a mountain wall along the far eastern column. Rather than branching on
//! coordinates inside the solver, the rim is described as a table mapping
//! (edge, position) to a synthetic neighbor with a literal biome/elevation.

/// A synthetic off-grid neighbor: literal biome label and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRule {
    pub biome: &'static str,
    pub elevation: f64,
}

impl EdgeRule {
    pub const fn new(biome: &'static str, elevation: f64) -> Self {
        Self { biome, elevation }
    }
}

/// Declarative boundary table for one world map.
///
/// Resolution order: south/east overflow, then the north edge (row 0), then
/// the high-column band. Candidates matching none of these contribute no
/// neighbor.
#[derive(Debug, Clone)]
pub struct EdgePolicy {
    /// Highest valid column index (columns run 0..=max_col).
    pub max_col: i32,
    /// Highest valid row (rows run 1..=max_row).
    pub max_row: i32,
    /// Rule for south/east overflow (row > max_row or col > max_col).
    pub overflow: EdgeRule,
    /// Per-column overrides along the north edge (row 0).
    pub north_overrides: Vec<(i32, EdgeRule)>,
    /// Default rule for the rest of the north edge.
    pub north_default: EdgeRule,
    /// Column forming the eastern mountain wall.
    pub high_col: i32,
    /// Per-row overrides inside the high column.
    pub high_col_overrides: Vec<(i32, EdgeRule)>,
    /// Default rule for the rest of the high column.
    pub high_col_default: EdgeRule,
}

const fn col(letter: u8) -> i32 {
    (letter - b'a') as i32
}

impl EdgePolicy {
    /// The standard world map rim: ocean beyond the south/east edges, tundra
    /// lowlands at the top of columns a-b, the great glacier at the head of
    /// column t, alpine heights elsewhere along the north rim, and the
    /// column-x mountain wall with its two forested passes.
    pub fn standard() -> Self {
        Self {
            max_col: 25,
            max_row: 99,
            overflow: EdgeRule::new("coastal-ocean", 0.0),
            north_overrides: vec![
                (col(b'a'), EdgeRule::new("tundra", 1000.0)),
                (col(b'b'), EdgeRule::new("tundra", 1000.0)),
                (col(b't'), EdgeRule::new("glacier", 11000.0)),
            ],
            north_default: EdgeRule::new("alpine-tundra", 10000.0),
            high_col: col(b'x'),
            high_col_overrides: vec![
                (26, EdgeRule::new("montane-forest", 8000.0)),
                (27, EdgeRule::new("temperate-rainforest", 2000.0)),
            ],
            high_col_default: EdgeRule::new("alpine-tundra", 9500.0),
        }
    }

    /// Resolve a neighbor candidate that is not in the node set.
    /// Returns `None` when the candidate contributes no neighbor.
    pub fn resolve(&self, col: i32, row: i32) -> Option<EdgeRule> {
        if row > self.max_row || col > self.max_col {
            return Some(self.overflow);
        }
        if col < 0 || row < 0 {
            return None;
        }
        if row == 0 {
            let rule = self
                .north_overrides
                .iter()
                .find(|(c, _)| *c == col)
                .map(|(_, rule)| *rule);
            return Some(rule.unwrap_or(self.north_default));
        }
        if col == self.high_col {
            let rule = self
                .high_col_overrides
                .iter()
                .find(|(r, _)| *r == row)
                .map(|(_, rule)| *rule);
            return Some(rule.unwrap_or(self.high_col_default));
        }
        None
    }
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_south_east_overflow_is_ocean() {
        let policy = EdgePolicy::standard();
        assert_eq!(policy.resolve(5, 100), Some(EdgeRule::new("coastal-ocean", 0.0)));
        assert_eq!(policy.resolve(26, 50), Some(EdgeRule::new("coastal-ocean", 0.0)));
        assert_eq!(policy.resolve(30, 120), Some(EdgeRule::new("coastal-ocean", 0.0)));
    }

    #[test]
    fn test_north_edge_overrides() {
        let policy = EdgePolicy::standard();
        assert_eq!(policy.resolve(0, 0), Some(EdgeRule::new("tundra", 1000.0)));
        assert_eq!(policy.resolve(1, 0), Some(EdgeRule::new("tundra", 1000.0)));
        assert_eq!(policy.resolve(19, 0), Some(EdgeRule::new("glacier", 11000.0)));
        assert_eq!(policy.resolve(7, 0), Some(EdgeRule::new("alpine-tundra", 10000.0)));
    }

    #[test]
    fn test_high_column_band() {
        let policy = EdgePolicy::standard();
        assert_eq!(policy.resolve(23, 26), Some(EdgeRule::new("montane-forest", 8000.0)));
        assert_eq!(
            policy.resolve(23, 27),
            Some(EdgeRule::new("temperate-rainforest", 2000.0))
        );
        assert_eq!(policy.resolve(23, 50), Some(EdgeRule::new("alpine-tundra", 9500.0)));
    }

    #[test]
    fn test_north_edge_wins_over_high_column() {
        // x0 sits on both edges; the north rim rule applies
        let policy = EdgePolicy::standard();
        assert_eq!(policy.resolve(23, 0), Some(EdgeRule::new("alpine-tundra", 10000.0)));
    }

    #[test]
    fn test_unmatched_candidates_contribute_nothing() {
        let policy = EdgePolicy::standard();
        assert_eq!(policy.resolve(-1, 5), None);
        assert_eq!(policy.resolve(5, -1), None);
        assert_eq!(policy.resolve(5, 50), None); // interior miss
    }
}
