//! Biome elevation profiles
//!
//! Each biome carries an elevation preference used by the solver: a target
//! range the bias force pulls toward, a tension coefficient, and the maximum
//! elevation delta tolerated against adjacent cells. The catalog is an
//! immutable configuration object passed into the engine, so several world
//! configurations can coexist in one process.

use std::collections::HashMap;

/// Elevation preference parameters for one biome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeProfile {
    /// Lower bound of the preferred elevation range.
    pub target_min: f64,
    /// Upper bound of the preferred elevation range.
    pub target_max: f64,
    /// Spread coefficient in [0, 1].
    pub tension: f64,
    /// Elevation delta tolerated between adjacent cells.
    pub max_slope: f64,
}

impl BiomeProfile {
    pub const fn new(target_min: f64, target_max: f64, tension: f64, max_slope: f64) -> Self {
        Self {
            target_min,
            target_max,
            tension,
            max_slope,
        }
    }

    /// Signed pull toward the target range: zero inside the range, otherwise
    /// the distance to the nearer bound.
    pub fn bias(&self, elevation: f64) -> f64 {
        if elevation < self.target_min {
            self.target_min - elevation
        } else if elevation > self.target_max {
            self.target_max - elevation
        } else {
            0.0
        }
    }

    pub fn contains(&self, elevation: f64) -> bool {
        elevation >= self.target_min && elevation <= self.target_max
    }
}

/// Spread of the profile synthesized for biomes missing from the catalog.
pub const UNKNOWN_SPREAD: f64 = 1000.0;
/// Tension of synthesized profiles.
pub const UNKNOWN_TENSION: f64 = 0.5;
/// Slope tolerance of synthesized profiles (mid-table).
pub const UNKNOWN_MAX_SLOPE: f64 = 500.0;

/// Elevation profiles for the standard biome set.
const STANDARD_PROFILES: [(&str, BiomeProfile); 20] = [
    ("coastal-ocean", BiomeProfile::new(0.0, 0.0, 0.1, 100.0)),
    ("freshwater-lake", BiomeProfile::new(1200.0, 2400.0, 0.2, 150.0)),
    ("marsh", BiomeProfile::new(700.0, 1700.0, 0.2, 150.0)),
    ("swamp", BiomeProfile::new(400.0, 1200.0, 0.2, 150.0)),
    ("coastal-swamp", BiomeProfile::new(100.0, 700.0, 0.2, 150.0)),
    ("coastal-prairie", BiomeProfile::new(0.0, 600.0, 0.3, 200.0)),
    ("prairie", BiomeProfile::new(500.0, 3300.0, 0.3, 300.0)),
    ("temperate-rainforest", BiomeProfile::new(1100.0, 2900.0, 0.4, 400.0)),
    ("temperate-forest", BiomeProfile::new(3200.0, 5200.0, 0.4, 500.0)),
    ("temperate-woodland", BiomeProfile::new(2600.0, 4400.0, 0.4, 450.0)),
    ("mixed-woodland", BiomeProfile::new(1900.0, 3700.0, 0.4, 400.0)),
    ("boreal-forest", BiomeProfile::new(3600.0, 5600.0, 0.5, 550.0)),
    ("moors", BiomeProfile::new(4300.0, 6100.0, 0.3, 500.0)),
    ("highland-bog", BiomeProfile::new(3900.0, 5300.0, 0.3, 400.0)),
    ("montane-grassland", BiomeProfile::new(5900.0, 7900.0, 0.6, 700.0)),
    ("subalpine-woodland", BiomeProfile::new(5200.0, 6800.0, 0.5, 700.0)),
    ("montane-forest", BiomeProfile::new(6400.0, 8600.0, 0.7, 800.0)),
    ("rocky-highland", BiomeProfile::new(7600.0, 10000.0, 0.8, 1000.0)),
    ("alpine-tundra", BiomeProfile::new(8500.0, 11100.0, 0.9, 1200.0)),
    ("glacier", BiomeProfile::new(9700.0, 12500.0, 1.0, 1500.0)),
];

/// Immutable biome profile lookup plus the ocean anchor biome name.
#[derive(Debug, Clone)]
pub struct BiomeCatalog {
    profiles: HashMap<String, BiomeProfile>,
    ocean_biome: String,
}

impl BiomeCatalog {
    pub fn new(profiles: HashMap<String, BiomeProfile>, ocean_biome: impl Into<String>) -> Self {
        Self {
            profiles,
            ocean_biome: ocean_biome.into(),
        }
    }

    /// The standard catalog, with `coastal-ocean` as the anchor biome.
    pub fn standard() -> Self {
        let profiles = STANDARD_PROFILES
            .iter()
            .map(|(name, profile)| (name.to_string(), *profile))
            .collect();
        Self::new(profiles, "coastal-ocean")
    }

    pub fn ocean_biome(&self) -> &str {
        &self.ocean_biome
    }

    /// Whether nodes of this biome anchor the elevation field (are fixed).
    pub fn is_anchor(&self, biome: &str) -> bool {
        biome == self.ocean_biome
    }

    /// Profile for a biome. Unknown biomes get a profile derived from the
    /// node's current elevation instead of failing.
    pub fn profile_for(&self, biome: &str, elevation: f64) -> BiomeProfile {
        match self.profiles.get(biome) {
            Some(profile) => *profile,
            None => BiomeProfile::new(
                elevation - UNKNOWN_SPREAD,
                elevation + UNKNOWN_SPREAD,
                UNKNOWN_TENSION,
                UNKNOWN_MAX_SLOPE,
            ),
        }
    }
}

impl Default for BiomeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_biome_lookup() {
        let catalog = BiomeCatalog::standard();
        let prairie = catalog.profile_for("prairie", 0.0);
        assert_eq!(prairie.target_min, 500.0);
        assert_eq!(prairie.target_max, 3300.0);
    }

    #[test]
    fn test_unknown_biome_synthesizes_profile() {
        let catalog = BiomeCatalog::standard();
        let profile = catalog.profile_for("charred-wasteland", 4000.0);
        assert_eq!(profile.target_min, 3000.0);
        assert_eq!(profile.target_max, 5000.0);
        assert_eq!(profile.tension, UNKNOWN_TENSION);
        assert_eq!(profile.max_slope, UNKNOWN_MAX_SLOPE);
    }

    #[test]
    fn test_bias_direction() {
        let profile = BiomeProfile::new(500.0, 3300.0, 0.3, 300.0);
        assert_eq!(profile.bias(400.0), 100.0);
        assert_eq!(profile.bias(500.0), 0.0);
        assert_eq!(profile.bias(2000.0), 0.0);
        assert_eq!(profile.bias(3300.0), 0.0);
        assert_eq!(profile.bias(5000.0), -1700.0);
        assert!(profile.contains(500.0));
        assert!(!profile.contains(499.0));
    }

    #[test]
    fn test_ocean_is_anchor() {
        let catalog = BiomeCatalog::standard();
        assert!(catalog.is_anchor("coastal-ocean"));
        assert!(!catalog.is_anchor("prairie"));
        assert!(!catalog.is_anchor("unknown"));
    }
}
