//! Hex-map elevation relaxation solver
//!
//! Assigns terrain elevation to every cell of a hex-grid world map so that
//! elevations sit inside each cell's biome preference, vary smoothly across
//! neighboring cells, and respect river downstream flow. Re-exports modules
//! for use by the CLI binary and tools.

pub mod bands;
pub mod biomes;
pub mod boundary;
pub mod export;
pub mod graph;
pub mod loader;
pub mod patch;
pub mod relax;
pub mod topology;
