//! World record loading
//!
//! Hex records live one-per-file in region subdirectories; river paths live
//! in a flat directory. Unreadable or unparsable input is fatal here, the
//! only boundary that aborts a run. Everything downstream degrades
//! gracefully instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One hex cell as stored in the world data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HexRecord {
    pub id: String,
    #[serde(default = "default_biome")]
    pub biome: String,
    #[serde(rename = "avgElevation", default)]
    pub avg_elevation: f64,
}

fn default_biome() -> String {
    "unknown".to_string()
}

/// One river path: an ordered list of `"<hexId>:<token>"` waypoints.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiverRecord {
    pub points: Vec<String>,
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("reading directory {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    // Stable order keeps runs reproducible across filesystems
    paths.sort();
    Ok(paths)
}

/// Load every hex record under `hex_dir`, one region subdirectory at a time.
/// Non-directories at the top level are skipped.
pub fn load_hex_records(hex_dir: &Path) -> Result<Vec<HexRecord>> {
    let mut regions = Vec::new();
    for entry in fs::read_dir(hex_dir)
        .with_context(|| format!("reading hex directory {}", hex_dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("reading hex directory {}", hex_dir.display()))?;
        if entry
            .file_type()
            .with_context(|| format!("inspecting {}", entry.path().display()))?
            .is_dir()
        {
            regions.push(entry.path());
        }
    }
    regions.sort();

    let mut records = Vec::new();
    for region in regions {
        for path in json_files(&region)? {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading hex record {}", path.display()))?;
            let record: HexRecord = serde_json::from_str(&text)
                .with_context(|| format!("parsing hex record {}", path.display()))?;
            records.push(record);
        }
    }
    Ok(records)
}

/// Load every river path record in `rivers_dir`.
pub fn load_river_records(rivers_dir: &Path) -> Result<Vec<RiverRecord>> {
    let mut records = Vec::new();
    for path in json_files(rivers_dir)? {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading river record {}", path.display()))?;
        let record: RiverRecord = serde_json::from_str(&text)
            .with_context(|| format!("parsing river record {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_record_full() {
        let record: HexRecord =
            serde_json::from_str(r#"{"id": "f12", "biome": "prairie", "avgElevation": 2400}"#)
                .unwrap();
        assert_eq!(record.id, "f12");
        assert_eq!(record.biome, "prairie");
        assert_eq!(record.avg_elevation, 2400.0);
    }

    #[test]
    fn test_hex_record_defaults() {
        let record: HexRecord = serde_json::from_str(r#"{"id": "f12"}"#).unwrap();
        assert_eq!(record.biome, "unknown");
        assert_eq!(record.avg_elevation, 0.0);
    }

    #[test]
    fn test_river_record_points() {
        let record: RiverRecord =
            serde_json::from_str(r#"{"points": ["f12:source", "g12:mouth"]}"#).unwrap();
        assert_eq!(record.points.len(), 2);
    }
}
