//! Preview rendering of the solved elevation field
//!
//! Paints each loaded hex as a filled cell on the 26x99 column/row grid,
//! colored by a spectral colormap over the observed elevation range. Odd
//! columns are shifted half a cell to suggest the hex packing. Cells without
//! a loaded record stay background-dark.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::graph::WorldGraph;
use crate::topology::parse_hex_id;

/// Pixel size of one hex cell.
const CELL_SIZE: u32 = 8;
/// Grid dimensions in cells (columns a..z, rows 1..99).
const GRID_COLS: u32 = 26;
const GRID_ROWS: u32 = 99;

/// Export a PNG preview of the graph's elevation field.
pub fn export_preview(graph: &WorldGraph, path: &Path) -> Result<(), image::ImageError> {
    let width = GRID_COLS * CELL_SIZE;
    // extra half-cell so shifted odd columns stay inside the canvas
    let height = GRID_ROWS * CELL_SIZE + CELL_SIZE / 2;
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, Rgb([18, 18, 24]));

    let mut min_e = f64::INFINITY;
    let mut max_e = f64::NEG_INFINITY;
    for node in graph.nodes() {
        min_e = min_e.min(node.elevation);
        max_e = max_e.max(node.elevation);
    }
    let span = (max_e - min_e).max(1.0);

    for node in graph.nodes() {
        let Ok(coord) = parse_hex_id(&node.id) else {
            continue;
        };
        if coord.col < 0 || coord.col >= GRID_COLS as i32 || coord.row < 1 || coord.row > GRID_ROWS as i32 {
            continue;
        }
        let t = ((node.elevation - min_e) / span) as f32;
        let color = spectral_colormap(t.clamp(0.0, 1.0));

        let x0 = coord.col as u32 * CELL_SIZE;
        let mut y0 = (coord.row as u32 - 1) * CELL_SIZE;
        if coord.col % 2 == 1 {
            y0 += CELL_SIZE / 2;
        }
        for dy in 0..CELL_SIZE {
            for dx in 0..CELL_SIZE {
                img.put_pixel(x0 + dx, y0 + dy, Rgb(color));
            }
        }
    }

    img.save(path)
}

/// Spectral colormap (matplotlib style): dark blue -> cyan -> green -> yellow -> orange -> red
fn spectral_colormap(t: f32) -> [u8; 3] {
    let colors: [[f32; 3]; 11] = [
        [0.37, 0.31, 0.64],  // Dark blue/purple (low)
        [0.20, 0.53, 0.74],  // Blue
        [0.40, 0.76, 0.65],  // Teal
        [0.67, 0.87, 0.64],  // Light green
        [0.90, 0.96, 0.60],  // Yellow-green
        [1.00, 1.00, 0.75],  // Light yellow / white
        [1.00, 0.88, 0.55],  // Yellow
        [0.99, 0.68, 0.38],  // Light orange
        [0.96, 0.43, 0.26],  // Orange
        [0.84, 0.24, 0.31],  // Red
        [0.62, 0.00, 0.26],  // Dark red (high)
    ];

    let t_scaled = t * 10.0;
    let idx = (t_scaled as usize).min(9);
    let frac = t_scaled - idx as f32;

    let c1 = colors[idx];
    let c2 = colors[idx + 1];

    [
        ((c1[0] + (c2[0] - c1[0]) * frac) * 255.0) as u8,
        ((c1[1] + (c2[1] - c1[1]) * frac) * 255.0) as u8,
        ((c1[2] + (c2[2] - c1[2]) * frac) * 255.0) as u8,
    ]
}
