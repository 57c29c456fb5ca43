//! Hex id parsing and offset-grid adjacency
//!
//! The world map addresses cells by column letter + row number ("f12").
//! Columns use a bijective letter encoding (a=0 .. z=25, aa=26, ...); rows
//! are the trailing integer. Adjacency is a flat-topped offset grid, so the
//! six neighbor offsets depend on column parity.

use thiserror::Error;

/// Error raised for ids that do not match `letters+digits`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexIdError {
    #[error("invalid hex id format: {0:?} (expected letters+digits, e.g. \"f12\")")]
    InvalidIdFormat(String),
}

/// Parsed hex coordinate. Column is zero-based, row is the literal integer
/// from the id (rows start at 1 on the map).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCoord {
    pub col: i32,
    pub row: i32,
}

/// Neighbor offsets (column delta, row delta) for even columns.
pub const OFFSETS_EVEN: [(i32, i32); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Neighbor offsets (column delta, row delta) for odd columns.
pub const OFFSETS_ODD: [(i32, i32); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Offset table for a column, chosen by parity.
pub fn offsets_for(col: i32) -> &'static [(i32, i32); 6] {
    if col % 2 == 0 {
        &OFFSETS_EVEN
    } else {
        &OFFSETS_ODD
    }
}

/// Parse a hex id into coordinates.
///
/// The id must be a run of lowercase letters followed by a run of digits,
/// with nothing else. Anything that doesn't match fails with
/// [`HexIdError::InvalidIdFormat`].
pub fn parse_hex_id(id: &str) -> Result<HexCoord, HexIdError> {
    let invalid = || HexIdError::InvalidIdFormat(id.to_string());

    let letters_end = id
        .bytes()
        .position(|b| !b.is_ascii_lowercase())
        .unwrap_or(id.len());
    let (letters, digits) = id.split_at(letters_end);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Bijective base-26: a=0 .. z=25, aa=26. A run long enough to overflow
    // the column index is not a real map coordinate.
    if letters.len() > 6 {
        return Err(invalid());
    }
    let mut col: i64 = 0;
    for b in letters.bytes() {
        col = col * 26 + i64::from(b - b'a' + 1);
    }
    let col = col - 1;

    let row: i32 = digits.parse().map_err(|_| invalid())?;

    Ok(HexCoord {
        col: col as i32,
        row,
    })
}

/// Format coordinates back into a hex id. Column must be non-negative.
pub fn format_hex_id(col: i32, row: i32) -> String {
    let mut letters = String::new();
    let mut c = col;
    loop {
        letters.insert(0, (b'a' + (c % 26) as u8) as char);
        c = c / 26 - 1;
        if c < 0 {
            break;
        }
    }
    format!("{}{}", letters, row)
}

/// The six neighbor coordinate candidates of a cell, in offset-table order.
/// Candidates may lie outside the grid; resolution against the node set and
/// the edge policy happens in the graph layer.
pub fn neighbor_coords(coord: HexCoord) -> [HexCoord; 6] {
    let offsets = offsets_for(coord.col);
    let mut out = [coord; 6];
    for (slot, (dc, dr)) in out.iter_mut().zip(offsets.iter()) {
        slot.col = coord.col + dc;
        slot.row = coord.row + dr;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_id() {
        assert_eq!(parse_hex_id("a1"), Ok(HexCoord { col: 0, row: 1 }));
        assert_eq!(parse_hex_id("f12"), Ok(HexCoord { col: 5, row: 12 }));
        assert_eq!(parse_hex_id("z99"), Ok(HexCoord { col: 25, row: 99 }));
    }

    #[test]
    fn test_parse_multi_letter_column() {
        assert_eq!(parse_hex_id("aa7"), Ok(HexCoord { col: 26, row: 7 }));
        assert_eq!(parse_hex_id("ab7"), Ok(HexCoord { col: 27, row: 7 }));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for id in ["", "f", "12", "12f", "f12x", "F12", "f-1", "f 2"] {
            assert_eq!(
                parse_hex_id(id),
                Err(HexIdError::InvalidIdFormat(id.to_string())),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_format_round_trips() {
        for (col, row) in [(0, 1), (5, 12), (25, 99), (26, 7), (51, 3)] {
            let id = format_hex_id(col, row);
            assert_eq!(parse_hex_id(&id), Ok(HexCoord { col, row }), "id {}", id);
        }
    }

    #[test]
    fn test_even_column_neighbors() {
        // c5 (col 2, even): west pair, vertical pair, east pair
        let coords = neighbor_coords(HexCoord { col: 2, row: 5 });
        let ids: Vec<String> = coords.iter().map(|c| format_hex_id(c.col, c.row)).collect();
        assert_eq!(ids, ["b5", "b6", "c4", "c6", "d5", "d6"]);
    }

    #[test]
    fn test_odd_column_neighbors() {
        // b5 (col 1, odd)
        let coords = neighbor_coords(HexCoord { col: 1, row: 5 });
        let ids: Vec<String> = coords.iter().map(|c| format_hex_id(c.col, c.row)).collect();
        assert_eq!(ids, ["a4", "a5", "b4", "b6", "c4", "c5"]);
    }
}
