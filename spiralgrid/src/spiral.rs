//! Spiral enumeration of the integer grid.
//!
//! Coordinates are numbered outward from the origin ring by ring (Chebyshev
//! distance). Ring `L >= 1` holds exactly `8L` cells and occupies the index
//! range `[(2L - 1)^2, (2L + 1)^2)`, so the mapping is a bijection from the
//! integer grid onto the non-negative integers.

use crate::GridCoord;

/// Chebyshev ring number of a coordinate (0 for the origin).
pub fn spiral_layer(coord: GridCoord) -> u32 {
    coord.x.unsigned_abs().max(coord.y.unsigned_abs())
}

/// Maps a grid coordinate to its content index.
///
/// Each ring starts at its middle-right cell `(L, 0)`, runs down the right
/// edge, across the bottom, up the left edge, across the top, and back down
/// to just below the start. The branches below are evaluated in a fixed
/// order so every corner lands on exactly one edge; reordering them would
/// renumber cells and detach content from coordinates.
///
/// Exact for every coordinate with `max(|x|, |y|) <= i32::MAX`; the few
/// cells past that on the outermost ring saturate.
pub fn spiral_index(coord: GridCoord) -> u64 {
    let x = coord.x as i64;
    let y = coord.y as i64;
    if x == 0 && y == 0 {
        return 0;
    }

    let layer = x.abs().max(y.abs());
    let side = (2 * layer - 1) as u64;
    let inner = side * side;

    let pos = if y == 0 && x == layer {
        // Ring start, middle right.
        0
    } else if y < 0 && x == layer {
        // Right edge, lower half.
        -y
    } else if y == -layer && x > -layer {
        // Bottom edge.
        layer + (layer - x)
    } else if x == -layer && y < layer {
        // Left edge.
        3 * layer + (layer + y)
    } else if y == layer && x < layer {
        // Top edge.
        5 * layer + (layer + x)
    } else {
        // Right edge, upper half.
        7 * layer + (layer - y)
    };

    inner.saturating_add(pos as u64)
}
