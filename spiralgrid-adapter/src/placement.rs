use alloc::vec::Vec;

use spiralgrid::{GridCoord, GridEngine, GridItem};

/// A visible cell resolved to a screen-space square.
///
/// `x`/`y` are the top-left corner in viewport pixels; the origin cell sits
/// centered in the viewport at zero offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPlacement {
    pub index: u64,
    pub coord: GridCoord,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Resolves one visible item to its screen rectangle.
pub fn cell_placement(engine: &GridEngine, item: &GridItem) -> CellPlacement {
    let size = engine.cell_size();
    let viewport = engine.viewport();
    let offset = engine.offset();
    CellPlacement {
        index: item.index,
        coord: item.coord,
        x: item.coord.x as f32 * size + viewport.width / 2.0 - size / 2.0 + offset.x,
        y: item.coord.y as f32 * size + viewport.height / 2.0 - size / 2.0 + offset.y,
        size,
    }
}

/// Calls `f` with the placement of every visible cell, without allocations.
pub fn for_each_placement(engine: &GridEngine, mut f: impl FnMut(CellPlacement)) {
    engine.for_each_visible(|item| f(cell_placement(engine, item)));
}

/// Collects the placements of all visible cells into `out` (clears `out`
/// first). Order is unspecified; sort by `index` for deterministic z-order.
pub fn collect_placements(engine: &GridEngine, out: &mut Vec<CellPlacement>) {
    out.clear();
    out.reserve(engine.visible_len());
    for_each_placement(engine, |placement| out.push(placement));
}
