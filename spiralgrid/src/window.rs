use crate::{GridCoord, Vec2, Viewport, math};

/// The inclusive rectangle of grid coordinates to materialize for a
/// viewport/offset pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordWindow {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl CoordWindow {
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    pub fn len(&self) -> usize {
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return 0;
        }
        let w = self.max.x as i64 - self.min.x as i64 + 1;
        let h = self.max.y as i64 - self.min.y as i64 + 1;
        (w * h) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` with every coordinate in the window, row-major (y outer).
    pub fn for_each(&self, mut f: impl FnMut(GridCoord)) {
        for y in self.min.y..=self.max.y {
            for x in self.min.x..=self.max.x {
                f(GridCoord::new(x, y));
            }
        }
    }

    /// Iterates the window row-major (y outer, x inner).
    pub fn iter(self) -> impl Iterator<Item = GridCoord> {
        let Self { min, max } = self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| GridCoord::new(x, y)))
    }
}

/// Computes the window of grid coordinates needed to cover the viewport at
/// the given pan offset.
///
/// The center coordinate is `round(-offset / cell_size)` per axis and the
/// window extends `ceil(ceil(dim / cell_size) / 2)` coordinates to each
/// side, inclusive. That over-covers by up to one ring per edge so sub-cell
/// offset changes never reveal an unmaterialized cell.
///
/// Returns `None` while the viewport is unmeasured (either dimension not
/// strictly positive) or `cell_size` is degenerate.
pub fn coord_window(viewport: Viewport, offset: Vec2, cell_size: f32) -> Option<CoordWindow> {
    if viewport.is_empty() || !(cell_size > 0.0) {
        return None;
    }

    let cells_x = math::ceil(viewport.width / cell_size);
    let cells_y = math::ceil(viewport.height / cell_size);

    let center_x = math::round(-offset.x / cell_size);
    let center_y = math::round(-offset.y / cell_size);

    let half_x = math::ceil(cells_x / 2.0);
    let half_y = math::ceil(cells_y / 2.0);

    // Float -> int `as` casts saturate, which bounds the window at the edge
    // of the addressable grid instead of wrapping.
    let min = GridCoord::new((center_x - half_x) as i32, (center_y - half_y) as i32);
    let max = GridCoord::new((center_x + half_x) as i32, (center_y + half_y) as i32);

    Some(CoordWindow { min, max })
}
