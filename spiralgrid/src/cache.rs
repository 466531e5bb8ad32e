#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use alloc::vec::Vec;

use crate::spiral::spiral_index;
use crate::window::CoordWindow;
use crate::{GridCoord, GridItem};

#[cfg(feature = "std")]
type CoordMap = HashMap<GridCoord, GridItem>;
#[cfg(not(feature = "std"))]
type CoordMap = BTreeMap<GridCoord, GridItem>;

/// Memoized coordinate -> item mapping for the currently visible window.
///
/// Coordinates that stay visible across reconciliations keep their
/// [`GridItem`] untouched, so the spiral index a cell was first assigned
/// never changes while the cell remains on screen. Iteration order over the
/// set is unspecified.
#[derive(Clone, Debug, Default)]
pub struct VisibleSetCache {
    items: CoordMap,
    scratch: CoordMap,
}

impl VisibleSetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the visible set for `window`, reusing existing items.
    ///
    /// Returns `true` iff membership changed: some coordinate entered or
    /// left the set. Reconciling the same window twice returns `false` the
    /// second time.
    pub fn reconcile(&mut self, window: &CoordWindow) -> bool {
        let mut changed = false;

        self.scratch.clear();
        window.for_each(|coord| {
            let item = match self.items.get(&coord) {
                Some(item) => *item,
                None => {
                    changed = true;
                    GridItem {
                        coord,
                        index: spiral_index(coord),
                    }
                }
            };
            self.scratch.insert(coord, item);
        });

        // Anything dropped shows up as a size difference; a same-size swap
        // with different membership was already caught by an insertion.
        if self.scratch.len() != self.items.len() {
            changed = true;
        }

        core::mem::swap(&mut self.items, &mut self.scratch);
        changed
    }

    /// Clears the set (degenerate viewport). Returns `true` iff it was
    /// non-empty.
    pub fn reconcile_empty(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, coord: GridCoord) -> Option<GridItem> {
        self.items.get(&coord).copied()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        self.items.contains_key(&coord)
    }

    /// Iterates over the visible items without allocations.
    pub fn for_each(&self, mut f: impl FnMut(&GridItem)) {
        for item in self.items.values() {
            f(item);
        }
    }

    /// Collects the visible items into `out` (clears `out` first).
    pub fn collect_into(&self, out: &mut Vec<GridItem>) {
        out.clear();
        out.reserve(self.items.len());
        self.for_each(|item| out.push(*item));
    }
}
