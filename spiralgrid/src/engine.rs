use alloc::vec::Vec;

use crate::cache::VisibleSetCache;
use crate::kinematics::{Kinematics, Phase, ReleaseOutcome, TickOutcome};
use crate::options::GridOptions;
use crate::rest::RestDetector;
use crate::state::MotionState;
use crate::window::coord_window;
use crate::{GridCoord, GridItem, Vec2, Viewport};

/// A headless infinite-grid pan engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, clocks, or threads.
/// - Your host drives it by forwarding pointer/wheel events, viewport
///   sizes, and frame ticks, all with explicit `now_ms` timestamps.
/// - The visible set is exposed via zero-allocation iteration
///   (`for_each_visible`) plus an `on_change` callback.
///
/// Within one event the order is fixed: the offset mutates first, then the
/// visible window is recomputed, then the callback fires. A callback never
/// observes a visible set computed from a stale offset.
#[derive(Clone, Debug)]
pub struct GridEngine {
    options: GridOptions,
    kinematics: Kinematics,
    cache: VisibleSetCache,
    rest: RestDetector,
    viewport: Viewport,
    rest_position: Vec2,
    is_moving: bool,
    disposed: bool,
}

impl GridEngine {
    /// Creates a new engine and runs the initial update cycle.
    ///
    /// If `options.initial_viewport` is set, the visible set is populated
    /// immediately (and `on_change` fires for it).
    pub fn new(options: GridOptions) -> Self {
        let options = options.sanitized();
        sgdebug!(
            cell_size = options.cell_size,
            rest_delay_ms = options.rest_delay_ms,
            "GridEngine::new"
        );
        let kinematics = Kinematics::new(&options);
        let rest = RestDetector::new(options.rest_delay_ms);
        let viewport = options.initial_viewport.unwrap_or_default();
        let rest_position = options.initial_offset;
        let mut engine = Self {
            options,
            kinematics,
            cache: VisibleSetCache::new(),
            rest,
            viewport,
            rest_position,
            is_moving: false,
            disposed: false,
        };
        engine.refresh(0);
        engine
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn cell_size(&self) -> f32 {
        self.options.cell_size
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Read-only offset snapshot, valid at any time including mid-gesture.
    pub fn offset(&self) -> Vec2 {
        self.kinematics.offset()
    }

    pub fn velocity(&self) -> Vec2 {
        self.kinematics.velocity()
    }

    pub fn phase(&self) -> Phase {
        self.kinematics.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.kinematics.is_dragging()
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// The last offset at which the engine was confirmed idle.
    pub fn rest_position(&self) -> Vec2 {
        self.rest_position
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn motion_state(&self) -> MotionState {
        MotionState {
            offset: self.kinematics.offset(),
            velocity: self.kinematics.velocity(),
            is_dragging: self.kinematics.is_dragging(),
            is_moving: self.is_moving,
            rest_position: self.rest_position,
        }
    }

    /// Replaces the options wholesale and refreshes.
    ///
    /// Motion state (offset, velocity, phase) is preserved; only the tuning
    /// and the callback change. `initial_offset` and `initial_viewport` are
    /// construction-time fields and have no effect here.
    pub fn set_options(&mut self, options: GridOptions, now_ms: u64) {
        if self.disposed {
            return;
        }
        let options = options.sanitized();
        sgtrace!(cell_size = options.cell_size, "GridEngine::set_options");
        self.kinematics.set_tuning(&options);
        self.rest.set_delay_ms(options.rest_delay_ms);
        self.options = options;
        self.refresh(now_ms);
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`set_options`](Self::set_options).
    pub fn update_options(&mut self, f: impl FnOnce(&mut GridOptions), now_ms: u64) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    /// Subscribes a listener for visible-set / moving-flag changes.
    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&GridEngine, bool) + Send + Sync + 'static>,
    ) {
        if self.disposed {
            return;
        }
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    pub fn visible_len(&self) -> usize {
        self.cache.len()
    }

    pub fn visible_item(&self, coord: GridCoord) -> Option<GridItem> {
        self.cache.get(coord)
    }

    /// Iterates over the visible cells without allocations.
    pub fn for_each_visible(&self, f: impl FnMut(&GridItem)) {
        self.cache.for_each(f);
    }

    /// Collects the visible cells into `out` (clears `out` first).
    pub fn collect_visible(&self, out: &mut Vec<GridItem>) {
        self.cache.collect_into(out);
    }

    /// Begins a drag at pointer position `p`. Cancels any coasting.
    pub fn pointer_down(&mut self, p: Vec2, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.kinematics.pointer_down(p, now_ms);
    }

    /// Applies a pointer move; while dragging this pans the grid and
    /// recomputes visibility synchronously.
    pub fn pointer_move(&mut self, p: Vec2, now_ms: u64) {
        if self.disposed {
            return;
        }
        if self.kinematics.pointer_move(p, now_ms) {
            self.refresh(now_ms);
        }
    }

    /// Ends a drag. A tap (travel below the threshold) settles the engine
    /// immediately; a real drag starts coasting, to be advanced by
    /// [`tick`](Self::tick).
    pub fn pointer_up(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        match self.kinematics.pointer_up() {
            Some(ReleaseOutcome::Tap) => {
                if self.is_moving {
                    self.is_moving = false;
                    self.notify();
                }
                self.rest.arm(now_ms);
            }
            Some(ReleaseOutcome::Coast) => {
                self.rest.arm(now_ms);
            }
            None => {}
        }
    }

    /// Pans directly by the (inverted) wheel delta.
    pub fn wheel(&mut self, delta: Vec2, now_ms: u64) {
        if self.disposed {
            return;
        }
        if self.kinematics.wheel(delta) {
            self.refresh(now_ms);
        }
    }

    /// Reports a new viewport size and recomputes visibility.
    ///
    /// This is the entry point for an external size observer; it only
    /// writes dimensions and requests a recomputation, motion state is
    /// untouched.
    pub fn set_viewport(&mut self, viewport: Viewport, now_ms: u64) {
        if self.disposed || self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.refresh(now_ms);
    }

    /// Advances the engine by one frame: applies at most one coasting step
    /// and polls the rest debounce.
    ///
    /// Returns `true` while the engine wants another tick (still coasting,
    /// or the rest debounce is pending). After `dispose` this is always
    /// `false` and has no observable effect.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }

        match self.kinematics.tick(now_ms) {
            TickOutcome::Advanced | TickOutcome::Stopped => self.refresh(now_ms),
            TickOutcome::Waiting | TickOutcome::Inactive => {}
        }

        if self.rest.fire_due(now_ms) {
            self.rest_position = self.kinematics.offset();
            if self.is_moving {
                self.is_moving = false;
                self.notify();
            }
        }

        self.wants_tick()
    }

    /// True while the host should keep scheduling frame ticks.
    pub fn wants_tick(&self) -> bool {
        !self.disposed && (self.kinematics.phase() == Phase::Coasting || self.rest.is_armed())
    }

    /// Zeroes any momentum and returns to idle without moving the offset.
    pub fn halt(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.kinematics.halt();
        self.rest.arm(now_ms);
    }

    /// Releases the engine: cancels the pending rest deadline, stops any
    /// coasting, and silences every subsequent operation. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        sgdebug!("GridEngine::dispose");
        self.disposed = true;
        self.rest.cancel();
        self.kinematics.halt();
    }

    /// One update cycle: window -> reconcile -> eager moving flag ->
    /// notify -> arm the rest debounce.
    fn refresh(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }

        let offset = self.kinematics.offset();
        let changed = match coord_window(self.viewport, offset, self.options.cell_size) {
            Some(window) => self.cache.reconcile(&window),
            None => self.cache.reconcile_empty(),
        };

        // Eager moving flag so hosts can react before the debounce settles.
        let moving = offset.distance(self.rest_position) > self.options.rest_distance;
        let moving_changed = moving != self.is_moving;
        self.is_moving = moving;

        if changed || moving_changed {
            sgtrace!(
                visible = self.cache.len(),
                moving,
                ox = offset.x,
                oy = offset.y,
                "refresh"
            );
            self.notify();
        }

        self.rest.arm(now_ms);
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_moving);
        }
    }
}
