use alloc::sync::Arc;

use crate::engine::GridEngine;
use crate::{Vec2, Viewport};

/// A callback fired when the engine's visible set or moving flag changes.
///
/// The second argument is `is_moving`.
pub type OnChangeCallback = Arc<dyn Fn(&GridEngine, bool) + Send + Sync>;

/// Configuration for [`crate::GridEngine`].
///
/// The defaults are tuned for pointer-driven panning at 60 fps; every
/// constant is plain configuration, not law. Cheap to clone: the only heavy
/// field is the `Arc`'d callback.
#[derive(Clone)]
pub struct GridOptions {
    /// Size of one square cell in pixels. Must be strictly positive;
    /// degenerate values fall back to 1.0.
    pub cell_size: f32,
    /// Pan offset at construction.
    pub initial_offset: Vec2,
    /// Viewport size at construction, if already measured. Until a size is
    /// known the visible set stays empty.
    pub initial_viewport: Option<Viewport>,

    /// Per-tick velocity decay factor while coasting.
    pub friction: f32,
    /// Speed below which coasting snaps to a full stop.
    pub min_velocity: f32,
    /// Speed below which friction is additionally scaled by
    /// `speed / velocity_threshold` (harder braking near the stop).
    pub velocity_threshold: f32,
    /// How many recent pointer samples are averaged into the release
    /// velocity. Clamped to at least 1.
    pub velocity_history: usize,
    /// Minimum interval between applied coasting steps, in ms.
    pub tick_interval_ms: u64,
    /// Pointer travel (px) below which a press/release pair is a tap.
    pub tap_threshold: f32,
    /// Idle time (ms) after the last offset change before the rest
    /// position latches and `is_moving` settles to `false`.
    pub rest_delay_ms: u64,
    /// Distance (px) from the rest position beyond which the engine
    /// eagerly reports itself moving.
    pub rest_distance: f32,

    /// Optional callback fired when the visible set or moving flag changes.
    pub on_change: Option<OnChangeCallback>,
}

impl GridOptions {
    /// Creates options with the default tuning for a given cell size.
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            initial_offset: Vec2::ZERO,
            initial_viewport: None,
            friction: 0.9,
            min_velocity: 0.2,
            velocity_threshold: 0.3,
            velocity_history: 5,
            tick_interval_ms: 16,
            tap_threshold: 5.0,
            rest_delay_ms: 200,
            rest_distance: 5.0,
            on_change: None,
        }
    }

    pub fn with_initial_offset(mut self, initial_offset: Vec2) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_viewport(mut self, initial_viewport: Option<Viewport>) -> Self {
        self.initial_viewport = initial_viewport;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f32) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_velocity_history(mut self, velocity_history: usize) -> Self {
        self.velocity_history = velocity_history;
        self
    }

    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    pub fn with_tap_threshold(mut self, tap_threshold: f32) -> Self {
        self.tap_threshold = tap_threshold;
        self
    }

    pub fn with_rest_delay_ms(mut self, rest_delay_ms: u64) -> Self {
        self.rest_delay_ms = rest_delay_ms;
        self
    }

    pub fn with_rest_distance(mut self, rest_distance: f32) -> Self {
        self.rest_distance = rest_distance;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GridEngine, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Replaces out-of-domain numeric fields with usable values.
    pub(crate) fn sanitized(mut self) -> Self {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            sgwarn!(cell_size = self.cell_size, "invalid cell_size, using 1.0");
            self.cell_size = 1.0;
        }
        self.velocity_history = self.velocity_history.max(1);
        self
    }
}

impl core::fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("cell_size", &self.cell_size)
            .field("initial_offset", &self.initial_offset)
            .field("initial_viewport", &self.initial_viewport)
            .field("friction", &self.friction)
            .field("min_velocity", &self.min_velocity)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("velocity_history", &self.velocity_history)
            .field("tick_interval_ms", &self.tick_interval_ms)
            .field("tap_threshold", &self.tap_threshold)
            .field("rest_delay_ms", &self.rest_delay_ms)
            .field("rest_distance", &self.rest_distance)
            .finish_non_exhaustive()
    }
}
