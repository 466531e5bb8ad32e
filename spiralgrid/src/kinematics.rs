use alloc::collections::VecDeque;

use crate::Vec2;
use crate::options::GridOptions;

/// Drag/coast phase of the pan state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Coasting,
}

/// What a pointer release turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseOutcome {
    /// Travel stayed below the tap threshold; no inertia.
    Tap,
    /// The gesture had momentum; coasting starts.
    Coast,
}

/// Result of one call to [`Kinematics::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    /// Not coasting; nothing to advance.
    Inactive,
    /// Coasting, but still inside the minimum tick interval.
    Waiting,
    /// One velocity step was applied to the offset.
    Advanced,
    /// Speed fell below the floor; velocity is now zero and the phase is
    /// back to idle.
    Stopped,
}

/// The pan state machine: pointer and wheel input in, offset out.
///
/// Time is explicit. Every operation that needs a clock takes `now_ms`; the
/// engine never reads one itself and owns no threads or timers. Cancelling
/// coasting is a phase change, so a tick scheduled by the host before a
/// `pointer_down` simply lands on [`TickOutcome::Inactive`].
#[derive(Clone, Debug)]
pub struct Kinematics {
    offset: Vec2,
    velocity: Vec2,
    phase: Phase,
    /// Pointer position minus offset at drag start; keeps the grabbed point
    /// under the pointer for the whole gesture.
    anchor: Vec2,
    /// Raw pointer position at drag start, for tap detection.
    drag_origin: Vec2,
    last_pointer: Vec2,
    last_move_ms: u64,
    last_tick_ms: Option<u64>,
    samples: VecDeque<Vec2>,

    friction: f32,
    min_velocity: f32,
    velocity_threshold: f32,
    history_cap: usize,
    tick_interval_ms: u64,
    tap_threshold: f32,
}

impl Kinematics {
    pub fn new(options: &GridOptions) -> Self {
        Self {
            offset: options.initial_offset,
            velocity: Vec2::ZERO,
            phase: Phase::Idle,
            anchor: Vec2::ZERO,
            drag_origin: Vec2::ZERO,
            last_pointer: Vec2::ZERO,
            last_move_ms: 0,
            last_tick_ms: None,
            samples: VecDeque::with_capacity(options.velocity_history.max(1)),
            friction: options.friction,
            min_velocity: options.min_velocity,
            velocity_threshold: options.velocity_threshold,
            history_cap: options.velocity_history.max(1),
            tick_interval_ms: options.tick_interval_ms,
            tap_threshold: options.tap_threshold,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Starts a drag. Any in-flight coasting is cancelled.
    pub fn pointer_down(&mut self, p: Vec2, now_ms: u64) {
        sgtrace!(x = p.x, y = p.y, now_ms, "pointer_down");
        self.phase = Phase::Dragging;
        self.velocity = Vec2::ZERO;
        self.samples.clear();
        self.anchor = p - self.offset;
        self.drag_origin = p;
        self.last_pointer = p;
        self.last_move_ms = now_ms;
        self.last_tick_ms = None;
    }

    /// Applies a pointer move while dragging.
    ///
    /// Returns `true` when the offset changed (the caller must recompute
    /// visibility synchronously). No-op outside a drag.
    pub fn pointer_move(&mut self, p: Vec2, now_ms: u64) -> bool {
        if self.phase != Phase::Dragging {
            return false;
        }

        // A zero elapsed interval counts as one ms so a burst of events in
        // the same timestamp cannot blow up the velocity estimate.
        let dt = now_ms.saturating_sub(self.last_move_ms).max(1) as f32;
        let raw = (p - self.last_pointer) * (1.0 / dt);

        if self.samples.len() == self.history_cap {
            self.samples.pop_front();
        }
        self.samples.push_back(raw);

        let inv = 1.0 / self.samples.len() as f32;
        let mut mean = Vec2::ZERO;
        for sample in &self.samples {
            mean += *sample * inv;
        }
        self.velocity = mean;

        self.offset = p - self.anchor;
        self.last_pointer = p;
        self.last_move_ms = now_ms;
        true
    }

    /// Ends a drag. Returns `None` if no drag was in progress.
    pub fn pointer_up(&mut self) -> Option<ReleaseOutcome> {
        if self.phase != Phase::Dragging {
            return None;
        }

        let travel = self.drag_origin.distance(self.last_pointer);
        if travel < self.tap_threshold {
            sgtrace!(travel, "pointer_up: tap");
            self.phase = Phase::Idle;
            self.velocity = Vec2::ZERO;
            Some(ReleaseOutcome::Tap)
        } else {
            sgtrace!(travel, vx = self.velocity.x, vy = self.velocity.y, "pointer_up: coast");
            self.phase = Phase::Coasting;
            Some(ReleaseOutcome::Coast)
        }
    }

    /// Applies a wheel delta (inverted sign) and kills any momentum.
    ///
    /// Returns `true` when the offset changed. Ignored while dragging: the
    /// pointer, not the wheel, owns the offset mid-gesture. The phase is
    /// never changed; a zeroed velocity lets the next coasting tick stop on
    /// its own.
    pub fn wheel(&mut self, delta: Vec2) -> bool {
        if self.phase == Phase::Dragging {
            return false;
        }
        self.offset -= delta;
        self.velocity = Vec2::ZERO;
        true
    }

    /// Advances coasting by at most one step.
    ///
    /// Steps are gated at the configured minimum interval. Below the
    /// velocity threshold the friction factor is scaled down with the speed
    /// itself, which brakes harder near the stop and kills the long faint
    /// drift a constant factor would produce; below the floor the velocity
    /// snaps to exactly zero.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.phase != Phase::Coasting {
            return TickOutcome::Inactive;
        }

        if let Some(last) = self.last_tick_ms {
            if now_ms.saturating_sub(last) < self.tick_interval_ms {
                return TickOutcome::Waiting;
            }
        }

        let speed = self.velocity.length();
        if speed < self.min_velocity {
            self.velocity = Vec2::ZERO;
            self.phase = Phase::Idle;
            self.last_tick_ms = None;
            sgtrace!("tick: stopped");
            return TickOutcome::Stopped;
        }

        let decay = if speed >= self.velocity_threshold {
            self.friction
        } else {
            self.friction * (speed / self.velocity_threshold)
        };

        self.offset += self.velocity;
        self.velocity = self.velocity * decay;
        self.last_tick_ms = Some(now_ms);
        TickOutcome::Advanced
    }

    /// Applies new tuning without touching the motion state.
    pub fn set_tuning(&mut self, options: &GridOptions) {
        self.friction = options.friction;
        self.min_velocity = options.min_velocity;
        self.velocity_threshold = options.velocity_threshold;
        self.history_cap = options.velocity_history.max(1);
        while self.samples.len() > self.history_cap {
            self.samples.pop_front();
        }
        self.tick_interval_ms = options.tick_interval_ms;
        self.tap_threshold = options.tap_threshold;
    }

    /// Zeroes the velocity and returns to idle (disposal/cancellation).
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.phase = Phase::Idle;
        self.last_tick_ms = None;
    }
}
