use spiralgrid::{GridEngine, GridOptions, Phase, Vec2, Viewport};

/// A framework-neutral controller that wraps a `spiralgrid::GridEngine` and
/// provides the common adapter workflow (event forwarding, frame scheduling).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` / `on_wheel`
///   when UI events occur
/// - `on_viewport_size` when a size observer reports new dimensions
/// - `tick(now_ms)` each frame while [`wants_tick`](Self::wants_tick) holds
///
/// For UI layers that own a transform (e.g. a translated container), the
/// offset returned from `tick()` is the new translation to apply.
#[derive(Clone, Debug)]
pub struct Controller {
    engine: GridEngine,
}

impl Controller {
    pub fn new(options: GridOptions) -> Self {
        Self {
            engine: GridEngine::new(options),
        }
    }

    pub fn from_engine(engine: GridEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GridEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> GridEngine {
        self.engine
    }

    pub fn is_coasting(&self) -> bool {
        self.engine.phase() == Phase::Coasting
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32, now_ms: u64) {
        self.engine.pointer_down(Vec2::new(x, y), now_ms);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: u64) {
        self.engine.pointer_move(Vec2::new(x, y), now_ms);
    }

    pub fn on_pointer_up(&mut self, now_ms: u64) {
        self.engine.pointer_up(now_ms);
    }

    pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32, now_ms: u64) {
        self.engine.wheel(Vec2::new(delta_x, delta_y), now_ms);
    }

    /// Call this when the UI reports new viewport dimensions.
    pub fn on_viewport_size(&mut self, width: f32, height: f32, now_ms: u64) {
        self.engine.set_viewport(Viewport::new(width, height), now_ms);
    }

    /// Advances the controller by one frame.
    ///
    /// Returns the new pan offset when the frame moved the grid, `None`
    /// otherwise (idle, debouncing, or inside the tick interval).
    pub fn tick(&mut self, now_ms: u64) -> Option<Vec2> {
        let before = self.engine.offset();
        self.engine.tick(now_ms);
        let after = self.engine.offset();
        (after != before).then_some(after)
    }

    /// True while the adapter should keep scheduling frames.
    pub fn wants_tick(&self) -> bool {
        self.engine.wants_tick()
    }

    /// Stops any coasting in place (e.g. on focus loss).
    pub fn halt(&mut self, now_ms: u64) {
        self.engine.halt(now_ms);
    }
}
