/// Debounced idle detector.
///
/// An explicit, owned timer handle: every [`arm`](Self::arm) pushes the
/// deadline out by the configured delay, and [`fire_due`](Self::fire_due)
/// reports exactly once when the deadline passed with no further arming in
/// between. There is no real timer behind this; the host's frame tick polls
/// it with the current time.
#[derive(Clone, Copy, Debug)]
pub struct RestDetector {
    deadline_ms: Option<u64>,
    delay_ms: u64,
}

impl RestDetector {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            deadline_ms: None,
            delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay for subsequent arms; an armed deadline stands.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// (Re)starts the debounce window at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// True exactly once after the armed deadline has passed; disarms.
    pub fn fire_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
