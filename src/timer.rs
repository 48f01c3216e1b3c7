/// A periodic timer driven by the frame delta.
///
/// Behaves like a repeating browser interval: the first firing happens one full
/// period after `start()`, and `stop()` cancels whatever time was pending.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl Interval {
    /// Creates a stopped interval. `period` must be positive.
    pub fn new(period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self { period, elapsed: 0.0, running: false }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time accumulated since the last firing.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advances the timer and returns how many times it fired during `dt`.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let fired = (self.elapsed / self.period).floor();
        self.elapsed = (self.elapsed - fired * self.period).max(0.0);
        fired as u32
    }
}
