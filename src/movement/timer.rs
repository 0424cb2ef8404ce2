//! Movement domain: countdown timers clamped to a fixed window.

/// A countdown value that always stays within `[0, max]`.
///
/// Used for coyote time and jump buffering: `reset` opens the window,
/// `tick` closes it as time passes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClampedTimer {
    value: f32,
    max: f32,
}

impl ClampedTimer {
    /// Create a timer with the given window. The timer starts expired.
    pub fn new(max: f32) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self { value: 0.0, max }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Open the full window.
    pub fn reset(&mut self) {
        self.value = self.max;
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Set the remaining time, clamped into the window.
    pub fn set(&mut self, value: f32) {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max)
        };
    }

    /// Count down by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        // A negative delta must not reopen the window.
        let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
        self.set(self.value - dt);
    }

    pub fn is_running(&self) -> bool {
        self.value > 0.0
    }
}
