use std::time::Duration;

/// Decides which render frames also run a game tick.
///
/// Frame time accumulates until it reaches the tick interval; the tick then
/// fires and the accumulator starts over from zero.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Add one frame's elapsed time; returns true when a tick is due
    pub fn advance(&mut self, frame_time: Duration) -> bool {
        self.accumulated += frame_time;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
