//! Frame pacing.

use std::time::{Duration, Instant};

pub trait FrameClock {
    /// Block until one frame interval has passed since the previous tick.
    fn tick(&mut self);
}

/// Sleeps away whatever is left of the frame budget.
#[derive(Debug)]
pub struct FixedRateClock {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
