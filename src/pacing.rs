use crate::constants::PACING_DELAY;
use std::thread;
use std::time::Duration;

/// Gate invoked between consecutive uploads. Injected into the batch driver
/// so pacing policy can be swapped out (or recorded) in tests.
pub trait Pacer {
    fn pause(&mut self);
}

/// Sleeps for a fixed interval on every call. This is an unconditional
/// delay, not driven by observed rate-limit responses.
#[derive(Debug, Clone)]
pub struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedIntervalPacer {
    fn default() -> Self {
        Self::new(PACING_DELAY)
    }
}

impl Pacer for FixedIntervalPacer {
    fn pause(&mut self) {
        thread::sleep(self.interval);
    }
}
