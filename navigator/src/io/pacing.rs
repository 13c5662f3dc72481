//! Pacing between driver steps so an observer can keep up.

use std::thread;
use std::time::Duration;

use tracing::trace;

pub trait Pacer {
    fn pause(&self, delay: Duration);
}

/// Blocks the current thread for the requested delay.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        trace!(delay_ms = delay.as_millis() as u64, "pacing");
        thread::sleep(delay);
    }
}

/// Never waits. Outcomes do not depend on pacing, so tests and batch runs use this.
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self, _delay: Duration) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn sleep_pacer_skips_zero_delay() {
        let start = Instant::now();
        SleepPacer.pause(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn sleep_pacer_waits_at_least_delay() {
        let start = Instant::now();
        SleepPacer.pause(Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
