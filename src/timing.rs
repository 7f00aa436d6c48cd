//! Fixed timestep accumulator
//!
//! Wall time since the previous iteration is converted into fractional ticks
//! and added to `delta`. Every whole tick in `delta` is one simulation step:
//! a slow frame runs several steps to catch up, a fast frame runs none.

use std::time::Duration;

use crate::consts::NANOS_PER_TICK;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    nanos_per_tick: f64,
    /// Accumulated, not yet simulated ticks
    delta: f64,
    last_ns: u64,
}

impl FixedTimestep {
    /// Accumulator at the default tick rate, starting at `now_ns`
    pub fn new(now_ns: u64) -> Self {
        Self::with_tick_length(now_ns, NANOS_PER_TICK)
    }

    pub fn with_tick_length(now_ns: u64, nanos_per_tick: f64) -> Self {
        Self {
            nanos_per_tick,
            delta: 0.0,
            last_ns: now_ns,
        }
    }

    /// Add the time elapsed since the last call
    pub fn accumulate(&mut self, now_ns: u64) {
        let elapsed = now_ns.saturating_sub(self.last_ns);
        self.delta += elapsed as f64 / self.nanos_per_tick;
        self.last_ns = now_ns.max(self.last_ns);
    }

    /// Consume one whole tick if available
    pub fn try_consume(&mut self) -> bool {
        if self.delta >= 1.0 {
            self.delta -= 1.0;
            true
        } else {
            false
        }
    }

    /// Fractional ticks still pending
    pub fn pending(&self) -> f64 {
        self.delta
    }

    /// Wall time until the next whole tick is due
    pub fn until_next_tick(&self) -> Duration {
        let remaining = ((1.0 - self.delta) * self.nanos_per_tick).max(0.0);
        Duration::from_nanos(remaining as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(ts: &mut FixedTimestep) -> u32 {
        let mut n = 0;
        while ts.try_consume() {
            n += 1;
        }
        n
    }

    #[test]
    fn test_fast_frames_run_no_ticks() {
        let mut ts = FixedTimestep::with_tick_length(0, 1000.0);
        ts.accumulate(400);
        assert_eq!(drain(&mut ts), 0);
        ts.accumulate(800);
        assert_eq!(drain(&mut ts), 0);
        // Third frame crosses the boundary
        ts.accumulate(1200);
        assert_eq!(drain(&mut ts), 1);
        assert!((ts.pending() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_slow_frame_catches_up() {
        let mut ts = FixedTimestep::with_tick_length(0, 1000.0);
        ts.accumulate(3500);
        assert_eq!(drain(&mut ts), 3);
        assert!((ts.pending() - 0.5).abs() < 1e-9);
        ts.accumulate(4000);
        assert_eq!(drain(&mut ts), 1);
    }

    #[test]
    fn test_default_rate_is_sixty_hz() {
        let mut ts = FixedTimestep::new(0);
        ts.accumulate(1_000_000_000);
        let ticks = drain(&mut ts);
        // 60 ticks, give or take float error on the last one
        assert!((59..=60).contains(&ticks));
        ts.accumulate(2_000_000_000);
        let total = ticks + drain(&mut ts);
        assert!((119..=120).contains(&total));
    }

    #[test]
    fn test_clock_going_backwards_adds_nothing() {
        let mut ts = FixedTimestep::with_tick_length(5000, 1000.0);
        ts.accumulate(4000);
        assert_eq!(ts.pending(), 0.0);
        ts.accumulate(6000);
        assert_eq!(drain(&mut ts), 1);
    }

    #[test]
    fn test_until_next_tick() {
        let mut ts = FixedTimestep::with_tick_length(0, 1000.0);
        ts.accumulate(250);
        assert_eq!(ts.until_next_tick(), Duration::from_nanos(750));
        ts.accumulate(1000);
        assert_eq!(ts.until_next_tick(), Duration::ZERO);
    }
}
