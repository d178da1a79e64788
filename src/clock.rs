// src/clock.rs
//
// Fixed-rate ticks on top of nannou's per-frame updates, so animation speed
// does not depend on the display refresh rate.

use std::time::Duration;

const MAX_TICKS_PER_FRAME: u32 = 8;

#[derive(Debug, Clone)]
pub struct TickClock {
    tick: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulated: Duration::ZERO,
        }
    }

    /// Adds a frame's elapsed time and returns how many ticks to run now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            ticks += 1;
        }
        if ticks > MAX_TICKS_PER_FRAME {
            // drop the backlog after a stall
            self.accumulated = Duration::ZERO;
            ticks = MAX_TICKS_PER_FRAME;
        }
        ticks
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = TickClock::new(60);
        let half = clock.tick_duration() / 2;
        assert_eq!(clock.advance(half), 0);
        assert_eq!(clock.advance(half), 1);
        assert_eq!(clock.advance(half), 0);
    }

    #[test]
    fn test_fast_display_still_ticks_at_rate() {
        let mut clock = TickClock::new(60);
        let frame = Duration::from_secs(1) / 144;
        let total: u32 = (0..144).map(|_| clock.advance(frame)).sum();
        assert!((59..=60).contains(&total), "got {} ticks", total);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(Duration::from_secs(2)), MAX_TICKS_PER_FRAME);
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let clock = TickClock::new(0);
        assert_eq!(clock.tick_duration(), Duration::from_secs(1));
    }
}
