//! # Game Mathematics
//!
//! Fixed-timestep accounting for the frame loop.

use std::time::Duration;

/// Default cap on ticks simulated in a single frame.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Converts variable frame times into a whole number of fixed ticks.
///
/// Leftover time carries over to the next frame. When a frame owes more
/// than `max_ticks_per_frame` ticks the backlog is dropped.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tamers::FixedTimestep;
///
/// let mut timestep = FixedTimestep::new(Duration::from_millis(10));
/// assert_eq!(timestep.advance(Duration::from_millis(25)), 2);
/// assert_eq!(timestep.advance(Duration::from_millis(5)), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    pub max_ticks_per_frame: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
        }
    }

    /// Timestep running at `ticks_per_second`.
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(ticks_per_second.max(1))))
    }

    /// Duration of one tick.
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time accumulated towards the next tick.
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Adds a frame's elapsed time and returns how many ticks to run.
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.step {
            if ticks == self.max_ticks_per_frame {
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frames_accumulate() {
        let mut timestep = FixedTimestep::new(Duration::from_millis(16));
        assert_eq!(timestep.advance(Duration::from_millis(10)), 0);
        assert_eq!(timestep.advance(Duration::from_millis(10)), 1);
        assert_eq!(timestep.pending(), Duration::from_millis(4));
    }

    #[test]
    fn test_stall_is_capped() {
        let mut timestep = FixedTimestep::new(Duration::from_millis(10));
        assert_eq!(timestep.advance(Duration::from_secs(2)), MAX_TICKS_PER_FRAME);
        assert_eq!(timestep.pending(), Duration::ZERO);
        assert_eq!(timestep.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_from_rate() {
        let timestep = FixedTimestep::from_rate(50);
        assert_eq!(timestep.step(), Duration::from_millis(20));
    }
}
