//! Fixed-timestep clock.
//!
//! Wall-clock deltas accumulate here and are converted into whole simulation
//! steps plus a leftover interpolation fraction. The simulation itself only
//! ever sees fixed `DT` steps.

use verdant_core::constants::{DT, MAX_FRAME_SECS};

#[derive(Debug, Clone)]
pub struct FixedClock {
    step_secs: f64,
    accumulator: f64,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(DT)
    }
}

impl FixedClock {
    pub fn new(step_secs: f64) -> Self {
        Self {
            step_secs,
            accumulator: 0.0,
        }
    }

    /// Absorb a wall-clock delta (seconds) and return the number of whole
    /// steps to run. Deltas above `MAX_FRAME_SECS` are clamped so a stalled
    /// host catches up gracefully instead of spiraling.
    pub fn advance(&mut self, wall_delta_secs: f64) -> u32 {
        self.accumulator += wall_delta_secs.clamp(0.0, MAX_FRAME_SECS);
        let mut steps = 0;
        while self.accumulator >= self.step_secs {
            self.accumulator -= self.step_secs;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, in [0, 1). Renderers use
    /// it to interpolate between the last two states.
    pub fn interpolation(&self) -> f64 {
        self.accumulator / self.step_secs
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_whole_steps() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.advance(DT * 2.5), 2);
        assert!((clock.interpolation() - 0.5).abs() < 1e-9);
        assert_eq!(clock.advance(DT * 0.5), 1);
        assert!(clock.interpolation() < 1e-9);
    }

    #[test]
    fn small_deltas_run_no_steps() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.advance(DT * 0.25), 0);
        assert_eq!(clock.advance(DT * 0.25), 0);
        assert_eq!(clock.advance(DT * 0.5), 1);
    }

    #[test]
    fn clamps_stalled_host_deltas() {
        let mut clock = FixedClock::default();
        let steps = clock.advance(10.0);
        assert!(f64::from(steps) * DT <= MAX_FRAME_SECS + 1e-9);
    }

    #[test]
    fn negative_deltas_are_ignored() {
        let mut clock = FixedClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.interpolation(), 0.0);
    }
}
