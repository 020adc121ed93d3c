//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in play-area pixel space.
/// x grows rightward (toward the attacker entry edge), y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A cell on the defense grid. Row 0 is the top lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec2::new(other.x - self.x, other.y - self.y).length()
    }

    /// Move up to `max_step` pixels toward `target`.
    /// Returns true once within `epsilon` of the target.
    pub fn step_toward(&mut self, target: &Position, max_step: f64, epsilon: f64) -> bool {
        let here = DVec2::new(self.x, self.y);
        let there = DVec2::new(target.x, target.y);
        let delta = there - here;
        if delta.length() < epsilon {
            return true;
        }
        let next = here + delta.normalize() * max_step.min(delta.length());
        self.x = next.x;
        self.y = next.y;
        false
    }
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
