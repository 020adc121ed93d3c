//! Simulation engine for VERDANT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and produces
//! `GameSnapshot`s for whatever frontend drives it. Completely headless.

pub mod clock;
pub mod economy;
pub mod engine;
pub mod grid;
pub mod levels;
pub mod score;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use verdant_core as core;
