//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever context they
//! need. They do not own state — entity state lives in components, shared
//! state on the engine.

pub mod attacker;
pub mod cleanup;
pub mod collision;
pub mod defender;
pub mod projectile;
pub mod snapshot;
pub mod sun_drop;
pub mod wave_spawner;
