//! Cleanup system: removes terminal entities and releases their resources.
//!
//! This is the only place entities despawn and the only mutator of grid
//! occupancy after placement. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use verdant_core::components::{Attacker, Defender, Projectile, SunDrop};
use verdant_core::enums::{AttackerState, DefenderState, SunState};

use crate::grid::Grid;

pub fn run(world: &mut World, grid: &mut Grid, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, defender) in world.query_mut::<&Defender>() {
        if defender.state == DefenderState::Destroyed {
            grid.clear(defender.cell);
            despawn_buffer.push(entity);
        }
    }

    for (entity, attacker) in world.query_mut::<&Attacker>() {
        if attacker.state == AttackerState::Dead {
            despawn_buffer.push(entity);
        }
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.active {
            despawn_buffer.push(entity);
        }
    }

    for (entity, drop) in world.query_mut::<&SunDrop>() {
        if drop.state == SunState::Collected {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
