//! Defender system: production intervals, detonation fuses, and firing.
//!
//! Mutations that need to spawn entities or touch other archetypes are
//! collected into buffers during the query pass and applied afterwards.

use hecs::{Entity, World};

use verdant_core::components::{Attacker, Defender, Projectile, SunDrop};
use verdant_core::constants::{DEFENDER_HEIGHT, DEFENDER_WIDTH, GRID_ROWS};
use verdant_core::enums::{AttackerState, DefenderState};
use verdant_core::events::GameEvent;
use verdant_core::stats::DetonationStats;
use verdant_core::types::Position;

use crate::score::ScoreState;
use crate::systems::collision;

/// Offset of a produced drop from its collector.
const PRODUCED_DROP_DX: f64 = 20.0;
const PRODUCED_DROP_DY: f64 = -20.0;

pub fn run(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>, dt: f64) {
    // Sentries only fire while their lane has a target. Dying attackers
    // still count; only Dead is excluded.
    let mut lane_has_target = [false; GRID_ROWS];
    for (_entity, attacker) in world.query_mut::<&Attacker>() {
        if attacker.state != AttackerState::Dead && attacker.row < GRID_ROWS {
            lane_has_target[attacker.row] = true;
        }
    }

    let mut produced: Vec<(Position, u32)> = Vec::new();
    let mut shots: Vec<(Projectile, Position)> = Vec::new();
    let mut detonations: Vec<(Entity, Position, DetonationStats)> = Vec::new();

    for (entity, (defender, pos)) in world.query_mut::<(&mut Defender, &Position)>() {
        if defender.state == DefenderState::Destroyed {
            continue;
        }

        if defender.attack_timer > 0.0 {
            defender.attack_timer -= dt;
        }

        let stats = defender.kind.stats();

        if let Some(production) = stats.production {
            defender.production_timer += dt;
            if defender.production_timer >= production.interval_secs {
                defender.production_timer = 0.0;
                produced.push((
                    Position::new(pos.x + PRODUCED_DROP_DX, pos.y + PRODUCED_DROP_DY),
                    production.value,
                ));
            }
        }

        if let Some(detonation) = stats.detonation {
            defender.fuse_timer += dt;
            if defender.fuse_timer >= detonation.delay_secs {
                defender.state = DefenderState::Detonating;
                detonations.push((entity, *pos, detonation));
            }
        }

        if let Some(attack) = stats.attack {
            if defender.attack_timer <= 0.0 && lane_has_target[defender.cell.row] {
                defender.attack_timer = attack.interval_secs;
                shots.push((
                    Projectile::new(
                        attack.projectile,
                        defender.cell.row,
                        attack.power,
                        attack.slow,
                    ),
                    // Bolts leave from the muzzle, half a body below center.
                    Position::new(pos.x + DEFENDER_WIDTH, pos.y + DEFENDER_HEIGHT / 2.0),
                ));
            }
        }
    }

    for (pos, value) in produced {
        events.push(GameEvent::SunProduced {
            x: pos.x,
            y: pos.y,
            value,
        });
        world.spawn((SunDrop::produced(value, pos.y), pos));
    }

    for (projectile, pos) in shots {
        world.spawn((projectile, pos));
    }

    for (entity, center, detonation) in detonations {
        collision::apply_detonation(world, &center, &detonation, score, events);
        if let Ok(mut defender) = world.get::<&mut Defender>(entity) {
            defender.state = DefenderState::Destroyed;
        }
    }
}
