//! Collision and targeting: projectile hits, attacker-defender engagement,
//! and detonation blasts.
//!
//! Projectile hits and engagement are row-scoped; detonations are circular
//! and ignore rows.

use hecs::{Entity, World};

use verdant_core::components::{Attacker, Defender, Projectile};
use verdant_core::constants::{CONTACT_RANGE, PROJECTILE_HIT_RADIUS};
use verdant_core::enums::AttackerState;
use verdant_core::events::GameEvent;
use verdant_core::stats::{DetonationStats, SlowEffect};
use verdant_core::types::Position;

use crate::score::ScoreState;

pub fn run(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>) {
    resolve_projectile_hits(world, score, events);
    update_engagements(world);
}

/// Each active projectile hits the first non-dead attacker in its row within
/// the hit radius. The projectile is spent either way.
fn resolve_projectile_hits(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>) {
    let attackers: Vec<(Entity, usize, f64, AttackerState)> = world
        .query_mut::<(&Attacker, &Position)>()
        .into_iter()
        .map(|(entity, (attacker, pos))| (entity, attacker.row, pos.x, attacker.state))
        .collect();

    let mut hits: Vec<(Entity, Entity, f64, Option<SlowEffect>)> = Vec::new();
    for (proj_entity, (projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if !projectile.active {
            continue;
        }
        let hit = attackers.iter().find(|(_, row, x, state)| {
            *row == projectile.row
                && *state != AttackerState::Dead
                && (x - pos.x).abs() < PROJECTILE_HIT_RADIUS
        });
        if let Some((attacker_entity, _, _, _)) = hit {
            hits.push((
                proj_entity,
                *attacker_entity,
                projectile.damage,
                projectile.slow,
            ));
        }
    }

    for (proj_entity, attacker_entity, damage, slow) in hits {
        if let Ok(mut projectile) = world.get::<&mut Projectile>(proj_entity) {
            projectile.active = false;
        }
        damage_attacker(world, attacker_entity, damage, slow, score, events);
    }
}

/// Attackers engage the nearest defender ahead of them in their row within
/// contact range, and disengage when it is gone.
fn update_engagements(world: &mut World) {
    let defenders: Vec<(Entity, usize, f64)> = world
        .query_mut::<(&Defender, &Position)>()
        .into_iter()
        .filter(|(_, (defender, _))| {
            defender.state != verdant_core::enums::DefenderState::Destroyed
        })
        .map(|(entity, (defender, pos))| (entity, defender.cell.row, pos.x))
        .collect();

    for (_entity, (attacker, pos)) in world.query_mut::<(&mut Attacker, &Position)>() {
        if matches!(attacker.state, AttackerState::Dying | AttackerState::Dead) {
            continue;
        }
        let width = attacker.kind.stats().width;
        let nearest = defenders
            .iter()
            .filter(|(_, row, x)| *row == attacker.row && *x > pos.x - width)
            .map(|(entity, _, x)| (*entity, (x - pos.x).abs()))
            .filter(|(_, dist)| *dist < CONTACT_RANGE)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match nearest {
            Some((target, _)) => {
                // Entering engagement does not reset the contact timer.
                attacker.state = AttackerState::Attacking;
                attacker.target = Some(target.to_bits().get());
            }
            None if attacker.target.is_some() => {
                attacker.target = None;
                attacker.state = AttackerState::Walking;
            }
            None => {}
        }
    }
}

/// Apply a blast to every attacker within the radius, regardless of row.
/// Full damage across the whole radius, no falloff.
pub fn apply_detonation(
    world: &mut World,
    center: &Position,
    detonation: &DetonationStats,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    events.push(GameEvent::Detonated {
        x: center.x,
        y: center.y,
        radius: detonation.radius,
    });

    let caught: Vec<Entity> = world
        .query_mut::<(&Attacker, &Position)>()
        .into_iter()
        .filter(|(_, (attacker, pos))| {
            attacker.state != AttackerState::Dead
                && center.distance_to(pos) <= detonation.radius
        })
        .map(|(entity, _)| entity)
        .collect();

    for entity in caught {
        damage_attacker(world, entity, detonation.damage, None, score, events);
    }
}

fn damage_attacker(
    world: &mut World,
    entity: Entity,
    damage: f64,
    slow: Option<SlowEffect>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    if let Ok(mut attacker) = world.get::<&mut Attacker>(entity) {
        let was_alive = attacker.is_alive();
        let alive = attacker.take_damage(damage, slow);
        if was_alive && !alive {
            score.attackers_killed += 1;
            events.push(GameEvent::AttackerKilled { row: attacker.row });
        }
    }
}
