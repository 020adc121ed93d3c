//! Attacker system: movement, slow expiry, contact damage, dying grace,
//! and the defense-line check.

use hecs::{Entity, World};

use verdant_core::components::{Attacker, Defender};
use verdant_core::constants::DEFEAT_X;
use verdant_core::enums::{AttackerState, DefenderState};
use verdant_core::events::GameEvent;

/// Advance every attacker one tick. Returns true if any attacker crossed
/// the defense line; the engine latches defeat from it.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>, dt: f64) -> bool {
    let mut breached = false;
    // (attacker, target bits, accumulated contact secs, damage per sec)
    let mut strikes: Vec<(Entity, Option<u64>, f64, f64)> = Vec::new();

    for (entity, (attacker, pos)) in world
        .query_mut::<(&mut Attacker, &mut verdant_core::types::Position)>()
    {
        if attacker.state == AttackerState::Dead {
            continue;
        }

        if attacker.slow_remaining_secs > 0.0 {
            attacker.slow_remaining_secs -= dt;
            if attacker.slow_remaining_secs <= 0.0 {
                attacker.slow_remaining_secs = 0.0;
                attacker.slow_multiplier = 1.0;
            }
        }

        let stats = attacker.kind.stats();
        match attacker.state {
            AttackerState::Walking => {
                pos.x -= stats.speed * attacker.slow_multiplier * dt;
            }
            AttackerState::Attacking => {
                attacker.contact_timer += dt;
                if attacker.contact_timer >= stats.interval_secs {
                    strikes.push((
                        entity,
                        attacker.target,
                        attacker.contact_timer,
                        stats.power,
                    ));
                }
            }
            AttackerState::Dying => {
                attacker.dying_remaining_secs -= dt;
                if attacker.dying_remaining_secs <= 0.0 {
                    attacker.state = AttackerState::Dead;
                }
            }
            AttackerState::Dead => {}
        }

        if attacker.state != AttackerState::Dead && pos.x <= DEFEAT_X {
            breached = true;
            events.push(GameEvent::BoundaryBreached { row: attacker.row });
        }
    }

    // Hits scale with accumulated contact time, so a target acquired
    // mid-interval takes a proportionally larger first hit.
    for (entity, target_bits, contact_secs, power) in strikes {
        let target = target_bits.and_then(Entity::from_bits);
        let mut landed = false;
        if let Some(target) = target {
            if let Ok(mut defender) = world.get::<&mut Defender>(target) {
                if defender.state != DefenderState::Destroyed {
                    defender.take_damage(power * contact_secs);
                    landed = true;
                }
            }
        }
        if let Ok(mut attacker) = world.get::<&mut Attacker>(entity) {
            attacker.contact_timer = 0.0;
            if !landed {
                attacker.target = None;
                attacker.state = AttackerState::Walking;
            }
        }
    }

    breached
}
