//! Sun drop system: ambient sky spawns and the drop state machine.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use verdant_core::components::SunDrop;
use verdant_core::constants::{
    PLAY_WIDTH, SKY_SUN_INTERVAL_SECS, SKY_SUN_MARGIN, SKY_SUN_SPAWN_Y, SKY_SUN_VALUE,
    SUN_COLLECT_EPSILON, SUN_COLLECT_SPEED, SUN_FALL_SPEED, SUN_LIFETIME_SECS,
};
use verdant_core::enums::SunState;
use verdant_core::types::Position;

/// Advance the ambient spawn timer and every drop's state machine.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, spawn_timer: &mut f64, dt: f64) {
    *spawn_timer += dt;
    if *spawn_timer >= SKY_SUN_INTERVAL_SECS {
        *spawn_timer = 0.0;
        let x = rng.gen_range(SKY_SUN_MARGIN..PLAY_WIDTH - SKY_SUN_MARGIN);
        world.spawn((
            SunDrop::sky(SKY_SUN_VALUE, SKY_SUN_SPAWN_Y),
            Position::new(x, SKY_SUN_SPAWN_Y),
        ));
    }

    for (_entity, (drop, pos)) in world.query_mut::<(&mut SunDrop, &mut Position)>() {
        drop.age_secs += dt;
        match drop.state {
            SunState::Falling => {
                pos.y += SUN_FALL_SPEED * dt;
                if pos.y >= drop.rest_y {
                    pos.y = drop.rest_y;
                    drop.state = SunState::Idle;
                }
            }
            SunState::Idle => {
                // Unclaimed drops fade out; the lifetime counts from spawn.
                if drop.age_secs >= SUN_LIFETIME_SECS {
                    drop.state = SunState::Collected;
                }
            }
            SunState::Collecting => {
                let arrived = pos.step_toward(
                    &drop.target,
                    SUN_COLLECT_SPEED * dt,
                    SUN_COLLECT_EPSILON,
                );
                if arrived {
                    drop.state = SunState::Collected;
                }
            }
            SunState::Collected => {}
        }
    }
}
