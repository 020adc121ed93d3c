//! Projectile system: straight-line travel and far-edge deactivation.

use hecs::World;

use verdant_core::components::Projectile;
use verdant_core::constants::PROJECTILE_DESPAWN_X;
use verdant_core::types::Position;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        if !projectile.active {
            continue;
        }
        pos.x += projectile.speed * dt;
        if pos.x > PROJECTILE_DESPAWN_X {
            projectile.active = false;
        }
    }
}
