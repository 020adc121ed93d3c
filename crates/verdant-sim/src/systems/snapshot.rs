//! Snapshot builder: reads the world into a `GameSnapshot`.
//!
//! Views are sorted by stable keys so identical simulations serialize to
//! identical JSON.

use std::cmp::Ordering;

use hecs::World;

use verdant_core::components::{Attacker, Defender, Projectile, SunDrop};
use verdant_core::enums::{DefenderKind, GamePhase};
use verdant_core::events::GameEvent;
use verdant_core::state::{
    AttackerView, CooldownView, DefenderView, GameSnapshot, ProjectileView, SunDropView,
};
use verdant_core::types::{Position, SimTime};

use crate::economy::Economy;
use crate::score::ScoreState;
use crate::systems::wave_spawner::WaveScheduler;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    scheduler: &WaveScheduler,
    selected: Option<DefenderKind>,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let cooldowns = DefenderKind::ALL
        .iter()
        .map(|&kind| CooldownView {
            kind,
            remaining_secs: economy.cooldown_remaining(kind),
        })
        .collect();

    let mut defenders: Vec<DefenderView> = world
        .query::<(&Defender, &Position)>()
        .iter()
        .map(|(_entity, (defender, pos))| DefenderView {
            kind: defender.kind,
            state: defender.state,
            row: defender.cell.row,
            col: defender.cell.col,
            x: pos.x,
            y: pos.y,
            durability_ratio: defender.durability_ratio(),
        })
        .collect();
    defenders.sort_by_key(|d| (d.row, d.col));

    let mut attackers: Vec<AttackerView> = world
        .query::<(&Attacker, &Position)>()
        .iter()
        .map(|(_entity, (attacker, pos))| AttackerView {
            kind: attacker.kind,
            state: attacker.state,
            row: attacker.row,
            x: pos.x,
            y: pos.y,
            durability_ratio: attacker.durability_ratio(),
            slowed: attacker.slow_multiplier < 1.0,
        })
        .collect();
    attackers.sort_by(|a, b| {
        a.row
            .cmp(&b.row)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.active)
        .map(|(_entity, (projectile, pos))| ProjectileView {
            kind: projectile.kind,
            row: projectile.row,
            x: pos.x,
            y: pos.y,
        })
        .collect();
    projectiles.sort_by(|a, b| {
        a.row
            .cmp(&b.row)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut drops: Vec<SunDropView> = world
        .query::<(&SunDrop, &Position)>()
        .iter()
        .map(|(entity, (drop, pos))| SunDropView {
            id: entity.to_bits().get(),
            source: drop.source,
            state: drop.state,
            x: pos.x,
            y: pos.y,
            value: drop.value,
        })
        .collect();
    drops.sort_by_key(|d| d.id);

    GameSnapshot {
        time: *time,
        phase,
        sun: economy.sun(),
        wave: scheduler.waves_released(),
        total_waves: scheduler.total_waves(),
        selected,
        cooldowns,
        defenders,
        attackers,
        projectiles,
        drops,
        events,
        score: score.to_view(time.elapsed_secs),
    }
}
