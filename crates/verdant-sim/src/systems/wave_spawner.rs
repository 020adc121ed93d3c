//! Wave scheduling: releases waves on a timer and drains each wave's spawn
//! queue on per-entry delays.
//!
//! Wave delays are measured from the previous wave's release, so a slow
//! start compounds. Queued entries spawn independently of later waves.

use hecs::World;

use verdant_core::components::Attacker;
use verdant_core::config::{LevelConfig, WaveConfig};
use verdant_core::constants::ATTACKER_SPAWN_X;
use verdant_core::enums::AttackerKind;
use verdant_core::events::GameEvent;
use verdant_core::types::Position;

use crate::grid;

#[derive(Debug, Clone)]
struct QueuedSpawn {
    kind: AttackerKind,
    row: usize,
    delay_secs: f64,
    timer_secs: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WaveScheduler {
    waves: Vec<WaveConfig>,
    next_wave: usize,
    wave_timer: f64,
    queue: Vec<QueuedSpawn>,
}

impl WaveScheduler {
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            waves: level.waves.clone(),
            next_wave: 0,
            wave_timer: 0.0,
            queue: Vec::new(),
        }
    }

    /// All waves have been released. Queued entries may still be pending.
    pub fn exhausted(&self) -> bool {
        self.next_wave >= self.waves.len()
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn waves_released(&self) -> u32 {
        self.next_wave as u32
    }

    pub fn total_waves(&self) -> u32 {
        self.waves.len() as u32
    }

    /// Mark every wave as released and drop queued entries (for testing
    /// outcomes without sitting through a full level).
    #[cfg(test)]
    pub fn exhaust(&mut self) {
        self.next_wave = self.waves.len();
        self.queue.clear();
    }
}

pub fn run(world: &mut World, scheduler: &mut WaveScheduler, events: &mut Vec<GameEvent>, dt: f64) {
    // At most one wave releases per tick.
    if !scheduler.exhausted() {
        scheduler.wave_timer += dt;
        if scheduler.wave_timer >= scheduler.waves[scheduler.next_wave].delay_secs {
            let wave = &scheduler.waves[scheduler.next_wave];
            for spawn in &wave.spawns {
                scheduler.queue.push(QueuedSpawn {
                    kind: spawn.kind,
                    row: spawn.row,
                    delay_secs: spawn.delay_secs,
                    timer_secs: 0.0,
                });
            }
            scheduler.next_wave += 1;
            scheduler.wave_timer = 0.0;
            events.push(GameEvent::WaveStarted {
                index: scheduler.next_wave as u32,
                total: scheduler.total_waves(),
            });
            log::info!(
                "wave {}/{} released ({} spawns queued)",
                scheduler.next_wave,
                scheduler.total_waves(),
                scheduler.queue.len()
            );
        }
    }

    let mut due: Vec<(AttackerKind, usize)> = Vec::new();
    scheduler.queue.retain_mut(|entry| {
        entry.timer_secs += dt;
        if entry.timer_secs >= entry.delay_secs {
            due.push((entry.kind, entry.row));
            false
        } else {
            true
        }
    });

    for (kind, row) in due {
        world.spawn((
            Attacker::new(kind, row),
            Position::new(ATTACKER_SPAWN_X, grid::attacker_y(row)),
        ));
    }
}
