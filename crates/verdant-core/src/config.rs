//! Level configuration: waves, spawn entries, and starting conditions.
//!
//! Configuration is read-only input to the engine. It is validated once at
//! load time; systems trust it afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::GRID_ROWS;
use crate::enums::{AttackerKind, DefenderKind};
use crate::error::LevelError;

/// One attacker to release, `delay_secs` after its wave starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub kind: AttackerKind,
    pub row: usize,
    pub delay_secs: f64,
}

/// One wave: a delay measured from the previous wave's release, then a batch
/// of spawn entries with their own in-wave delays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub delay_secs: f64,
    pub spawns: Vec<SpawnConfig>,
}

/// A complete level definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    pub initial_sun: u32,
    /// Defender kinds the player may place in this level.
    pub available_defenders: Vec<DefenderKind>,
    pub waves: Vec<WaveConfig>,
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.waves.is_empty() {
            return Err(LevelError::EmptyWaves(self.id));
        }
        for wave in &self.waves {
            for spawn in &wave.spawns {
                if spawn.row >= GRID_ROWS {
                    return Err(LevelError::RowOutOfRange {
                        level: self.id,
                        row: spawn.row,
                    });
                }
            }
        }
        Ok(())
    }

    /// Total attackers this level will ever spawn.
    pub fn total_spawns(&self) -> u32 {
        self.waves.iter().map(|w| w.spawns.len() as u32).sum()
    }

    pub fn total_waves(&self) -> u32 {
        self.waves.len() as u32
    }
}
