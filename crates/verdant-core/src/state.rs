//! Snapshot types: the read-only view of the simulation handed to consumers.
//!
//! Snapshots are plain data with stable ordering, so two engines fed the same
//! seed and commands serialize to identical JSON.

use serde::{Deserialize, Serialize};

use crate::enums::{
    AttackerKind, AttackerState, DefenderKind, DefenderState, GamePhase, ProjectileKind,
    SunSource, SunState,
};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Per-kind placement cooldown as seen by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownView {
    pub kind: DefenderKind,
    pub remaining_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenderView {
    pub kind: DefenderKind,
    pub state: DefenderState,
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub durability_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackerView {
    pub kind: AttackerKind,
    pub state: AttackerState,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub durability_ratio: f64,
    pub slowed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub row: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunDropView {
    /// Stable id for collect commands, valid until the drop despawns.
    pub id: u64,
    pub source: SunSource,
    pub state: SunState,
    pub x: f64,
    pub y: f64,
    pub value: u32,
}

/// Running score totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub attackers_killed: u32,
    /// Total attackers the level will spawn.
    pub attackers_total: u32,
    pub sun_collected: u32,
    pub defenders_placed: u32,
    pub elapsed_secs: f64,
}

/// Outcome summary available once a level ends in victory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub level_id: u32,
    pub score: ScoreView,
}

/// Full game state at the end of a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub sun: u32,
    /// Waves released so far.
    pub wave: u32,
    pub total_waves: u32,
    pub selected: Option<DefenderKind>,
    pub cooldowns: Vec<CooldownView>,
    pub defenders: Vec<DefenderView>,
    pub attackers: Vec<AttackerView>,
    pub projectiles: Vec<ProjectileView>,
    pub drops: Vec<SunDropView>,
    /// Events raised during this tick, in order.
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}
