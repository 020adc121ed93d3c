//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Defender archetypes placeable on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderKind {
    /// Produces sun on a fixed interval; does not fight.
    SolarCollector,
    /// Fires bolts down its lane while an attacker is present.
    Sentry,
    /// High durability, no attack. Pure lane blocker.
    Barricade,
    /// Detonates after a short fuse, damaging everything in a radius.
    BlastCharge,
    /// As Sentry, but its bolts also slow the target.
    FrostSentry,
}

/// Defender lifecycle. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenderState {
    #[default]
    Active,
    /// Durability below half; behavior unchanged.
    Damaged,
    /// Fuse elapsed, detonation resolves this tick.
    Detonating,
    Destroyed,
}

/// Attacker archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerKind {
    Walker,
    /// Helmet roughly triples durability.
    Helmeted,
    /// Heavy armor, highest durability.
    Armored,
}

/// Attacker lifecycle. `Dead` is terminal; `Dying` is a brief grace state
/// during which the attacker no longer moves or fights but still occupies
/// its lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackerState {
    #[default]
    Walking,
    Attacking,
    Dying,
    Dead,
}

/// Projectile archetypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Bolt,
    /// Carries a slow effect in addition to damage.
    FrostBolt,
}

/// Where a sun drop came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunSource {
    /// Ambient drop falling from the top of the play area.
    Sky,
    /// Produced in place by a solar collector.
    Collector,
}

/// Sun drop lifecycle. `Collected` marks the drop for removal, whether it
/// was banked or expired unclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunState {
    Falling,
    Idle,
    /// Homing toward the bank point; the credit is already in flight.
    Collecting,
    Collected,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    Victory,
    Defeat,
}

impl GamePhase {
    /// Whether simulation systems run in this phase.
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Whether the level has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}
