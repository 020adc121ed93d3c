//! ECS components. Plain serializable data; behavior lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::DAMAGED_FRACTION;
use crate::enums::{
    AttackerKind, AttackerState, DefenderKind, DefenderState, ProjectileKind, SunSource, SunState,
};
use crate::stats::SlowEffect;
use crate::types::{GridPos, Position};

/// A placed defender occupying one grid cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defender {
    pub kind: DefenderKind,
    pub state: DefenderState,
    pub cell: GridPos,
    pub durability: f64,
    pub max_durability: f64,
    /// Counts down to the next shot. At or below zero means ready to fire.
    pub attack_timer: f64,
    /// Counts up toward the next produced sun drop.
    pub production_timer: f64,
    /// Counts up toward detonation.
    pub fuse_timer: f64,
}

/// An attacker advancing down one lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attacker {
    pub kind: AttackerKind,
    pub state: AttackerState,
    pub row: usize,
    pub durability: f64,
    pub max_durability: f64,
    /// Accumulated engagement time since the last landed hit.
    pub contact_timer: f64,
    /// Current speed multiplier; 1.0 when unslowed.
    pub slow_multiplier: f64,
    /// Seconds until the slow expires. Zero when unslowed.
    pub slow_remaining_secs: f64,
    /// Seconds left in the dying grace period.
    pub dying_remaining_secs: f64,
    /// Engaged defender, as entity id bits. Cleared when the target is
    /// destroyed or adjacency is lost.
    pub target: Option<u64>,
}

/// A projectile traveling down one lane. Inactive projectiles are spent and
/// awaiting reclamation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub row: usize,
    pub damage: f64,
    pub speed: f64,
    pub slow: Option<SlowEffect>,
    pub active: bool,
}

/// A collectible sun drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunDrop {
    pub value: u32,
    pub source: SunSource,
    pub state: SunState,
    /// Y coordinate a falling drop comes to rest at.
    pub rest_y: f64,
    /// Bank point a collecting drop homes toward.
    pub target: Position,
    /// Seconds since the drop spawned.
    pub age_secs: f64,
}

impl Defender {
    pub fn new(kind: DefenderKind, cell: GridPos) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            state: DefenderState::Active,
            cell,
            durability: stats.max_durability,
            max_durability: stats.max_durability,
            attack_timer: 0.0,
            production_timer: 0.0,
            fuse_timer: 0.0,
        }
    }

    /// Apply damage, clamping durability at zero. Returns false once the
    /// defender is destroyed. Damage to a destroyed defender is ignored.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        if self.state == DefenderState::Destroyed {
            return false;
        }
        self.durability = (self.durability - amount).max(0.0);
        if self.durability <= 0.0 {
            self.state = DefenderState::Destroyed;
            return false;
        }
        if self.durability < self.max_durability * DAMAGED_FRACTION
            && self.state == DefenderState::Active
        {
            self.state = DefenderState::Damaged;
        }
        true
    }

    pub fn durability_ratio(&self) -> f64 {
        if self.max_durability > 0.0 {
            self.durability / self.max_durability
        } else {
            0.0
        }
    }
}

impl Attacker {
    pub fn new(kind: AttackerKind, row: usize) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            state: AttackerState::Walking,
            row,
            durability: stats.max_durability,
            max_durability: stats.max_durability,
            contact_timer: 0.0,
            slow_multiplier: 1.0,
            slow_remaining_secs: 0.0,
            dying_remaining_secs: 0.0,
            target: None,
        }
    }

    /// Whether the attacker still fights and blocks victory checks.
    pub fn is_alive(&self) -> bool {
        matches!(self.state, AttackerState::Walking | AttackerState::Attacking)
    }

    /// Apply damage and an optional slow, clamping durability at zero.
    /// Returns false once the attacker is dying or dead. Damage to an
    /// attacker already past zero durability is ignored.
    pub fn take_damage(&mut self, amount: f64, slow: Option<SlowEffect>) -> bool {
        if !self.is_alive() {
            return false;
        }
        if let Some(slow) = slow {
            self.apply_slow(slow);
        }
        self.durability = (self.durability - amount).max(0.0);
        if self.durability <= 0.0 {
            self.state = AttackerState::Dying;
            self.dying_remaining_secs = crate::constants::DYING_GRACE_SECS;
            self.target = None;
            return false;
        }
        true
    }

    /// Slows never compound: the strongest multiplier wins, and the expiry
    /// is reset to the newest duration.
    pub fn apply_slow(&mut self, slow: SlowEffect) {
        self.slow_multiplier = self.slow_multiplier.min(slow.multiplier);
        self.slow_remaining_secs = slow.duration_secs;
    }

    pub fn durability_ratio(&self) -> f64 {
        if self.max_durability > 0.0 {
            self.durability / self.max_durability
        } else {
            0.0
        }
    }
}

impl Projectile {
    pub fn new(kind: ProjectileKind, row: usize, damage: f64, slow: Option<SlowEffect>) -> Self {
        Self {
            kind,
            row,
            damage,
            speed: kind.speed(),
            slow,
            active: true,
        }
    }
}

impl SunDrop {
    /// An ambient drop that falls from the sky and rests partway down.
    pub fn sky(value: u32, spawn_y: f64) -> Self {
        Self {
            value,
            source: SunSource::Sky,
            state: SunState::Falling,
            rest_y: spawn_y + crate::constants::SKY_SUN_FALL_DISTANCE,
            target: Position::default(),
            age_secs: 0.0,
        }
    }

    /// A drop produced in place by a solar collector.
    pub fn produced(value: u32, rest_y: f64) -> Self {
        Self {
            value,
            source: SunSource::Collector,
            state: SunState::Idle,
            rest_y,
            target: Position::default(),
            age_secs: 0.0,
        }
    }

    /// Whether a collect action may claim this drop.
    pub fn is_collectible(&self) -> bool {
        matches!(self.state, SunState::Falling | SunState::Idle)
    }
}
