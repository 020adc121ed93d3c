//! Closed stat tables for defender and attacker archetypes.
//!
//! All tuning lives here as `const fn` lookups so every kind has a complete,
//! compile-time-checked parameter set. Systems never branch on kind for
//! numbers; they read the table.

use serde::{Deserialize, Serialize};

use crate::constants::{ATTACKER_WIDTH, PROJECTILE_SPEED};
use crate::enums::{AttackerKind, DefenderKind, ProjectileKind};

/// Slow effect carried by frost projectiles.
///
/// When stacked, the strongest (lowest) multiplier wins and the expiry is
/// reset to the newest duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowEffect {
    /// Speed multiplier in (0, 1].
    pub multiplier: f64,
    /// Seconds until the effect expires.
    pub duration_secs: f64,
}

/// Ranged attack parameters for a defender kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackStats {
    /// Damage per projectile.
    pub power: f64,
    /// Seconds between shots.
    pub interval_secs: f64,
    /// Projectile archetype fired.
    pub projectile: ProjectileKind,
    /// Slow payload, if the projectile carries one.
    pub slow: Option<SlowEffect>,
}

/// Sun production parameters for a defender kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionStats {
    /// Seconds between produced drops.
    pub interval_secs: f64,
    /// Value of each produced drop.
    pub value: u32,
}

/// Detonation parameters for a defender kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetonationStats {
    /// Fuse length from placement to detonation (seconds).
    pub delay_secs: f64,
    /// Damage applied to every attacker in the radius.
    pub damage: f64,
    /// Blast radius in pixels, row-agnostic.
    pub radius: f64,
}

/// Full parameter set for a defender kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderStats {
    /// Sun cost to place.
    pub cost: u32,
    /// Per-kind placement cooldown (seconds).
    pub cooldown_secs: f64,
    pub max_durability: f64,
    pub attack: Option<AttackStats>,
    pub production: Option<ProductionStats>,
    pub detonation: Option<DetonationStats>,
}

/// Full parameter set for an attacker kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackerStats {
    pub max_durability: f64,
    /// Base walking speed (pixels per second).
    pub speed: f64,
    /// Contact damage per second of accumulated engagement time.
    pub power: f64,
    /// Seconds of contact time required before a hit lands.
    pub interval_secs: f64,
    /// Body width in pixels.
    pub width: f64,
}

impl DefenderKind {
    pub const ALL: [DefenderKind; 5] = [
        DefenderKind::SolarCollector,
        DefenderKind::Sentry,
        DefenderKind::Barricade,
        DefenderKind::BlastCharge,
        DefenderKind::FrostSentry,
    ];

    pub const fn stats(self) -> DefenderStats {
        match self {
            DefenderKind::SolarCollector => DefenderStats {
                cost: 50,
                cooldown_secs: 7.5,
                max_durability: 300.0,
                attack: None,
                production: Some(ProductionStats {
                    interval_secs: 24.0,
                    value: 25,
                }),
                detonation: None,
            },
            DefenderKind::Sentry => DefenderStats {
                cost: 100,
                cooldown_secs: 7.5,
                max_durability: 300.0,
                attack: Some(AttackStats {
                    power: 20.0,
                    interval_secs: 1.4,
                    projectile: ProjectileKind::Bolt,
                    slow: None,
                }),
                production: None,
                detonation: None,
            },
            DefenderKind::Barricade => DefenderStats {
                cost: 50,
                cooldown_secs: 30.0,
                max_durability: 4000.0,
                attack: None,
                production: None,
                detonation: None,
            },
            DefenderKind::BlastCharge => DefenderStats {
                cost: 150,
                cooldown_secs: 50.0,
                max_durability: 300.0,
                attack: None,
                production: None,
                detonation: Some(DetonationStats {
                    delay_secs: 1.0,
                    damage: 1800.0,
                    radius: 150.0,
                }),
            },
            DefenderKind::FrostSentry => DefenderStats {
                cost: 175,
                cooldown_secs: 7.5,
                max_durability: 300.0,
                attack: Some(AttackStats {
                    power: 20.0,
                    interval_secs: 1.4,
                    projectile: ProjectileKind::FrostBolt,
                    slow: Some(SlowEffect {
                        multiplier: 0.5,
                        duration_secs: 10.0,
                    }),
                }),
                production: None,
                detonation: None,
            },
        }
    }
}

impl AttackerKind {
    pub const ALL: [AttackerKind; 3] = [
        AttackerKind::Walker,
        AttackerKind::Helmeted,
        AttackerKind::Armored,
    ];

    pub const fn stats(self) -> AttackerStats {
        let max_durability = match self {
            AttackerKind::Walker => 200.0,
            AttackerKind::Helmeted => 640.0,
            AttackerKind::Armored => 1370.0,
        };
        AttackerStats {
            max_durability,
            speed: 30.0,
            power: 100.0,
            interval_secs: 1.0,
            width: ATTACKER_WIDTH,
        }
    }
}

impl ProjectileKind {
    /// Horizontal travel speed. Uniform today; kept on the kind so new
    /// projectile archetypes can diverge.
    pub const fn speed(self) -> f64 {
        PROJECTILE_SPEED
    }
}
