//! Discrete events surfaced through snapshots.
//!
//! Events are a closed set of typed notifications. They describe things that
//! happened during the tick; consumers (UI, audio, tests) react to them, and
//! the engine never depends on anyone listening.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave's spawn entries were released into the queue.
    WaveStarted { index: u32, total: u32 },
    /// A solar collector produced a drop at this position.
    SunProduced { x: f64, y: f64, value: u32 },
    /// A collection credit landed in the bank.
    SunBanked { value: u32 },
    /// A blast charge went off.
    Detonated { x: f64, y: f64, radius: f64 },
    /// An attacker's durability reached zero this tick.
    AttackerKilled { row: usize },
    /// An attacker crossed the defense line; the level is lost.
    BoundaryBreached { row: usize },
    /// A queued player command was refused.
    ActionRejected { reason: ActionError },
}
