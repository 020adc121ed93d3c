//! Player commands accepted by the simulation engine.

use serde::{Deserialize, Serialize};

use crate::enums::DefenderKind;

/// Commands queued by the player and applied at the next tick boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Arm a defender kind for placement.
    SelectDefender { kind: DefenderKind },
    /// Place the selected defender at a grid cell.
    PlaceAt { row: usize, col: usize },
    /// Claim a sun drop by its snapshot id.
    CollectDrop { id: u64 },
    Pause,
    Resume,
    /// Reload the current level from scratch.
    Restart,
    ExitToMenu,
}
