//! Error types crossing the engine boundary.
//!
//! User-facing rejections are data, not panics: every refusable action
//! returns a reason code and leaves the simulation untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or validate a level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LevelError {
    #[error("unknown level id {0}")]
    UnknownLevel(u32),
    #[error("level {0} has no waves")]
    EmptyWaves(u32),
    #[error("level {level}: spawn row {row} out of range")]
    RowOutOfRange { level: u32, row: usize },
}

/// Rejection reason for a player action. Rejected actions never partially
/// mutate state.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum ActionError {
    #[error("no level is being played")]
    NotPlaying,
    #[error("not enough sun: need {needed}, have {available}")]
    InsufficientSun { needed: u32, available: u32 },
    #[error("defender is cooling down ({remaining_secs:.1}s left)")]
    OnCooldown { remaining_secs: f64 },
    #[error("defender kind is not available in this level")]
    KindUnavailable,
    #[error("no defender kind selected")]
    NoSelection,
    #[error("cell is outside the grid")]
    OutOfBounds,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("drop cannot be collected")]
    NotCollectible,
    #[error("sun storage is full")]
    SunCapReached,
}
