//! Campaign persistence: level unlocks and best results.
//!
//! Progress is a small JSON document on disk. Loading is forgiving — a
//! missing, unreadable, or incompatibly versioned file falls back to default
//! progress rather than failing the game. Saving reports errors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use verdant_core::constants::LEVEL_COUNT;
use verdant_core::state::CompletionReport;

/// Bumped when the progress format changes incompatibly. Files with another
/// version are discarded on load.
pub const PROGRESS_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write progress file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Best recorded results for one completed level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub completions: u32,
    pub best_time_secs: f64,
    pub most_attackers_killed: u32,
}

/// Persistent campaign state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    pub unlocked_levels: Vec<u32>,
    pub level_records: HashMap<u32, LevelRecord>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            version: PROGRESS_VERSION,
            unlocked_levels: vec![1],
            level_records: HashMap::new(),
        }
    }
}

impl Progress {
    pub fn is_unlocked(&self, level_id: u32) -> bool {
        self.unlocked_levels.contains(&level_id)
    }

    /// Record a victory: update best results and unlock the next level.
    pub fn record_completion(&mut self, report: &CompletionReport) {
        let record = self
            .level_records
            .entry(report.level_id)
            .or_insert(LevelRecord {
                completions: 0,
                best_time_secs: f64::INFINITY,
                most_attackers_killed: 0,
            });
        record.completions += 1;
        record.best_time_secs = record.best_time_secs.min(report.score.elapsed_secs);
        record.most_attackers_killed = record
            .most_attackers_killed
            .max(report.score.attackers_killed);

        let next = report.level_id + 1;
        if next <= LEVEL_COUNT && !self.unlocked_levels.contains(&next) {
            self.unlocked_levels.push(next);
            self.unlocked_levels.sort_unstable();
            log::info!("level {next} unlocked");
        }
    }
}

/// Load progress from `path`, falling back to defaults on any failure.
pub fn load(path: &Path) -> Progress {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return Progress::default(),
    };
    match serde_json::from_str::<Progress>(&json) {
        Ok(progress) if progress.version == PROGRESS_VERSION => progress,
        Ok(progress) => {
            log::warn!(
                "progress version {} != {}, starting fresh",
                progress.version,
                PROGRESS_VERSION
            );
            Progress::default()
        }
        Err(err) => {
            log::warn!("unreadable progress file, starting fresh: {err}");
            Progress::default()
        }
    }
}

/// Write progress to `path`, creating parent directories as needed.
pub fn save(path: &Path, progress: &Progress) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(progress)?;
    fs::write(path, json)?;
    Ok(())
}
