//! Built-in level definitions.

use verdant_core::config::{LevelConfig, SpawnConfig, WaveConfig};
use verdant_core::enums::{AttackerKind, DefenderKind};
use verdant_core::error::LevelError;

fn spawn(kind: AttackerKind, row: usize, delay_secs: f64) -> SpawnConfig {
    SpawnConfig {
        kind,
        row,
        delay_secs,
    }
}

fn level_1() -> LevelConfig {
    use AttackerKind::Walker;
    LevelConfig {
        id: 1,
        name: "First Light".into(),
        initial_sun: 50,
        available_defenders: vec![
            DefenderKind::SolarCollector,
            DefenderKind::Sentry,
            DefenderKind::Barricade,
        ],
        waves: vec![
            WaveConfig {
                delay_secs: 10.0,
                spawns: vec![
                    spawn(Walker, 2, 0.0),
                    spawn(Walker, 1, 5.0),
                    spawn(Walker, 3, 8.0),
                ],
            },
            WaveConfig {
                delay_secs: 20.0,
                spawns: vec![
                    spawn(Walker, 0, 0.0),
                    spawn(Walker, 2, 3.0),
                    spawn(Walker, 4, 6.0),
                    spawn(Walker, 1, 10.0),
                    spawn(Walker, 3, 12.0),
                ],
            },
            WaveConfig {
                delay_secs: 25.0,
                spawns: vec![
                    spawn(Walker, 1, 0.0),
                    spawn(Walker, 2, 2.0),
                    spawn(Walker, 3, 4.0),
                    spawn(Walker, 0, 6.0),
                    spawn(Walker, 4, 8.0),
                    spawn(Walker, 2, 12.0),
                    spawn(Walker, 1, 15.0),
                ],
            },
        ],
    }
}

fn level_2() -> LevelConfig {
    use AttackerKind::{Helmeted, Walker};
    LevelConfig {
        id: 2,
        name: "Hardened Lines".into(),
        initial_sun: 50,
        available_defenders: vec![
            DefenderKind::SolarCollector,
            DefenderKind::Sentry,
            DefenderKind::Barricade,
            DefenderKind::BlastCharge,
        ],
        waves: vec![
            WaveConfig {
                delay_secs: 10.0,
                spawns: vec![
                    spawn(Walker, 1, 0.0),
                    spawn(Walker, 3, 3.0),
                    spawn(Helmeted, 2, 8.0),
                ],
            },
            WaveConfig {
                delay_secs: 18.0,
                spawns: vec![
                    spawn(Walker, 0, 0.0),
                    spawn(Walker, 2, 2.0),
                    spawn(Walker, 4, 4.0),
                    spawn(Helmeted, 1, 8.0),
                    spawn(Helmeted, 3, 10.0),
                    spawn(Walker, 2, 12.0),
                ],
            },
            WaveConfig {
                delay_secs: 20.0,
                spawns: vec![
                    spawn(Helmeted, 0, 0.0),
                    spawn(Walker, 1, 2.0),
                    spawn(Helmeted, 2, 4.0),
                    spawn(Walker, 3, 6.0),
                    spawn(Helmeted, 4, 8.0),
                    spawn(Walker, 2, 12.0),
                    spawn(Walker, 1, 14.0),
                    spawn(Walker, 3, 16.0),
                ],
            },
            WaveConfig {
                delay_secs: 25.0,
                spawns: vec![
                    spawn(Walker, 0, 0.0),
                    spawn(Helmeted, 1, 2.0),
                    spawn(Walker, 2, 4.0),
                    spawn(Helmeted, 3, 6.0),
                    spawn(Walker, 4, 8.0),
                    spawn(Helmeted, 2, 10.0),
                    spawn(Walker, 1, 12.0),
                    spawn(Walker, 3, 14.0),
                ],
            },
        ],
    }
}

fn level_3() -> LevelConfig {
    use AttackerKind::{Armored, Helmeted, Walker};
    LevelConfig {
        id: 3,
        name: "The Long Night".into(),
        initial_sun: 50,
        available_defenders: vec![
            DefenderKind::SolarCollector,
            DefenderKind::Sentry,
            DefenderKind::Barricade,
            DefenderKind::BlastCharge,
            DefenderKind::FrostSentry,
        ],
        waves: vec![
            WaveConfig {
                delay_secs: 10.0,
                spawns: vec![
                    spawn(Walker, 1, 0.0),
                    spawn(Helmeted, 3, 3.0),
                    spawn(Walker, 2, 6.0),
                    spawn(Armored, 0, 10.0),
                ],
            },
            WaveConfig {
                delay_secs: 15.0,
                spawns: vec![
                    spawn(Helmeted, 0, 0.0),
                    spawn(Walker, 2, 2.0),
                    spawn(Helmeted, 4, 4.0),
                    spawn(Armored, 1, 6.0),
                    spawn(Walker, 3, 8.0),
                    spawn(Walker, 2, 10.0),
                    spawn(Helmeted, 1, 12.0),
                ],
            },
            WaveConfig {
                delay_secs: 18.0,
                spawns: vec![
                    spawn(Armored, 2, 0.0),
                    spawn(Helmeted, 1, 2.0),
                    spawn(Helmeted, 3, 4.0),
                    spawn(Walker, 0, 6.0),
                    spawn(Armored, 4, 8.0),
                    spawn(Walker, 2, 10.0),
                    spawn(Helmeted, 1, 12.0),
                    spawn(Walker, 3, 14.0),
                    spawn(Helmeted, 0, 16.0),
                ],
            },
            WaveConfig {
                delay_secs: 20.0,
                spawns: vec![
                    spawn(Walker, 0, 0.0),
                    spawn(Helmeted, 1, 2.0),
                    spawn(Armored, 2, 4.0),
                    spawn(Helmeted, 3, 6.0),
                    spawn(Walker, 4, 8.0),
                    spawn(Walker, 1, 10.0),
                    spawn(Armored, 3, 12.0),
                    spawn(Helmeted, 2, 14.0),
                    spawn(Walker, 0, 16.0),
                    spawn(Helmeted, 4, 18.0),
                ],
            },
            WaveConfig {
                delay_secs: 25.0,
                spawns: vec![
                    spawn(Armored, 0, 0.0),
                    spawn(Armored, 4, 2.0),
                    spawn(Helmeted, 1, 4.0),
                    spawn(Helmeted, 3, 6.0),
                    spawn(Armored, 2, 8.0),
                    spawn(Walker, 0, 10.0),
                    spawn(Helmeted, 2, 12.0),
                    spawn(Walker, 4, 14.0),
                    spawn(Helmeted, 1, 16.0),
                    spawn(Armored, 3, 18.0),
                    spawn(Walker, 2, 20.0),
                    spawn(Walker, 1, 22.0),
                    spawn(Walker, 3, 24.0),
                ],
            },
        ],
    }
}

/// Load a built-in level by id. Configurations are validated before return.
pub fn level_config(id: u32) -> Result<LevelConfig, LevelError> {
    let level = match id {
        1 => level_1(),
        2 => level_2(),
        3 => level_3(),
        _ => return Err(LevelError::UnknownLevel(id)),
    };
    level.validate()?;
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::constants::LEVEL_COUNT;

    #[test]
    fn all_levels_validate() {
        for id in 1..=LEVEL_COUNT {
            let level = level_config(id).unwrap();
            assert_eq!(level.id, id);
            assert!(level.total_spawns() > 0);
        }
        assert!(level_config(0).is_err());
        assert!(level_config(LEVEL_COUNT + 1).is_err());
    }

    #[test]
    fn difficulty_ramps_across_levels() {
        let totals: Vec<u32> = (1..=3)
            .map(|id| level_config(id).unwrap().total_spawns())
            .collect();
        assert!(totals[0] < totals[1]);
        assert!(totals[1] < totals[2]);

        assert_eq!(level_config(1).unwrap().total_waves(), 3);
        assert_eq!(level_config(2).unwrap().total_waves(), 4);
        assert_eq!(level_config(3).unwrap().total_waves(), 5);

        // Each level unlocks one more defender kind.
        for id in 1..=3u32 {
            let level = level_config(id).unwrap();
            assert_eq!(level.available_defenders.len(), 2 + id as usize);
        }
    }
}
