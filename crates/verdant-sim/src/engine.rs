//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems at a fixed timestep, and produces `GameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use verdant_core::commands::PlayerCommand;
use verdant_core::components::{Defender, SunDrop};
use verdant_core::config::LevelConfig;
use verdant_core::constants::{DT, SUN_BANK_X, SUN_BANK_Y};
use verdant_core::enums::{DefenderKind, GamePhase};
use verdant_core::error::{ActionError, LevelError};
use verdant_core::events::GameEvent;
use verdant_core::state::{CompletionReport, GameSnapshot};
use verdant_core::types::{GridPos, Position, SimTime};

use crate::clock::FixedClock;
use crate::economy::Economy;
use crate::grid::{self, Grid};
use crate::levels;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::WaveScheduler;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    grid: Grid,
    clock: FixedClock,
    time: SimTime,
    phase: GamePhase,
    level: Option<LevelConfig>,
    economy: Economy,
    scheduler: WaveScheduler,
    score: ScoreState,
    selected: Option<DefenderKind>,
    sun_spawn_timer: f64,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            grid: Grid::new(),
            clock: FixedClock::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            level: None,
            economy: Economy::default(),
            scheduler: WaveScheduler::default(),
            score: ScoreState::default(),
            selected: None,
            sun_spawn_timer: 0.0,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn step(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Absorb a wall-clock delta and run however many whole ticks it covers.
    /// Returns the number of ticks run; `interpolation()` exposes the
    /// leftover fraction for renderers.
    pub fn advance(&mut self, wall_delta_secs: f64) -> u32 {
        let steps = self.clock.advance(wall_delta_secs);
        for _ in 0..steps {
            self.process_commands();
            if self.phase == GamePhase::Playing {
                self.run_systems();
                self.time.advance();
            }
        }
        steps
    }

    /// Fraction of a tick left in the clock accumulator, in [0, 1).
    pub fn interpolation(&self) -> f64 {
        self.clock.interpolation()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.scheduler,
            self.selected,
            &self.score,
            events,
        )
    }

    /// Load a built-in level and start playing it from a clean state.
    pub fn load_level(&mut self, id: u32) -> Result<(), LevelError> {
        let level = levels::level_config(id)?;

        self.world.clear();
        self.grid.reset();
        self.clock.reset();
        self.time = SimTime::default();
        self.economy = Economy::new(level.initial_sun);
        self.scheduler = WaveScheduler::new(&level);
        self.score = ScoreState {
            attackers_total: level.total_spawns(),
            ..ScoreState::default()
        };
        self.selected = None;
        self.sun_spawn_timer = 0.0;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.events.clear();
        self.phase = GamePhase::Playing;

        log::info!(
            "level {} ({}) loaded: {} waves, {} attackers",
            level.id,
            level.name,
            level.total_waves(),
            level.total_spawns()
        );
        self.level = Some(level);
        Ok(())
    }

    /// Reload the current level from scratch. No-op from the menu.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        match self.level.as_ref().map(|l| l.id) {
            Some(id) => self.load_level(id),
            None => Ok(()),
        }
    }

    /// Abandon the current level and return to the menu.
    pub fn exit_to_menu(&mut self) {
        self.world.clear();
        self.grid.reset();
        self.level = None;
        self.selected = None;
        self.phase = GamePhase::Menu;
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Arm a defender kind for placement.
    pub fn select_defender(&mut self, kind: DefenderKind) -> Result<(), ActionError> {
        let level = self.playing_level()?;
        self.economy
            .validate_selection(kind, &level.available_defenders)?;
        self.selected = Some(kind);
        Ok(())
    }

    /// Place the selected defender at a grid cell. All checks pass before
    /// any state changes; a rejection leaves everything untouched.
    pub fn place_at(&mut self, row: usize, col: usize) -> Result<(), ActionError> {
        let level = self.playing_level()?;
        let kind = self.selected.ok_or(ActionError::NoSelection)?;
        if !grid::in_bounds(row, col) {
            return Err(ActionError::OutOfBounds);
        }
        let cell = GridPos::new(row, col);
        if self.grid.occupant(cell).is_some() {
            return Err(ActionError::CellOccupied);
        }
        // Revalidated at placement time: the balance or cooldown may have
        // changed since selection.
        self.economy
            .validate_selection(kind, &level.available_defenders)?;

        let entity = self
            .world
            .spawn((Defender::new(kind, cell), grid::cell_center(cell)));
        self.grid.occupy(cell, entity);
        self.economy.commit_placement(kind);
        self.selected = None;
        self.score.defenders_placed += 1;
        log::debug!("placed {kind:?} at ({row}, {col})");
        Ok(())
    }

    /// Claim a sun drop by its snapshot id. The credit lands after a short
    /// delay while the drop homes toward the bank point.
    pub fn collect_drop(&mut self, id: u64) -> Result<(), ActionError> {
        self.playing_level()?;
        let entity = Entity::from_bits(id).ok_or(ActionError::NotCollectible)?;
        let value = {
            let mut drop = self
                .world
                .get::<&mut SunDrop>(entity)
                .map_err(|_| ActionError::NotCollectible)?;
            if !drop.is_collectible() {
                return Err(ActionError::NotCollectible);
            }
            if !self.economy.has_capacity() {
                return Err(ActionError::SunCapReached);
            }
            drop.state = verdant_core::enums::SunState::Collecting;
            drop.target = Position::new(SUN_BANK_X, SUN_BANK_Y);
            drop.value
        };
        self.economy.begin_collection(value);
        Ok(())
    }

    /// Outcome summary, available once the level ends in victory.
    pub fn completion_report(&self) -> Option<CompletionReport> {
        if self.phase != GamePhase::Victory {
            return None;
        }
        let level = self.level.as_ref()?;
        Some(CompletionReport {
            level_id: level.id,
            score: self.score.to_view(self.time.elapsed_secs),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn sun(&self) -> u32 {
        self.economy.sun()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn playing_level(&self) -> Result<&LevelConfig, ActionError> {
        if self.phase != GamePhase::Playing {
            return Err(ActionError::NotPlaying);
        }
        self.level.as_ref().ok_or(ActionError::NotPlaying)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Rejections surface as events.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result = match command {
            PlayerCommand::SelectDefender { kind } => self.select_defender(kind),
            PlayerCommand::PlaceAt { row, col } => self.place_at(row, col),
            PlayerCommand::CollectDrop { id } => self.collect_drop(id),
            PlayerCommand::Pause => {
                self.pause();
                Ok(())
            }
            PlayerCommand::Resume => {
                self.resume();
                Ok(())
            }
            PlayerCommand::Restart => {
                if let Err(err) = self.restart() {
                    log::warn!("restart failed: {err}");
                }
                Ok(())
            }
            PlayerCommand::ExitToMenu => {
                self.exit_to_menu();
                Ok(())
            }
        };
        if let Err(reason) = result {
            log::debug!("command rejected: {reason}");
            self.events.push(GameEvent::ActionRejected { reason });
        }
    }

    /// Run all systems in order for one fixed step.
    fn run_systems(&mut self) {
        // 1. Economy: cooldown decay and due collection credits.
        let banked = self.economy.tick(DT, &mut self.events);
        self.score.sun_collected += banked;
        // 2. Sun drops: ambient spawns and drop state machines.
        systems::sun_drop::run(&mut self.world, &mut self.rng, &mut self.sun_spawn_timer, DT);
        // 3. Defenders: production, fuses, firing.
        systems::defender::run(&mut self.world, &mut self.score, &mut self.events, DT);
        // 4. Attackers: movement, contact damage, dying grace, boundary.
        let breached = systems::attacker::run(&mut self.world, &mut self.events, DT);
        // 5. Projectiles: travel and far-edge despawn marking.
        systems::projectile::run(&mut self.world, DT);
        // 6. Collision: projectile hits and engagement targeting.
        systems::collision::run(&mut self.world, &mut self.score, &mut self.events);
        // 7. Wave scheduling: release waves, drain spawn queue.
        systems::wave_spawner::run(&mut self.world, &mut self.scheduler, &mut self.events, DT);
        // 8. Cleanup: despawn terminal entities, release grid cells.
        systems::cleanup::run(&mut self.world, &mut self.grid, &mut self.despawn_buffer);
        // 9. Outcome. Defeat wins over victory if both somehow latch.
        if breached {
            log::warn!("defense line breached at tick {}", self.time.tick);
            self.phase = GamePhase::Defeat;
        } else if self.victory_reached() {
            log::info!("level cleared at tick {}", self.time.tick);
            self.phase = GamePhase::Victory;
        }
    }

    /// Victory requires every wave released, the spawn queue drained, and no
    /// attacker entities left. Dying attackers defer it until they despawn.
    fn victory_reached(&mut self) -> bool {
        self.scheduler.exhausted()
            && self.scheduler.queue_is_empty()
            && self
                .world
                .query_mut::<&verdant_core::components::Attacker>()
                .into_iter()
                .next()
                .is_none()
    }

    #[cfg(test)]
    pub fn set_sun(&mut self, sun: u32) {
        self.economy.set_sun(sun);
    }

    /// Skip the remaining waves of the loaded level (for testing).
    #[cfg(test)]
    pub fn exhaust_waves(&mut self) {
        self.scheduler.exhaust();
    }

    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Spawn an attacker directly at a position (for testing).
    #[cfg(test)]
    pub fn spawn_attacker(
        &mut self,
        kind: verdant_core::enums::AttackerKind,
        row: usize,
        x: f64,
    ) -> Entity {
        self.world.spawn((
            verdant_core::components::Attacker::new(kind, row),
            Position::new(x, grid::attacker_y(row)),
        ))
    }
}
