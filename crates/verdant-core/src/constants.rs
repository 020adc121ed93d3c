//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Longest wall-clock delta the fixed clock will absorb in one call (seconds).
/// Larger deltas are clamped so a stalled host does not trigger a step spiral.
pub const MAX_FRAME_SECS: f64 = 0.1;

// --- Play area ---

/// Defense grid rows (lanes).
pub const GRID_ROWS: usize = 5;

/// Defense grid columns.
pub const GRID_COLS: usize = 3;

/// Play area width in pixels.
pub const PLAY_WIDTH: f64 = 450.0;

/// Play area height in pixels.
pub const PLAY_HEIGHT: f64 = 720.0;

/// Cell width: the grid leaves one spare column of margin.
pub const CELL_WIDTH: f64 = PLAY_WIDTH / (GRID_COLS as f64 + 1.0);

/// Cell height: the grid leaves two spare rows of margin.
pub const CELL_HEIGHT: f64 = PLAY_HEIGHT / (GRID_ROWS as f64 + 2.0);

/// Number of built-in levels.
pub const LEVEL_COUNT: u32 = 3;

// --- Attackers ---

/// X coordinate where attackers enter (right of the visible area).
pub const ATTACKER_SPAWN_X: f64 = 500.0;

/// Crossing this line loses the game.
pub const DEFEAT_X: f64 = 0.0;

/// Attacker body width in pixels (used for adjacency and hit geometry).
pub const ATTACKER_WIDTH: f64 = 40.0;

/// Attacker body height in pixels (offsets the sprite above the lane center).
pub const ATTACKER_HEIGHT: f64 = 60.0;

/// Grace period between an attacker reaching zero durability and despawn (seconds).
pub const DYING_GRACE_SECS: f64 = 0.5;

// --- Defenders ---

/// Defender body width in pixels.
pub const DEFENDER_WIDTH: f64 = 40.0;

/// Defender body height in pixels.
pub const DEFENDER_HEIGHT: f64 = 40.0;

/// Durability fraction below which a defender shows as damaged.
pub const DAMAGED_FRACTION: f64 = 0.5;

/// An attacker engages a defender when the gap closes below this (pixels).
pub const CONTACT_RANGE: f64 = 50.0;

// --- Projectiles ---

/// Horizontal projectile speed (pixels per second).
pub const PROJECTILE_SPEED: f64 = 200.0;

/// A projectile hits when within this horizontal distance of a target (pixels).
pub const PROJECTILE_HIT_RADIUS: f64 = 20.0;

/// Projectiles past this X are spent and reclaimed.
pub const PROJECTILE_DESPAWN_X: f64 = ATTACKER_SPAWN_X + 100.0;

// --- Sun economy ---

/// Hard cap on banked sun.
pub const SUN_CAP: u32 = 9990;

/// Value of an ambient sky drop.
pub const SKY_SUN_VALUE: u32 = 25;

/// Interval between ambient sky drops (seconds).
pub const SKY_SUN_INTERVAL_SECS: f64 = 7.0;

/// Horizontal margin kept clear of the play-area edges when a sky drop spawns.
pub const SKY_SUN_MARGIN: f64 = 50.0;

/// Y coordinate where sky drops appear.
pub const SKY_SUN_SPAWN_Y: f64 = 50.0;

/// Distance a sky drop falls before coming to rest (pixels).
pub const SKY_SUN_FALL_DISTANCE: f64 = 200.0;

/// Fall speed of a sky drop (pixels per second).
pub const SUN_FALL_SPEED: f64 = 50.0;

/// Uncollected drops expire this long after spawning (seconds).
pub const SUN_LIFETIME_SECS: f64 = 10.0;

/// Homing speed of a collected drop toward the bank point (pixels per second).
pub const SUN_COLLECT_SPEED: f64 = 300.0;

/// A collecting drop is absorbed within this distance of the bank point (pixels).
pub const SUN_COLLECT_EPSILON: f64 = 5.0;

/// Bank point a collected drop homes toward.
pub const SUN_BANK_X: f64 = 50.0;
pub const SUN_BANK_Y: f64 = 20.0;

/// Delay between collecting a drop and the balance credit landing (seconds).
pub const SUN_CREDIT_DELAY_SECS: f64 = 0.5;
