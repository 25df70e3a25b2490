//! Simulation constants and tuning parameters.
//!
//! Every lifetime, cooldown and timer is measured in ticks, not seconds.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

// --- Play field ---

/// Default play-field width in world units.
pub const DEFAULT_FIELD_WIDTH: f64 = 100.0;

/// Default play-field height in world units.
pub const DEFAULT_FIELD_HEIGHT: f64 = 75.0;

/// Number of levels in one asteroid field.
pub const DEFAULT_MAX_LEVEL: u32 = 3;

// --- Pool capacities ---

pub const MAX_PHOTONS: usize = 8;
pub const MAX_ASTEROIDS: usize = 16;
pub const MAX_DEBRIS: usize = 25;
pub const MAX_DUST: usize = 100;
pub const MAX_POINTS: usize = 10;

/// Vertex capacity of one asteroid silhouette.
pub const MAX_VERTICES: usize = 16;

/// Background stars per grid row/column.
pub const STAR_GRID: usize = 6;

/// Total background stars (one per grid cell).
pub const MAX_BACKGROUND_STARS: usize = STAR_GRID * STAR_GRID;

// --- Asteroids ---

/// Outer vertex radius as a multiple of asteroid size. Also the broad-phase radius.
pub const MAX_ASTEROID_VARIANCE: f64 = 3.0;

/// Inner vertex radius as a multiple of asteroid size. Anything inside is a guaranteed hit.
pub const MIN_ASTEROID_VARIANCE: f64 = 2.0;

/// Spin range of a freshly created asteroid (radians per tick, symmetric).
pub const ASTEROID_MAX_SPIN: f64 = 0.2;

/// Speed range of a freshly created asteroid per axis.
pub const ASTEROID_MIN_SPEED: f64 = 0.2;
pub const ASTEROID_MAX_SPEED: f64 = 0.8;

/// Minimum vertex count of a child asteroid split off a parent.
pub const CHILD_MIN_VERTICES: usize = 6;

// --- Debris & dust ---

/// Nominal debris lifetime before jitter.
pub const DEBRIS_LIFETIME: f64 = 125.0;

/// Per-tick damping applied to debris velocity and spin.
pub const DEBRIS_DAMPING: f64 = 0.99;

/// Per-tick damping applied to dust velocity.
pub const DUST_DAMPING: f64 = 0.99;

/// Lifetime of dust thrown off by colliding or splitting asteroids.
pub const ASTEROID_DUST_LIFETIME: i32 = 100;

/// Lifetime of dust left behind by expiring debris or a collapsing shield.
pub const BURST_DUST_LIFETIME: i32 = 45;

/// Dust particles in a collapsing-shield ring.
pub const SHIELD_BURST_DUST: usize = 32;

/// Chance that a small-asteroid debris piece is an upgrade pickup.
pub const UPGRADE_DEBRIS_CHANCE: f64 = 0.1;

// --- Score popups ---

pub const POINTS_LIFETIME: i32 = 30;

/// Upward drift of a score popup per tick.
pub const POINTS_RISE: f64 = 0.1;

// --- Scoring ---

pub const SCORE_LARGE: u32 = 5;
pub const SCORE_MEDIUM: u32 = 3;
pub const SCORE_SMALL: u32 = 2;
pub const SCORE_COMMON_DEBRIS: u32 = 10;
pub const SCORE_UPGRADE_DEBRIS: u32 = 100;

/// High score a fresh player record starts with.
pub const DEFAULT_HIGH_SCORE: u32 = 100;

// --- Level progression ---

/// Level-transition delay once the field is cleared.
pub const LEVEL_TRANSITION_TICKS: u32 = 120;

/// Level-transition delay after clearing the final level.
pub const FINAL_TRANSITION_TICKS: u32 = 360;

/// Extra final-level delay per digit of the session score.
pub const FINAL_TRANSITION_TICKS_PER_DIGIT: u32 = 20;

// --- Ship ---

/// Countdown from ship destruction to the return-to-title event.
pub const RESPAWN_TICKS: u32 = 200;

pub const SHIP_BASE_HP: f64 = 100.0;
pub const SHIP_BASE_SPEED: f64 = 1.0;
pub const SHIP_BASE_CONTROL: f64 = 0.05;

/// Shield capacity of the cruiser.
pub const CRUISER_SHIELD_HP: f64 = 300.0;

/// Shield regenerates by `capacity / SHIELD_REGEN_DIVISOR` per tick.
pub const SHIELD_REGEN_DIVISOR: f64 = 200.0;

/// Damage from a direct edge collision.
pub const EDGE_HIT_DAMAGE: f64 = 20.0;

/// Delta side invulnerability after an edge hit.
pub const DELTA_EDGE_INVULN: u32 = 50;

/// Delta side invulnerability after a core (inner radius) hit.
pub const DELTA_CORE_INVULN: u32 = 75;

/// Cube hull invulnerability after an edge hit.
pub const CUBE_EDGE_INVULN: u32 = 30;

/// Cruiser hull invulnerability after a hit.
pub const CRUISER_HULL_INVULN: u32 = 40;

/// Ticks without shield contact before the cruiser shield regenerates.
pub const SHIELD_REGEN_DELAY: u32 = 100;

/// Delta turn step: 2π / DELTA_TURN_DIVISOR per tick.
pub const DELTA_TURN_DIVISOR: f64 = 30.0;

/// Cruiser turn step: 2π / CRUISER_TURN_DIVISOR per tick, before control scaling.
pub const CRUISER_TURN_DIVISOR: f64 = 90.0;

/// Per-tick acceleration of the cube on each held axis.
pub const CUBE_ACCELERATION: f64 = 0.1;

// --- Photons ---

pub const PHOTON_BASE_SIZE: f64 = 1.0;
pub const PHOTON_BASE_SPEED: f64 = 2.0;

// --- Upgrades ---

/// Cap on photon and ship upgrade tracks.
pub const MAX_UPGRADES: u32 = 10;

/// Multiplier applied by photon and ship upgrades.
pub const UPGRADE_FACTOR: f64 = 1.1;

/// Cooldown multiplier per photon upgrade.
pub const UPGRADE_COOLDOWN_FACTOR: f64 = 0.9;

/// Hit points granted to each side by a health boost.
pub const HEALTH_BOOST_HP: f64 = 25.0;

/// Invulnerability granted by a health boost.
pub const HEALTH_BOOST_INVULN: u32 = 200;

pub const UPGRADE_TEXT_TICKS: i32 = 250;

// --- Cosmetics ---

/// Oscillation step per tick (wraps at π).
pub const OSCILLATION_STEP: f64 = std::f64::consts::PI / 30.0;
