//! Simulation engine: the asteroid field and its tick orchestrator.
//!
//! `Simulation` owns the arena, processes player commands, runs every pass
//! in a fixed order and produces `FieldSnapshot`s. Completely headless, so
//! a seeded run is reproducible tick for tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::info;

use stardrift_core::commands::PlayerCommand;
use stardrift_core::constants::*;
use stardrift_core::enums::{GamePhase, ShipKind};
use stardrift_core::error::ConfigError;
use stardrift_core::events::FieldEvent;
use stardrift_core::input::InputState;
use stardrift_core::player::PlayerRecord;
use stardrift_core::random::SimRng;
use stardrift_core::state::FieldSnapshot;
use stardrift_core::types::Bounds;

use crate::arena::Arena;
use crate::scoring::ScoreTally;
use crate::systems;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same simulation.
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    /// Levels in the asteroid field; clearing the last completes the area.
    pub max_level: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_level == 0 {
            return Err(ConfigError::InvalidMaxLevel);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// The simulation. Owns the arena and all session state.
pub struct Simulation {
    arena: Arena,
    phase: GamePhase,
    tick_count: u64,
    rng: SimRng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<FieldEvent>,
}

impl Simulation {
    /// Create a simulation sitting on the title screen.
    pub fn new(config: SimConfig) -> Self {
        Self::with_player(config, PlayerRecord::default())
    }

    /// Create a simulation that reads and banks into `player`.
    pub fn with_player(config: SimConfig, player: PlayerRecord) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");

        let mut arena = Arena::new(config.bounds(), config.max_level);
        arena.player = player;
        let mut sim = Self {
            arena,
            phase: GamePhase::Title,
            tick_count: 0,
            rng: SimRng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        world_setup::scatter_stars(&mut sim.arena.stars, &mut sim.rng, &config.bounds());
        sim.enter_title();
        sim
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
    pub fn tick(&mut self, input: &InputState) -> FieldSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Playing => {
                self.run_systems(input);
                self.tick_count += 1;
            }
            GamePhase::Title => {
                systems::background::run(&mut self.arena);
                systems::asteroids::drift(&mut self.arena);
                self.tick_count += 1;
            }
            GamePhase::Paused => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.arena, self.phase, self.tick_count, events)
    }

    /// Fire the weapon right away, outside the tick. Returns photons launched.
    pub fn fire_requested(&mut self) -> usize {
        if self.phase != GamePhase::Playing {
            return 0;
        }
        systems::ship::fire(&mut self.arena)
    }

    /// Switch ships. The session restarts from level 0.
    pub fn change_ship_type(&mut self, kind: ShipKind) {
        self.start_session(kind);
    }

    /// Clear every pool and restart the session with the current ship.
    pub fn reset(&mut self) {
        self.start_session(self.arena.ship.kind);
    }

    /// Leave the title screen (or restart) with a fresh ship of `kind`.
    pub fn start_session(&mut self, kind: ShipKind) {
        self.arena.clear();
        self.arena.score = ScoreTally::default();
        let (ship, weapon) = world_setup::ship_loadout(kind, &self.arena.bounds);
        self.arena.ship = ship;
        self.arena.weapon = weapon;
        self.phase = GamePhase::Playing;
        info!(?kind, "session started");
    }

    /// Abandon the field for the title screen. Unbanked currencies are lost.
    pub fn return_to_title(&mut self) {
        info!(score = self.arena.score.session_score(), "returning to title");
        self.enter_title();
    }

    /// Jump out: bank the session currencies and high score, then return
    /// to the title. Refused on the title screen and while the ship is down.
    pub fn bank_session(&mut self) -> bool {
        if self.phase == GamePhase::Title || self.arena.is_respawning() {
            return false;
        }

        let metal = self.arena.score.metal as f64;
        let alloy = self.arena.score.alloy as f64;
        let player = &mut self.arena.player;
        player.metal += metal;
        player.alloy += alloy;
        self.arena.score.update_high_score(&mut self.arena.player);
        info!(
            metal,
            alloy,
            high_score = self.arena.player.high_score,
            "session banked"
        );
        self.events.push(FieldEvent::SessionBanked { metal, alloy });
        self.enter_title();
        true
    }

    /// Resize the play field. Stars are regenerated; everything else wraps
    /// into the new bounds on its next advance.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.arena.bounds = Bounds::new(width, height);
        world_setup::scatter_stars(&mut self.arena.stars, &mut self.rng, &self.arena.bounds);
    }

    /// Current state without advancing. Pending events are not drained.
    pub fn snapshot(&self) -> FieldSnapshot {
        systems::snapshot::build(&self.arena, self.phase, self.tick_count, Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read-only view of every pool, the ship and the counters.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.arena.player
    }

    pub fn level(&self) -> u32 {
        self.arena.level
    }

    pub fn session_score(&self) -> u32 {
        self.arena.score.session_score()
    }

    /// Mutable access for tests that stage a scene by hand.
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut Arena, &mut SimRng, &mut Vec<FieldEvent>) {
        (&mut self.arena, &mut self.rng, &mut self.events)
    }

    fn enter_title(&mut self) {
        self.arena.clear();
        world_setup::spawn_title_asteroids(&mut self.arena, &mut self.rng);
        self.phase = GamePhase::Title;
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession { ship } => {
                if self.phase == GamePhase::Title {
                    self.start_session(ship);
                }
            }
            PlayerCommand::ChangeShip { ship } => self.change_ship_type(ship),
            PlayerCommand::Reset => {
                if self.phase != GamePhase::Title {
                    self.reset();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToTitle => {
                if self.phase != GamePhase::Title {
                    self.return_to_title();
                }
            }
            PlayerCommand::JumpOut => {
                self.bank_session();
            }
            PlayerCommand::Fire => {
                self.fire_requested();
            }
            PlayerCommand::DebugDestroyShip => {
                if self.phase == GamePhase::Playing && !self.arena.is_respawning() {
                    systems::ship_damage::destroy_ship(&mut self.arena, &mut self.rng, &mut self.events);
                }
            }
            PlayerCommand::DebugUpgrade => {
                if self.phase == GamePhase::Playing && !self.arena.is_respawning() {
                    systems::upgrades::upgrade_ship(&mut self.arena, &mut self.rng, &mut self.events);
                }
            }
        }
    }

    /// Run all passes in order. Later passes see earlier mutations.
    fn run_systems(&mut self, input: &InputState) {
        let arena = &mut self.arena;
        let rng = &mut self.rng;
        let events = &mut self.events;

        // 1. Star flicker and oscillation
        systems::background::run(arena);
        // 2. Dust
        systems::dust::run(&mut arena.dust);
        // 3. Debris (expiry bursts into dust)
        systems::debris::run(arena, rng);
        // 4. Ship movement
        systems::ship::run(arena, input);
        // 5. Photons (retire off-field)
        systems::photons::run(arena);
        // 6. Asteroids (may arm the level timer)
        systems::asteroids::run(arena, events);
        // 7. Score popups
        systems::points::run(arena);
        // 8. Photon/asteroid collisions
        systems::collision::photon_asteroid(arena, rng, events);
        // 9. Ship/asteroid collisions
        systems::collision::ship_asteroid(arena, rng, events);
        // 10. Debris pickup
        systems::collision::debris_pickup(arena, rng, events);
        // 11. Weapon cooldown
        systems::timers::lower_cooldown(arena);
        // 12. Invulnerability decay and shield regen
        systems::ship_damage::update_damage(arena);
        // 13. Upgrade banner
        systems::upgrades::update_text(arena);
        // 14. Level transition (may start the next level)
        systems::timers::update_level_timer(arena, rng, events);
        // 15. Respawn countdown
        if systems::timers::update_respawn(arena, events) {
            self.enter_title();
        }
    }
}
