//! The owned aggregate of everything that lives in the asteroid field.

use stardrift_core::components::*;
use stardrift_core::constants::*;
use stardrift_core::enums::{ShipKind, ShipSide};
use stardrift_core::player::PlayerRecord;
use stardrift_core::pool::Pool;
use stardrift_core::types::Bounds;

use crate::scoring::ScoreTally;

/// All pools, the ship and the session counters.
///
/// Systems borrow it mutably one pass at a time. Slot indices obtained from a
/// pool are only meaningful until the next call that may spawn or release.
#[derive(Debug, Clone)]
pub struct Arena {
    pub bounds: Bounds,
    pub ship: Ship,
    pub weapon: Weapon,
    pub photons: Pool<Photon, MAX_PHOTONS>,
    pub asteroids: Pool<Asteroid, MAX_ASTEROIDS>,
    pub debris: Pool<Debris, MAX_DEBRIS>,
    pub dust: Pool<Dust, MAX_DUST>,
    pub points: Pool<Points, MAX_POINTS>,
    pub stars: Pool<BackgroundStar, MAX_BACKGROUND_STARS>,
    pub upgrade_text: Text,
    pub score: ScoreTally,
    /// The shell's persistent record; survives `clear`.
    pub player: PlayerRecord,
    pub level: u32,
    pub max_level: u32,
    /// Level-transition countdown; `None` while a level is in progress.
    pub level_timer: Option<u32>,
    /// Ticks until the return-to-title event; `None` while the ship is flying.
    pub respawn: Option<u32>,
    pub oscillation: f64,
}

impl Arena {
    pub fn new(bounds: Bounds, max_level: u32) -> Self {
        Self {
            bounds,
            ship: Ship::default(),
            weapon: Weapon::default(),
            photons: Pool::new(),
            asteroids: Pool::new(),
            debris: Pool::new(),
            dust: Pool::new(),
            points: Pool::new(),
            stars: Pool::new(),
            upgrade_text: Text::default(),
            score: ScoreTally::default(),
            player: PlayerRecord::default(),
            level: 0,
            max_level,
            level_timer: None,
            respawn: None,
            oscillation: 0.0,
        }
    }

    /// Empties every gameplay pool and rewinds progression. Stars survive.
    pub fn clear(&mut self) {
        self.photons.clear();
        self.asteroids.clear();
        self.debris.clear();
        self.dust.clear();
        self.points.clear();
        self.upgrade_text = Text::default();
        self.level = 0;
        self.level_timer = None;
        self.respawn = None;
    }

    pub fn is_respawning(&self) -> bool {
        self.respawn.is_some()
    }

    /// A hull section with no hit points left must be marked destroyed.
    ///
    /// Only the delta's three sections and the other kinds' back hull are
    /// hull sections; the cruiser's left/right slots hold its shield.
    pub fn ship_sections_consistent(&self) -> bool {
        let sides: &[ShipSide] = match self.ship.kind {
            ShipKind::Delta => &[ShipSide::Left, ShipSide::Right, ShipSide::Back],
            ShipKind::Cube | ShipKind::Cruiser => &[ShipSide::Back],
        };
        sides
            .iter()
            .map(|&side| self.ship.section(side))
            .all(|s| s.alive() || s.state.is_destroyed())
    }
}
