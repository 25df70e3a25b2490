//! Session scoring.
//!
//! The per-event counters are the source of truth. The session score is
//! always derived from them on demand; popups are cosmetic.

use glam::DVec2;

use stardrift_core::components::Points;
use stardrift_core::constants::*;
use stardrift_core::enums::AsteroidSize;
use stardrift_core::player::PlayerRecord;
use stardrift_core::pool::Pool;

/// Per-session tallies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTally {
    pub large_destroyed: u32,
    pub medium_destroyed: u32,
    pub small_destroyed: u32,
    pub common_collected: u32,
    pub upgrades_collected: u32,
    /// Metal gathered this session. Forfeited if the ship is lost.
    pub metal: u32,
    /// Alloy gathered this session. Forfeited if the ship is lost.
    pub alloy: u32,
}

impl ScoreTally {
    pub fn session_score(&self) -> u32 {
        self.large_destroyed * SCORE_LARGE
            + self.medium_destroyed * SCORE_MEDIUM
            + self.small_destroyed * SCORE_SMALL
            + self.common_collected * SCORE_COMMON_DEBRIS
            + self.upgrades_collected * SCORE_UPGRADE_DEBRIS
    }

    pub fn record_asteroid(&mut self, size: AsteroidSize) {
        match size {
            AsteroidSize::Large => self.large_destroyed += 1,
            AsteroidSize::Medium => self.medium_destroyed += 1,
            AsteroidSize::Small => self.small_destroyed += 1,
        }
    }

    /// Decimal digit count of the session score (at least 1).
    pub fn score_digits(&self) -> u32 {
        self.session_score().checked_ilog10().map_or(1, |d| d + 1)
    }

    /// Offers the session score to the player's high score.
    pub fn update_high_score(&self, record: &mut PlayerRecord) -> bool {
        record.offer_score(self.session_score())
    }
}

/// Spawns a floating score popup. A full popup pool drops it silently.
pub fn add_score(points: &mut Pool<Points, MAX_POINTS>, amount: u32, position: DVec2) {
    let spawned = points.spawn(Points {
        active: true,
        amount,
        lifetime: POINTS_LIFETIME,
        position,
    });
    if spawned.is_none() {
        tracing::trace!(amount, "points pool full, popup dropped");
    }
}
