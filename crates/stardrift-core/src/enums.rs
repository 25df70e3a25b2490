//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::ShipKindError;

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract mode: decorative asteroids drift, no ship.
    #[default]
    Title,
    /// A session is running.
    Playing,
    /// A session is frozen.
    Paused,
}

/// Ship archetype. Each one moves, fires and takes damage differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    /// Three-piece wedge with independent left/right/back sections.
    #[default]
    Delta,
    /// Axis-aligned square with a single hull pool and a four-way volley.
    Cube,
    /// Large shielded hull with a three-gun volley.
    Cruiser,
}

impl ShipKind {
    pub const ALL: [ShipKind; 3] = [ShipKind::Delta, ShipKind::Cube, ShipKind::Cruiser];

    /// Collision and draw radius.
    pub fn size(self) -> f64 {
        match self {
            ShipKind::Delta => 4.0,
            ShipKind::Cube => 2.0,
            ShipKind::Cruiser => 8.0,
        }
    }

    /// Ticks added to the firing cooldown by each volley.
    pub fn cooldown(self) -> u32 {
        match self {
            ShipKind::Delta => 0,
            ShipKind::Cube | ShipKind::Cruiser => 10,
        }
    }
}

impl TryFrom<u8> for ShipKind {
    type Error = ShipKindError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShipKind::Delta),
            1 => Ok(ShipKind::Cube),
            2 => Ok(ShipKind::Cruiser),
            other => Err(ShipKindError(other)),
        }
    }
}

/// Asteroid size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// Scale factor used for radii, spawn margins and momentum.
    pub fn scale(self) -> f64 {
        self.units() as f64
    }

    /// Integer size units (2, 3, 5).
    pub fn units(self) -> u32 {
        match self {
            AsteroidSize::Small => 2,
            AsteroidSize::Medium => 3,
            AsteroidSize::Large => 5,
        }
    }

    /// The class an asteroid shrinks to when hit, or `None` if it shatters.
    pub fn shrink(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// Debris kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebrisKind {
    /// Ship wreckage. Cannot be picked up.
    #[default]
    Wreckage,
    /// Common asteroid remnant worth metal.
    Common,
    /// Rare remnant that grants an upgrade and alloy.
    Upgrade,
}

impl DebrisKind {
    pub fn is_pickup(self) -> bool {
        !matches!(self, DebrisKind::Wreckage)
    }
}

/// Per-side damage state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideState {
    /// Removed for the rest of this ship life. Never decays.
    Destroyed,
    /// Can take direct collision damage now.
    #[default]
    Vulnerable,
    /// Ticks of direct-collision immunity remaining.
    Invulnerable(u32),
}

impl SideState {
    pub fn is_destroyed(self) -> bool {
        matches!(self, SideState::Destroyed)
    }

    pub fn is_vulnerable(self) -> bool {
        matches!(self, SideState::Vulnerable)
    }

    /// One tick of decay toward `Vulnerable`.
    pub fn decayed(self) -> SideState {
        match self {
            SideState::Invulnerable(n) if n > 1 => SideState::Invulnerable(n - 1),
            SideState::Invulnerable(_) => SideState::Vulnerable,
            other => other,
        }
    }
}

/// Ship section identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipSide {
    Left,
    Right,
    Back,
}

/// Outcome of collecting an upgrade pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    ResourceDeposit,
    Photon,
    Ship,
    HealthBoost,
}

impl UpgradeKind {
    /// Banner text shown while the upgrade text is alive.
    pub fn label(self) -> &'static str {
        match self {
            UpgradeKind::ResourceDeposit => "Metal/alloy deposit",
            UpgradeKind::Photon => "Photon upgrade",
            UpgradeKind::Ship => "Ship upgrade",
            UpgradeKind::HealthBoost => "Health boost",
        }
    }
}
