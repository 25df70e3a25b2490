//! Entity data for every pooled object plus the ship, weapon and banner.
//!
//! Components are plain data. Movement, collision and spawning logic lives
//! in the simulation crate's systems.

use glam::DVec2;

use crate::constants::*;
use crate::enums::{AsteroidSize, DebrisKind, ShipKind, ShipSide, SideState};
use crate::pool::Slot;

// --- Ship ---

/// Hit points and damage state of one ship section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipSection {
    pub hp: f64,
    pub state: SideState,
}

impl ShipSection {
    pub fn new(hp: f64, state: SideState) -> Self {
        Self { hp, state }
    }

    pub fn alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Eligible for a direct (edge) hit.
    pub fn can_take_hit(&self) -> bool {
        self.state.is_vulnerable() && self.alive()
    }
}

/// The player ship.
///
/// For the cruiser, `left.hp` is the shield, `right.hp` is the shield capacity
/// and `left.state` is the shield regeneration timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub kind: ShipKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub heading: f64,
    pub size: f64,
    pub left: ShipSection,
    pub right: ShipSection,
    pub back: ShipSection,
    pub speed: f64,
    pub control: f64,
    pub upgrades: u32,
}

impl Ship {
    pub fn section(&self, side: ShipSide) -> &ShipSection {
        match side {
            ShipSide::Left => &self.left,
            ShipSide::Right => &self.right,
            ShipSide::Back => &self.back,
        }
    }

    pub fn section_mut(&mut self, side: ShipSide) -> &mut ShipSection {
        match side {
            ShipSide::Left => &mut self.left,
            ShipSide::Right => &mut self.right,
            ShipSide::Back => &mut self.back,
        }
    }

    pub fn shield(&self) -> f64 {
        self.left.hp
    }

    pub fn shield_capacity(&self) -> f64 {
        self.right.hp
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            kind: ShipKind::default(),
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            heading: 0.0,
            size: ShipKind::default().size(),
            left: ShipSection::new(SHIP_BASE_HP, SideState::Vulnerable),
            right: ShipSection::new(SHIP_BASE_HP, SideState::Vulnerable),
            back: ShipSection::new(SHIP_BASE_HP, SideState::Vulnerable),
            speed: SHIP_BASE_SPEED,
            control: SHIP_BASE_CONTROL,
            upgrades: 0,
        }
    }
}

/// Photon gun tuning. Upgrades mutate it for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub photon_size: f64,
    pub photon_speed: f64,
    /// Ticks added to `current_cooldown` by each volley.
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub upgrades: u32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            photon_size: PHOTON_BASE_SIZE,
            photon_speed: PHOTON_BASE_SPEED,
            cooldown: 0,
            current_cooldown: 0,
            upgrades: 0,
        }
    }
}

// --- Pooled entities ---

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Photon {
    pub active: bool,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// An asteroid with a rest-frame silhouette rotated by `heading`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub active: bool,
    pub position: DVec2,
    pub velocity: DVec2,
    pub heading: f64,
    pub spin: f64,
    pub size: AsteroidSize,
    pub vertex_count: usize,
    pub vertices: [DVec2; MAX_VERTICES],
}

impl Default for Asteroid {
    fn default() -> Self {
        Self {
            active: false,
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            heading: 0.0,
            spin: 0.0,
            size: AsteroidSize::default(),
            vertex_count: 0,
            vertices: [DVec2::ZERO; MAX_VERTICES],
        }
    }
}

/// A spinning triangle: ship wreckage or an asteroid remnant pickup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Debris {
    pub active: bool,
    pub lifetime: i32,
    pub kind: DebrisKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub heading: f64,
    pub spin: f64,
    pub vertices: [DVec2; 3],
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dust {
    pub active: bool,
    pub lifetime: i32,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// Floating score popup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Points {
    pub active: bool,
    pub amount: u32,
    pub lifetime: i32,
    pub position: DVec2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BackgroundStar {
    pub active: bool,
    pub position: DVec2,
    pub flicker: f64,
    pub flicker_rate: f64,
}

/// Transient banner text (upgrade announcements).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub active: bool,
    pub lifetime: i32,
    pub message: String,
}

macro_rules! impl_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                #[inline(always)]
                fn is_active(&self) -> bool {
                    self.active
                }

                #[inline(always)]
                fn set_active(&mut self, active: bool) {
                    self.active = active;
                }
            }
        )*
    };
}

impl_slot!(Photon, Asteroid, Debris, Dust, Points, BackgroundStar);
