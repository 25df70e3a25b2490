//! Random ship upgrades and the banner that announces them.

use tracing::debug;

use stardrift_core::components::{ShipSection, Text};
use stardrift_core::constants::*;
use stardrift_core::enums::{ShipKind, ShipSide, SideState, UpgradeKind};
use stardrift_core::events::FieldEvent;
use stardrift_core::random::SimRng;

use crate::arena::Arena;

fn classify(roll: f64) -> UpgradeKind {
    if roll <= 0.1 {
        UpgradeKind::ResourceDeposit
    } else if roll <= 0.4 {
        UpgradeKind::Photon
    } else if roll <= 0.7 {
        UpgradeKind::Ship
    } else {
        UpgradeKind::HealthBoost
    }
}

/// Roll an upgrade, rerolling tracks that are already maxed out.
pub fn roll(arena: &Arena, rng: &mut SimRng) -> UpgradeKind {
    loop {
        let kind = classify(rng.uniform(0.0, 1.0));
        let maxed = match kind {
            UpgradeKind::Photon => arena.weapon.upgrades >= MAX_UPGRADES,
            UpgradeKind::Ship => arena.ship.upgrades >= MAX_UPGRADES,
            _ => false,
        };
        if !maxed {
            return kind;
        }
    }
}

/// Grant a random upgrade and announce it.
pub fn upgrade_ship(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) -> UpgradeKind {
    let upgrade = roll(arena, rng);
    apply(arena, upgrade);

    arena.upgrade_text = Text {
        active: true,
        lifetime: UPGRADE_TEXT_TICKS,
        message: upgrade.label().to_string(),
    };
    debug!(?upgrade, "upgrade applied");
    events.push(FieldEvent::UpgradeApplied { upgrade });
    upgrade
}

pub fn apply(arena: &mut Arena, upgrade: UpgradeKind) {
    match upgrade {
        UpgradeKind::ResourceDeposit => {
            arena.score.metal += 10;
            arena.score.alloy += 1;
        }
        UpgradeKind::Photon => {
            let weapon = &mut arena.weapon;
            weapon.photon_speed *= UPGRADE_FACTOR;
            weapon.photon_size *= UPGRADE_FACTOR;
            weapon.cooldown = (weapon.cooldown as f64 * UPGRADE_COOLDOWN_FACTOR) as u32;
            weapon.upgrades += 1;
        }
        UpgradeKind::Ship => {
            let ship = &mut arena.ship;
            ship.speed *= UPGRADE_FACTOR;
            ship.control = (ship.control * UPGRADE_FACTOR).min(1.0);
            ship.upgrades += 1;
        }
        UpgradeKind::HealthBoost => health_boost(arena),
    }
}

/// +25 hp everywhere and a long immunity window on the surviving hull.
/// Sections already blown off stay destroyed.
fn health_boost(arena: &mut Arena) {
    let ship = &mut arena.ship;
    match ship.kind {
        ShipKind::Cruiser => {
            ship.left.hp += HEALTH_BOOST_HP;
            ship.right.hp += HEALTH_BOOST_HP;
            ship.left.state = SideState::Vulnerable;
            boost_hull(ship.section_mut(ShipSide::Back));
        }
        ShipKind::Delta | ShipKind::Cube => {
            for side in [ShipSide::Left, ShipSide::Right, ShipSide::Back] {
                boost_hull(ship.section_mut(side));
            }
        }
    }
}

fn boost_hull(section: &mut ShipSection) {
    if section.state.is_destroyed() {
        return;
    }
    section.hp += HEALTH_BOOST_HP;
    section.state = SideState::Invulnerable(HEALTH_BOOST_INVULN);
}

/// Age the banner and hide it when it runs out.
pub fn update_text(arena: &mut Arena) {
    let text = &mut arena.upgrade_text;
    text.lifetime = text.lifetime.saturating_sub(1);
    if text.lifetime <= 0 {
        text.active = false;
    }
}
