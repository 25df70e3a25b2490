//! Collision passes: photons against asteroids, the ship against asteroids,
//! and the ship against pickup debris.
//!
//! Every test starts with a broad circle check on the asteroid's maximum
//! radius before any polygon work. Slot indices are re-read after each
//! response because a hit can release or repurpose slots.

use glam::DVec2;
use tracing::debug;

use stardrift_core::constants::*;
use stardrift_core::enums::{DebrisKind, ShipKind, ShipSide, SideState};
use stardrift_core::events::FieldEvent;
use stardrift_core::geometry::{point_near_segment, segments_intersect};
use stardrift_core::random::SimRng;

use crate::arena::Arena;
use crate::hull;
use crate::scoring;
use crate::systems::{asteroids, dust, ship_damage, upgrades};

// ---------------------------------------------------------------------------
// Photon <-> asteroid
// ---------------------------------------------------------------------------

/// Each asteroid is consumed by at most one photon per tick and each photon
/// destroys at most one asteroid.
pub fn photon_asteroid(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    let photon_size = arena.weapon.photon_size;

    for i in 0..MAX_ASTEROIDS {
        if !arena.asteroids.is_active(i) {
            continue;
        }
        let asteroid = arena.asteroids[i];
        let scale = asteroid.size.scale();
        let outer = scale * MAX_ASTEROID_VARIANCE + photon_size;
        let inner = scale * MIN_ASTEROID_VARIANCE + photon_size;

        let hit = arena.photons.iter_active().find_map(|(j, photon)| {
            let d2 = asteroid.position.distance_squared(photon.position);
            if d2 > outer * outer {
                return None;
            }
            if d2 <= inner * inner {
                return Some(j);
            }
            hull::asteroid_edges(&asteroid)
                .any(|(prev, cur)| point_near_segment(photon.position, cur, prev, photon_size))
                .then_some(j)
        });

        if let Some(j) = hit {
            asteroids::destroy(arena, rng, events, i, j);
        }
    }
}

// ---------------------------------------------------------------------------
// Ship <-> asteroid
// ---------------------------------------------------------------------------

/// Unit vector pointing from `from` toward `to`, or zero if they coincide.
fn away(from: DVec2, to: DVec2) -> DVec2 {
    (to - from).normalize_or_zero()
}

pub fn ship_asteroid(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    if arena.is_respawning() {
        return;
    }

    for i in 0..MAX_ASTEROIDS {
        if arena.is_respawning() {
            break;
        }
        if !arena.asteroids.is_active(i) {
            continue;
        }
        match arena.ship.kind {
            ShipKind::Delta => delta_vs_asteroid(arena, rng, events, i),
            ShipKind::Cube => cube_vs_asteroid(arena, rng, events, i),
            ShipKind::Cruiser => cruiser_vs_asteroid(arena, rng, events, i),
        }
    }

    // A single pass can zero every delta section through the first
    // destruction path; finish the ship off so it always ends up respawning.
    let ship = &arena.ship;
    if ship.kind == ShipKind::Delta
        && !arena.is_respawning()
        && [ship.left, ship.right, ship.back]
            .iter()
            .all(|s| s.state.is_destroyed())
    {
        ship_damage::destroy_ship(arena, rng, events);
    }

    debug_assert!(
        arena.ship_sections_consistent(),
        "ship section at zero hp left undestroyed: {:?}",
        arena.ship
    );
}

/// Apply a direct hit to one section if it can take one.
fn direct_hit(
    arena: &mut Arena,
    rng: &mut SimRng,
    events: &mut Vec<FieldEvent>,
    side: ShipSide,
    immunity: u32,
) {
    let section = arena.ship.section_mut(side);
    if !section.can_take_hit() {
        return;
    }
    section.hp -= EDGE_HIT_DAMAGE;
    section.state = SideState::Invulnerable(immunity);
    if !section.alive() {
        ship_damage::destroy_ship(arena, rng, events);
    }
}

fn delta_vs_asteroid(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>, idx: usize) {
    let asteroid = arena.asteroids[idx];
    let scale = asteroid.size.scale();
    let outer = scale * MAX_ASTEROID_VARIANCE + arena.ship.size;

    if asteroid.position.distance_squared(arena.ship.position) <= outer * outer {
        for (prev, cur) in hull::asteroid_edges(&asteroid) {
            let h = hull::delta_hull(&arena.ship);
            let sides = [
                (ShipSide::Right, h.back_right, h.nose),
                (ShipSide::Left, h.back_left, h.nose),
                (ShipSide::Back, h.back_left, h.back_right),
            ];
            for (side, a, b) in sides {
                if segments_intersect(a, b, cur, prev) {
                    direct_hit(arena, rng, events, side, DELTA_EDGE_INVULN);
                }
            }
        }
    }

    let core = scale * MIN_ASTEROID_VARIANCE;
    if asteroid.position.distance_squared(arena.ship.position) > core * core {
        return;
    }

    arena.ship.velocity += away(asteroid.position, arena.ship.position) * 0.1;

    for side in [ShipSide::Right, ShipSide::Left, ShipSide::Back] {
        let section = arena.ship.section_mut(side);
        if !section.alive() {
            continue;
        }
        section.hp -= 1.0;
        if section.state.is_vulnerable() {
            section.hp -= EDGE_HIT_DAMAGE;
            section.state = SideState::Invulnerable(DELTA_CORE_INVULN);
        }
        if !section.alive() {
            ship_damage::destroy_ship(arena, rng, events);
        }
    }
}

fn cube_vs_asteroid(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>, idx: usize) {
    let asteroid = arena.asteroids[idx];
    let scale = asteroid.size.scale();
    let outer = scale * MAX_ASTEROID_VARIANCE + arena.ship.size;

    if asteroid.position.distance_squared(arena.ship.position) <= outer * outer {
        for (prev, cur) in hull::asteroid_edges(&asteroid) {
            if !arena.ship.back.alive() {
                break;
            }
            if arena.ship.back.state.is_vulnerable() {
                let touching = hull::cube_edges(&arena.ship)
                    .iter()
                    .any(|&(a, b)| segments_intersect(a, b, cur, prev));
                if touching {
                    arena.ship.back.hp -= EDGE_HIT_DAMAGE;
                    arena.ship.back.state = SideState::Invulnerable(CUBE_EDGE_INVULN);
                }
            }
            if !arena.ship.back.alive() {
                ship_damage::destroy_ship(arena, rng, events);
            }
        }
    }

    let core = scale * MIN_ASTEROID_VARIANCE;
    if arena.ship.back.state.is_destroyed()
        || asteroid.position.distance_squared(arena.ship.position) > core * core
    {
        return;
    }

    arena.ship.back.hp -= 2.0;
    arena.ship.velocity += away(asteroid.position, arena.ship.position) * 0.5;
    if !arena.ship.back.alive() {
        ship_damage::destroy_ship(arena, rng, events);
    }
}

/// The cruiser is tested with concentric circles only. While the shield
/// holds it soaks every contact; once it is down the hull takes direct hits
/// and the two bodies knock each other apart.
fn cruiser_vs_asteroid(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>, idx: usize) {
    if arena.ship.back.state.is_destroyed() {
        return;
    }

    let asteroid = arena.asteroids[idx];
    let scale = asteroid.size.scale();
    let units = asteroid.size.units() as f64;
    let size = arena.ship.size;
    let d2 = asteroid.position.distance_squared(arena.ship.position);
    let within = |r: f64| d2 <= r * r;

    if !within(scale * MAX_ASTEROID_VARIANCE + size) {
        return;
    }
    let contact = within(scale * MIN_ASTEROID_VARIANCE + size);
    let outward = away(arena.ship.position, asteroid.position);

    if arena.ship.shield() > 0.0 {
        let ship = &mut arena.ship;
        ship.left.hp -= 1.0;
        ship.left.state = SideState::Invulnerable(SHIELD_REGEN_DELAY);

        if contact {
            ship.left.hp -= 3.0;
            if within(scale * MIN_ASTEROID_VARIANCE) {
                ship.left.hp -= units;
            }
            if within(size) {
                ship.left.hp -= units;
                arena.asteroids[idx].velocity += outward * 0.5;
            }
            if within(1.0) {
                ship.left.hp -= units * 2.0;
            }
        }

        if arena.ship.left.hp <= 0.0 {
            arena.ship.left.hp = 0.0;
            let (center, velocity) = (arena.ship.position, arena.ship.velocity);
            dust::spawn_shield_ring(&mut arena.dust, rng, center, velocity, size);
            debug!("shield depleted");
            events.push(FieldEvent::ShieldDepleted);
        }
        return;
    }

    if contact {
        let ship = &mut arena.ship;
        if ship.back.state.is_vulnerable() {
            ship.back.hp -= EDGE_HIT_DAMAGE;
            ship.back.state = SideState::Invulnerable(CRUISER_HULL_INVULN);
            ship.left.state = SideState::Invulnerable(SHIELD_REGEN_DELAY);
        }
        arena.asteroids[idx].velocity += outward * 0.2 / units;
        arena.ship.velocity -= outward * 0.02 * units;
    }

    if !arena.ship.back.alive() {
        arena.ship.back.hp = 0.0;
        ship_damage::destroy_ship(arena, rng, events);
    }
}

// ---------------------------------------------------------------------------
// Ship <-> debris
// ---------------------------------------------------------------------------

/// Collect every pickup whose origin lies inside the ship's radius.
pub fn debris_pickup(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    if arena.is_respawning() {
        return;
    }

    let reach = arena.ship.size * arena.ship.size;
    for i in 0..MAX_DEBRIS {
        if !arena.debris.is_active(i) {
            continue;
        }
        let piece = arena.debris[i];
        if !piece.kind.is_pickup() || piece.position.distance_squared(arena.ship.position) > reach {
            continue;
        }

        arena.debris.release(i);
        arena.debris[i].lifetime = 0;

        match piece.kind {
            DebrisKind::Upgrade => {
                upgrades::upgrade_ship(arena, rng, events);
                scoring::add_score(&mut arena.points, SCORE_UPGRADE_DEBRIS, piece.position);
                arena.score.upgrades_collected += 1;
                arena.score.alloy += rng.uniform(1.0, 4.2).floor() as u32;
            }
            _ => {
                scoring::add_score(&mut arena.points, SCORE_COMMON_DEBRIS, piece.position);
                arena.score.common_collected += 1;
                arena.score.metal += rng.uniform(1.8, 9.1) as u32;
            }
        }
        debug!(kind = ?piece.kind, "debris collected");
        events.push(FieldEvent::DebrisCollected { kind: piece.kind });
    }
}
