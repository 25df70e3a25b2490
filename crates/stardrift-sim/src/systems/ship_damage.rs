//! Ship destruction, wreckage and per-tick damage timers.

use glam::DVec2;
use tracing::{debug, info};

use stardrift_core::components::{Debris, ShipSection};
use stardrift_core::constants::*;
use stardrift_core::enums::{DebrisKind, ShipKind, ShipSide, SideState};
use stardrift_core::events::FieldEvent;
use stardrift_core::random::SimRng;

use crate::arena::Arena;
use crate::hull;
use crate::systems::debris;

const DELTA_SIDES: [ShipSide; 3] = [ShipSide::Left, ShipSide::Right, ShipSide::Back];

/// Type-specific destruction.
///
/// The delta loses sections piecemeal: while no section has been destroyed
/// this life, only the sections at zero hp are blown off. Once any section
/// is gone, the next call wrecks whatever remains and starts the respawn
/// countdown. The cube and cruiser are always destroyed whole.
pub fn destroy_ship(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    match arena.ship.kind {
        ShipKind::Delta => {
            let intact = DELTA_SIDES
                .iter()
                .all(|&side| !arena.ship.section(side).state.is_destroyed());

            if intact {
                for side in DELTA_SIDES {
                    if !arena.ship.section(side).alive() {
                        blow_off(arena, rng, events, side);
                    }
                }
            } else {
                for side in DELTA_SIDES {
                    if !arena.ship.section(side).state.is_destroyed() {
                        spawn_delta_wreck(arena, rng, side);
                    }
                    *arena.ship.section_mut(side) = ShipSection::new(0.0, SideState::Destroyed);
                }
                begin_respawn(arena, events);
            }
        }
        ShipKind::Cube => {
            spawn_cube_wreck(arena, rng);
            arena.ship.back = ShipSection::new(0.0, SideState::Destroyed);
            begin_respawn(arena, events);
        }
        ShipKind::Cruiser => {
            spawn_cruiser_wreck(arena, rng);
            let ship = &mut arena.ship;
            ship.back = ShipSection::new(0.0, SideState::Destroyed);
            ship.left = ShipSection::new(0.0, SideState::Destroyed);
            ship.right.hp = 0.0;
            begin_respawn(arena, events);
        }
    }
}

fn blow_off(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>, side: ShipSide) {
    spawn_delta_wreck(arena, rng, side);
    arena.ship.section_mut(side).state = SideState::Destroyed;
    debug!(?side, "ship section lost");
    events.push(FieldEvent::ShipPieceLost { side });
}

fn begin_respawn(arena: &mut Arena, events: &mut Vec<FieldEvent>) {
    arena.respawn = Some(RESPAWN_TICKS);
    let kind = arena.ship.kind;
    info!(?kind, score = arena.score.session_score(), "ship destroyed");
    events.push(FieldEvent::ShipDestroyed { kind });
}

/// One wedge of the delta: the ship origin plus two of its corners.
fn spawn_delta_wreck(arena: &mut Arena, rng: &mut SimRng, side: ShipSide) {
    let ship = arena.ship;
    let rest = hull::delta_offsets(ship.size);
    let wedge = match side {
        ShipSide::Left => [DVec2::ZERO, rest.nose, rest.back_left],
        ShipSide::Right => [DVec2::ZERO, rest.nose, rest.back_right],
        ShipSide::Back => [DVec2::ZERO, rest.back_right, rest.back_left],
    };

    let vx = rng.uniform(-0.25, 0.25) * ship.velocity.x + rng.signed(0.1);
    let vy = rng.uniform(-0.25, 0.25) * ship.velocity.y + rng.signed(0.1);
    let spin = rng.signed(0.2);
    let lifetime = (DEBRIS_LIFETIME * rng.uniform(0.95, 1.05)) as i32;

    let spawned = arena.debris.spawn(Debris {
        active: true,
        lifetime,
        kind: DebrisKind::Wreckage,
        position: ship.position,
        velocity: DVec2::new(vx, vy),
        heading: ship.heading,
        spin,
        vertices: wedge,
    });
    if spawned.is_none() {
        tracing::trace!(?side, "debris pool full, wreck dropped");
    }
}

/// Four corner pieces flung out clockwise starting from the right.
fn spawn_cube_wreck(arena: &mut Arena, rng: &mut SimRng) {
    let ship = arena.ship;
    let s = ship.size.sqrt();
    let flag = |b: bool| b as i32 as f64;

    for k in 0..4 {
        if arena.debris.is_full() {
            tracing::trace!(piece = k, "debris pool full, wreck dropped");
            break;
        }
        let vx = flag(k == 0) * 0.3 - flag(k == 2) * 0.3 + 0.5 * ship.velocity.x + rng.signed(0.1);
        let vy = flag(k == 3) * 0.3 - flag(k == 1) * 0.3 + 0.5 * ship.velocity.y + rng.signed(0.1);
        let c1 = DVec2::new(
            s - flag(k == 0 || k == 1) * 2.0 * s,
            s - flag(k == 1 || k == 2) * 2.0 * s,
        );
        let c2 = DVec2::new(
            s - flag(k == 1 || k == 2) * 2.0 * s,
            s - flag(k == 2 || k == 3) * 2.0 * s,
        );
        let spin = rng.signed(0.2);
        let lifetime = (DEBRIS_LIFETIME * rng.uniform(0.95, 1.05)) as i32;

        arena.debris.spawn(Debris {
            active: true,
            lifetime,
            kind: DebrisKind::Wreckage,
            position: ship.position,
            velocity: DVec2::new(vx, vy),
            heading: ship.heading,
            spin,
            vertices: [DVec2::ZERO, c1, c2],
        });
    }
}

/// Fills every debris slot with wreckage, replacing whatever was there.
fn spawn_cruiser_wreck(arena: &mut Arena, rng: &mut SimRng) {
    let ship = arena.ship;
    for i in 0..MAX_DEBRIS {
        let velocity = DVec2::new(
            rng.uniform(-0.15, 0.15) * ship.velocity.x + rng.signed(0.3),
            rng.uniform(-0.15, 0.15) * ship.velocity.y + rng.signed(0.3),
        );
        let spin = rng.signed(0.3);
        let vertices = debris::jittered_triangle(rng);
        let lifetime = (DEBRIS_LIFETIME * rng.uniform(0.85, 1.15)) as i32;

        arena.debris.overwrite(
            i,
            Debris {
                active: true,
                lifetime,
                kind: DebrisKind::Wreckage,
                position: ship.position + velocity * 10.0,
                velocity,
                heading: ship.heading,
                spin,
                vertices,
            },
        );
    }
}

/// Decay invulnerability on every living section.
///
/// The cruiser's shield timer lives in `left.state` and decays even while
/// the shield is empty; once it reads vulnerable the shield regenerates by
/// `1/200` of capacity per tick.
pub fn update_damage(arena: &mut Arena) {
    let ship = &mut arena.ship;
    for side in DELTA_SIDES {
        let section = ship.section_mut(side);
        if section.alive() {
            section.state = section.state.decayed();
        }
    }

    if ship.kind == ShipKind::Cruiser {
        if matches!(ship.left.state, SideState::Invulnerable(_)) {
            ship.left.state = ship.left.state.decayed();
        }
        if ship.left.state.is_vulnerable() {
            let capacity = ship.shield_capacity();
            ship.left.hp = (ship.left.hp + capacity / SHIELD_REGEN_DIVISOR).min(capacity);
        }
    }
}
