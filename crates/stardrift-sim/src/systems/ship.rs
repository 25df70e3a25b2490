//! Ship movement and firing.
//!
//! Each kind has its own flight model:
//! - delta: smoothed heading thrust, turning needs the matching wing alive,
//!   thrust needs the back section alive;
//! - cube: direct per-axis acceleration clamped to `[-1, 1]`;
//! - cruiser: slower smoothed thrust that decays with no input, turn rate
//!   scaled by control.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;

use stardrift_core::components::Photon;
use stardrift_core::constants::*;
use stardrift_core::enums::ShipKind;
use stardrift_core::geometry::{heading_vector, wrap_angle};
use stardrift_core::input::InputState;

use crate::arena::Arena;
use crate::hull;

fn axis(positive: bool, negative: bool) -> f64 {
    (positive as i32 - negative as i32) as f64
}

pub fn run(arena: &mut Arena, input: &InputState) {
    let ship = &mut arena.ship;

    match ship.kind {
        ShipKind::Delta => {
            let turn_left = input.left && ship.left.alive();
            let turn_right = input.right && ship.right.alive();
            if turn_left != turn_right {
                let step = TAU / DELTA_TURN_DIVISOR;
                ship.heading = wrap_angle(ship.heading + axis(turn_right, turn_left) * step);
            }

            if (input.up || input.down) && ship.back.alive() {
                let c = ship.control;
                let thrust = heading_vector(ship.heading) * axis(input.up, input.down);
                ship.velocity = ship.velocity * (1.0 - c) + thrust * c;
            }
        }
        ShipKind::Cube => {
            if input.single_turn() {
                ship.velocity.x += CUBE_ACCELERATION * axis(input.right, input.left);
            }
            if input.single_thrust() {
                ship.velocity.y += CUBE_ACCELERATION * axis(input.up, input.down);
            }
            ship.velocity = ship.velocity.clamp(DVec2::splat(-1.0), DVec2::splat(1.0));
        }
        ShipKind::Cruiser => {
            let c = ship.control / 5.0;
            let thrust = heading_vector(ship.heading) * axis(input.up, input.down);
            ship.velocity = ship.velocity * (1.0 - c) + thrust * c;

            if input.single_turn() {
                let step = (1.0 + ship.control * 10.0) * TAU / CRUISER_TURN_DIVISOR;
                ship.heading = wrap_angle(ship.heading + axis(input.right, input.left) * step);
            }
        }
    }

    ship.position += ship.velocity * ship.speed;
    ship.position = arena.bounds.wrap(ship.position, ship.size);
}

/// Fire the ship's weapon. Returns the number of photons launched.
///
/// Nothing fires while respawning. The delta fires a single shot whenever a
/// photon slot is free; the cube and cruiser fire volleys gated by the
/// cooldown, and each volley that launches anything adds one cooldown period.
pub fn fire(arena: &mut Arena) -> usize {
    if arena.is_respawning() {
        return 0;
    }

    let ship = arena.ship;
    let weapon = arena.weapon;
    let forward = heading_vector(ship.heading);

    let shots: Vec<(DVec2, DVec2)> = match ship.kind {
        ShipKind::Delta => vec![(forward * weapon.photon_size, forward)],
        ShipKind::Cube => {
            if weapon.current_cooldown > 0 {
                return 0;
            }
            (0..4)
                .map(|k| {
                    let dir = heading_vector(k as f64 * FRAC_PI_2);
                    (dir * weapon.photon_size, dir)
                })
                .collect()
        }
        ShipKind::Cruiser => {
            if weapon.current_cooldown > 0 {
                return 0;
            }
            hull::cruiser_gun_ports(&ship)
                .into_iter()
                .map(|port| (port + forward * weapon.photon_size, forward))
                .collect()
        }
    };

    let mut fired = 0;
    for (offset, dir) in shots {
        let photon = Photon {
            active: true,
            position: ship.position + offset,
            velocity: dir * weapon.photon_speed,
        };
        if arena.photons.spawn(photon).is_none() {
            tracing::trace!("photon pool full");
            break;
        }
        fired += 1;
    }

    if fired > 0 {
        arena.weapon.current_cooldown += weapon.cooldown;
    }
    fired
}
