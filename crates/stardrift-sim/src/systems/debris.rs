//! Debris movement, expiry and asteroid remnant spawning.

use std::f64::consts::{PI, SQRT_2, TAU};

use glam::DVec2;

use stardrift_core::components::Debris;
use stardrift_core::constants::*;
use stardrift_core::enums::DebrisKind;
use stardrift_core::geometry::{heading_vector, wrap_angle};
use stardrift_core::random::SimRng;

use crate::arena::Arena;
use crate::systems::dust;

/// Age, move, spin and damp every piece. Expired pieces burst into dust.
pub fn run(arena: &mut Arena, rng: &mut SimRng) {
    for i in 0..MAX_DEBRIS {
        if !arena.debris.is_active(i) {
            continue;
        }
        let piece = &mut arena.debris[i];
        piece.lifetime -= 1;
        piece.position += piece.velocity;
        piece.heading = wrap_angle(piece.heading + piece.spin);
        piece.velocity *= DEBRIS_DAMPING;
        piece.spin *= DEBRIS_DAMPING;

        if piece.lifetime <= 0 {
            let origin = piece.position;
            arena.debris.release(i);
            dust::spawn_debris_burst(&mut arena.dust, rng, origin);
        }
    }
}

/// Jittered rest-frame triangle used by remnants and cruiser wreckage.
pub fn jittered_triangle(rng: &mut SimRng) -> [DVec2; 3] {
    [
        DVec2::new(0.0, 2.0),
        DVec2::new(-SQRT_2, -SQRT_2),
        DVec2::new(SQRT_2, -SQRT_2),
    ]
    .map(|v| v + DVec2::new(rng.signed(0.5), rng.signed(0.5)))
}

/// Two or three pickup pieces flung out of a shattered small asteroid.
/// Each has a one-in-ten chance of being an upgrade.
pub fn spawn_remnants(arena: &mut Arena, rng: &mut SimRng, origin: DVec2, parent_velocity: DVec2) -> usize {
    let count = rng.uniform(2.5, 3.5).floor() as usize;
    let mut spawned = 0;
    for k in (1..=count).rev() {
        if arena.debris.is_full() {
            tracing::trace!("debris pool full, remnant dropped");
            break;
        }
        let kind = if rng.uniform(0.0, 1.0) > 1.0 - UPGRADE_DEBRIS_CHANCE {
            DebrisKind::Upgrade
        } else {
            DebrisKind::Common
        };
        let fan = heading_vector(k as f64 * TAU / 3.0);
        let velocity = DVec2::new(
            (rng.uniform(0.25, 0.55) * parent_velocity.x + rng.signed(0.1)) * fan.x,
            (rng.uniform(0.25, 0.55) * parent_velocity.y + rng.signed(0.1)) * fan.y,
        );
        let heading = rng.uniform(0.0, PI);
        let spin = rng.signed(0.2);
        let vertices = jittered_triangle(rng);
        let lifetime = (DEBRIS_LIFETIME * rng.uniform(0.75, 1.25)) as i32;
        arena.debris.spawn(Debris {
            active: true,
            lifetime,
            kind,
            position: origin + velocity * 3.0,
            velocity,
            heading,
            spin,
            vertices,
        });
        spawned += 1;
    }
    spawned
}
