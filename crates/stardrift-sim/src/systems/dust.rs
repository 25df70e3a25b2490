//! Dust particles: movement, decay and the burst patterns that create them.

use glam::DVec2;

use stardrift_core::components::{Asteroid, Dust};
use stardrift_core::constants::*;
use stardrift_core::geometry::heading_vector;
use stardrift_core::pool::Pool;
use stardrift_core::random::SimRng;

/// Position, velocity and size of something that sheds dust.
#[derive(Debug, Clone, Copy)]
pub struct DustSource {
    pub position: DVec2,
    pub velocity: DVec2,
    pub units: u32,
}

impl From<&Asteroid> for DustSource {
    fn from(a: &Asteroid) -> Self {
        Self {
            position: a.position,
            velocity: a.velocity,
            units: a.size.units(),
        }
    }
}

/// Move, damp and age every particle.
pub fn run(dust: &mut Pool<Dust, MAX_DUST>) {
    for (_, d) in dust.iter_active_mut() {
        d.position += d.velocity;
        d.velocity *= DUST_DAMPING;
        d.lifetime -= 1;
        if d.lifetime <= 0 {
            d.active = false;
        }
    }
}

/// Dust thrown off between two asteroids, or from one shattering when both
/// sources are the same. Count is the sum of the size units.
pub fn spawn_between(dust: &mut Pool<Dust, MAX_DUST>, rng: &mut SimRng, a: DustSource, b: DustSource) {
    let origin = (a.position + b.position) / 2.0;
    let drift = (a.velocity + b.velocity) / 2.0;
    for _ in 0..(a.units + b.units) {
        if dust.is_full() {
            tracing::trace!("dust pool full");
            break;
        }
        let velocity = DVec2::new(rng.uniform(-1.3, 1.3) * drift.x, rng.uniform(-1.3, 1.3) * drift.y);
        dust.spawn(Dust {
            active: true,
            lifetime: ASTEROID_DUST_LIFETIME,
            position: origin,
            velocity,
        });
    }
}

/// 8 to 14 particles scattered from an expiring debris piece.
pub fn spawn_debris_burst(dust: &mut Pool<Dust, MAX_DUST>, rng: &mut SimRng, origin: DVec2) {
    let count = rng.uniform(8.0, 15.0) as usize;
    for _ in 0..count {
        if dust.is_full() {
            break;
        }
        let velocity = DVec2::new(rng.signed(1.0), rng.signed(1.0));
        dust.spawn(Dust {
            active: true,
            lifetime: BURST_DUST_LIFETIME,
            position: origin + velocity * 3.0,
            velocity,
        });
    }
}

/// Ring of particles around a collapsing shield.
pub fn spawn_shield_ring(
    dust: &mut Pool<Dust, MAX_DUST>,
    rng: &mut SimRng,
    center: DVec2,
    velocity: DVec2,
    radius: f64,
) {
    let step = std::f64::consts::PI / 16.0;
    for k in 1..=SHIELD_BURST_DUST {
        if dust.is_full() {
            break;
        }
        let dir = heading_vector(k as f64 * step);
        let jitter_pos = DVec2::new(rng.signed(0.2), rng.signed(0.2));
        let jitter_vel = DVec2::new(rng.signed(0.2), rng.signed(0.2));
        dust.spawn(Dust {
            active: true,
            lifetime: BURST_DUST_LIFETIME,
            position: center + dir * radius + jitter_pos,
            velocity: velocity + dir * 0.2 + jitter_vel,
        });
    }
}
