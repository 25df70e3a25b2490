//! Entity spawn factories for setting up the asteroid field.
//!
//! Creates asteroids, the star background and the per-kind ship loadout.

use std::f64::consts::TAU;

use glam::DVec2;

use stardrift_core::components::*;
use stardrift_core::constants::*;
use stardrift_core::enums::*;
use stardrift_core::geometry::heading_vector;
use stardrift_core::pool::Pool;
use stardrift_core::random::SimRng;
use stardrift_core::types::Bounds;

use crate::arena::Arena;

/// Vertex count for a freshly created or reshaped asteroid: `3 + size` up to `MAX_VERTICES - 1`.
pub fn vertex_count_for(rng: &mut SimRng, size: AsteroidSize) -> usize {
    let base = 3 + size.units() as usize;
    base + rng.below(MAX_VERTICES - base)
}

/// Vertex count for a child split off a parent.
pub fn child_vertex_count(rng: &mut SimRng) -> usize {
    CHILD_MIN_VERTICES + rng.below(MAX_VERTICES - CHILD_MIN_VERTICES)
}

/// Rest-frame silhouette: vertex `i` sits at angle `2πi/n` with a radius drawn
/// from `[size * MIN_ASTEROID_VARIANCE, size * MAX_ASTEROID_VARIANCE)`.
pub fn asteroid_silhouette(
    rng: &mut SimRng,
    size: AsteroidSize,
    vertex_count: usize,
) -> [DVec2; MAX_VERTICES] {
    let mut vertices = [DVec2::ZERO; MAX_VERTICES];
    let n = vertex_count.min(MAX_VERTICES);
    for (i, vertex) in vertices.iter_mut().enumerate().take(n) {
        let theta = TAU * i as f64 / n as f64;
        let r = size.scale() * rng.uniform(MIN_ASTEROID_VARIANCE, MAX_ASTEROID_VARIANCE);
        *vertex = heading_vector(theta) * r;
    }
    vertices
}

/// Replaces an asteroid's size and silhouette in place.
pub fn reshape(rng: &mut SimRng, asteroid: &mut Asteroid, size: AsteroidSize, vertex_count: usize) {
    asteroid.size = size;
    asteroid.vertex_count = vertex_count;
    asteroid.vertices = asteroid_silhouette(rng, size, vertex_count);
}

/// A new asteroid entering from just beyond the top or left edge.
pub fn edge_asteroid(rng: &mut SimRng, bounds: &Bounds, size: AsteroidSize) -> Asteroid {
    let margin = size.scale() * MAX_ASTEROID_VARIANCE;
    let position = if rng.coin() {
        DVec2::new(rng.uniform(0.0, bounds.width), -margin)
    } else {
        DVec2::new(-margin, rng.uniform(0.0, bounds.height))
    };

    let mut velocity = DVec2::new(
        rng.uniform(ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
        rng.uniform(ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
    );
    if rng.coin() {
        velocity.x = -velocity.x;
    }
    if rng.coin() {
        velocity.y = -velocity.y;
    }

    let spin = rng.signed(ASTEROID_MAX_SPIN);
    let mut asteroid = Asteroid {
        active: true,
        position,
        velocity,
        spin,
        ..Default::default()
    };
    let count = vertex_count_for(rng, size);
    reshape(rng, &mut asteroid, size, count);
    asteroid
}

/// Spawns `count` large asteroids for a new level. Returns how many fit.
pub fn spawn_level_wave(arena: &mut Arena, rng: &mut SimRng, count: u32) -> usize {
    let mut spawned = 0;
    for _ in 0..count {
        let asteroid = edge_asteroid(rng, &arena.bounds, AsteroidSize::Large);
        if arena.asteroids.spawn(asteroid).is_some() {
            spawned += 1;
        }
    }
    spawned
}

/// Three decorative asteroids (large, medium, small) scattered on screen for the title.
pub fn spawn_title_asteroids(arena: &mut Arena, rng: &mut SimRng) {
    for size in [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small] {
        let mut asteroid = edge_asteroid(rng, &arena.bounds, size);
        asteroid.position = DVec2::new(
            rng.uniform(0.0, arena.bounds.width),
            rng.uniform(0.0, arena.bounds.height),
        );
        arena.asteroids.spawn(asteroid);
    }
}

/// Lays out one jittered star per cell of a `STAR_GRID` x `STAR_GRID` grid.
pub fn scatter_stars(
    stars: &mut Pool<BackgroundStar, MAX_BACKGROUND_STARS>,
    rng: &mut SimRng,
    bounds: &Bounds,
) {
    stars.clear();
    let cell = DVec2::new(
        bounds.width / STAR_GRID as f64,
        bounds.height / STAR_GRID as f64,
    );
    for i in 0..STAR_GRID {
        for j in 0..STAR_GRID {
            let position = DVec2::new(
                (i as f64 + rng.uniform(-0.2, 1.2)) * cell.x,
                (j as f64 + rng.uniform(-0.2, 1.2)) * cell.y,
            );
            stars.spawn(BackgroundStar {
                active: true,
                position,
                flicker: rng.uniform(0.0, TAU),
                flicker_rate: rng.uniform(0.025, 0.125),
            });
        }
    }
}

/// Fresh ship and weapon for a session, parked at the field center.
pub fn ship_loadout(kind: ShipKind, bounds: &Bounds) -> (Ship, Weapon) {
    let base = ShipSection::new(SHIP_BASE_HP, SideState::Vulnerable);
    let removed = ShipSection::new(SHIP_BASE_HP, SideState::Destroyed);

    let (left, right) = match kind {
        ShipKind::Delta => (base, base),
        ShipKind::Cube => (removed, removed),
        ShipKind::Cruiser => (
            ShipSection::new(CRUISER_SHIELD_HP, SideState::Vulnerable),
            ShipSection::new(CRUISER_SHIELD_HP, SideState::Destroyed),
        ),
    };

    let ship = Ship {
        kind,
        position: bounds.center(),
        velocity: DVec2::ZERO,
        heading: 0.0,
        size: kind.size(),
        left,
        right,
        back: base,
        speed: SHIP_BASE_SPEED,
        control: SHIP_BASE_CONTROL,
        upgrades: 0,
    };
    let weapon = Weapon {
        cooldown: kind.cooldown(),
        ..Weapon::default()
    };
    (ship, weapon)
}
