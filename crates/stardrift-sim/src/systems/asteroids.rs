//! Asteroid drift and fragmentation.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use tracing::debug;

use stardrift_core::components::Asteroid;
use stardrift_core::constants::*;
use stardrift_core::enums::AsteroidSize;
use stardrift_core::events::FieldEvent;
use stardrift_core::geometry::{heading_of, heading_vector, wrap_angle};
use stardrift_core::random::SimRng;

use crate::arena::Arena;
use crate::scoring;
use crate::systems::debris;
use crate::systems::dust::{self, DustSource};
use crate::world_setup;

/// Advance every asteroid and arm the level timer once the field is empty.
pub fn run(arena: &mut Arena, events: &mut Vec<FieldEvent>) {
    if arena.asteroids.is_empty() && arena.level_timer.is_none() {
        arm_level_timer(arena, events);
    }
    drift(arena);
}

/// Integrate position and rotation, then wrap with a `MAX_ASTEROID_VARIANCE * size` margin.
pub fn drift(arena: &mut Arena) {
    let bounds = arena.bounds;
    for (_, asteroid) in arena.asteroids.iter_active_mut() {
        asteroid.position += asteroid.velocity;
        asteroid.heading = wrap_angle(asteroid.heading + asteroid.spin);
        let margin = MAX_ASTEROID_VARIANCE * asteroid.size.scale();
        asteroid.position = bounds.wrap(asteroid.position, margin);
    }
}

fn arm_level_timer(arena: &mut Arena, events: &mut Vec<FieldEvent>) {
    if arena.level >= arena.max_level {
        let ticks = FINAL_TRANSITION_TICKS
            + arena.score.score_digits() * FINAL_TRANSITION_TICKS_PER_DIGIT;
        arena.level_timer = Some(ticks);
        arena.score.update_high_score(&mut arena.player);
        let score = arena.score.session_score();
        debug!(score, high_score = arena.player.high_score, "asteroid field complete");
        events.push(FieldEvent::AreaComplete {
            score,
            high_score: arena.player.high_score,
        });
    } else {
        arena.level_timer = Some(LEVEL_TRANSITION_TICKS);
        if arena.level > 0 {
            debug!(level = arena.level, "level cleared");
            events.push(FieldEvent::LevelCleared { level: arena.level });
        }
    }
}

/// How many children a hit asteroid of this size wants to split into.
fn child_count(rng: &mut SimRng, size: AsteroidSize) -> usize {
    let roll = match size {
        AsteroidSize::Large => rng.uniform(2.3, 3.3),
        AsteroidSize::Medium => rng.uniform(1.2, 2.2),
        AsteroidSize::Small => return 0,
    };
    roll.floor() as usize
}

/// Resolve a photon hit on asteroid `idx`.
///
/// The photon is consumed and the score credited. A small asteroid shatters
/// into remnants and dust. Larger ones shrink in place, absorb part of the
/// photon's momentum and split off children fanned around the impact
/// direction, limited by the free asteroid slots.
pub fn destroy(
    arena: &mut Arena,
    rng: &mut SimRng,
    events: &mut Vec<FieldEvent>,
    idx: usize,
    photon_idx: usize,
) {
    let photon = arena.photons[photon_idx];
    arena.photons.release(photon_idx);

    let hit = arena.asteroids[idx];
    scoring::add_score(&mut arena.points, hit.size.units(), hit.position);
    arena.score.record_asteroid(hit.size);
    events.push(FieldEvent::AsteroidDestroyed {
        size: hit.size,
        x: hit.position.x,
        y: hit.position.y,
    });

    let Some(new_size) = hit.size.shrink() else {
        let source = DustSource::from(&hit);
        dust::spawn_between(&mut arena.dust, rng, source, source);
        arena.asteroids.release(idx);
        let remnants = debris::spawn_remnants(arena, rng, hit.position, hit.velocity);
        debug!(slot = idx, remnants, "small asteroid shattered");
        return;
    };

    let wanted = child_count(rng, hit.size);

    let vertex_count = world_setup::vertex_count_for(rng, new_size);
    let photon_size = arena.weapon.photon_size;
    let parent = {
        let a = &mut arena.asteroids[idx];
        world_setup::reshape(rng, a, new_size, vertex_count);
        let scale = new_size.scale();
        let nudged = (a.velocity * scale + photon.velocity * photon_size / 2.0) / scale;
        a.velocity = nudged.clamp(DVec2::splat(-1.0), DVec2::splat(1.0));
        *a
    };

    let children = wanted.min(arena.asteroids.free_count());
    let approach = heading_of(photon.velocity);
    let spacing = PI / (1 + children) as f64;
    let distance = 2.0 * new_size.scale();

    for remaining in (1..=children).rev() {
        let angle = approach + FRAC_PI_2 - remaining as f64 * spacing;
        let position = parent.position + heading_vector(angle) * distance;
        let spin = (parent.spin * rng.uniform(0.5, 1.4)).clamp(-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN);
        let away = (position - parent.position).normalize_or_zero();

        let mut child = Asteroid {
            active: true,
            position,
            velocity: parent.velocity + away / new_size.scale(),
            heading: parent.heading,
            spin,
            ..Default::default()
        };
        let count = world_setup::child_vertex_count(rng);
        world_setup::reshape(rng, &mut child, new_size, count);

        dust::spawn_between(
            &mut arena.dust,
            rng,
            DustSource::from(&child),
            DustSource::from(&parent),
        );
        arena.asteroids.spawn(child);
    }

    debug!(slot = idx, size = ?new_size, children, "asteroid split");
}
