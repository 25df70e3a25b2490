//! Countdown timers: weapon cooldown, level transitions and respawn.

use tracing::{debug, info};

use stardrift_core::events::FieldEvent;
use stardrift_core::random::SimRng;

use crate::arena::Arena;
use crate::world_setup;

pub fn lower_cooldown(arena: &mut Arena) {
    arena.weapon.current_cooldown = arena.weapon.current_cooldown.saturating_sub(1);
}

/// Count the level timer down and start the next level when it expires.
///
/// On the final level the timer parks at 1 so the completion banner stays up
/// until the player leaves the field.
pub fn update_level_timer(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    let Some(remaining) = arena.level_timer else {
        return;
    };

    let remaining = remaining.saturating_sub(1);
    if remaining > 0 {
        arena.level_timer = Some(remaining);
    } else if arena.level >= arena.max_level {
        arena.level_timer = Some(1);
    } else {
        next_level(arena, rng, events);
        arena.level_timer = None;
    }
}

/// Advance one level and spawn `level` large asteroids. No-op past the last level.
pub fn next_level(arena: &mut Arena, rng: &mut SimRng, events: &mut Vec<FieldEvent>) {
    if arena.level >= arena.max_level {
        return;
    }
    arena.level += 1;
    let asteroids = world_setup::spawn_level_wave(arena, rng, arena.level);
    debug!(level = arena.level, asteroids, "next level");
    events.push(FieldEvent::LevelAdvanced {
        level: arena.level,
        asteroids,
    });
}

/// Count the respawn timer down. Returns true on the tick it expires.
pub fn update_respawn(arena: &mut Arena, events: &mut Vec<FieldEvent>) -> bool {
    let Some(remaining) = arena.respawn else {
        return false;
    };
    let remaining = remaining.saturating_sub(1);
    if remaining > 0 {
        arena.respawn = Some(remaining);
        return false;
    }
    arena.respawn = None;
    info!("respawn countdown finished, returning to title");
    events.push(FieldEvent::ReturnToTitle);
    true
}
