//! Star flicker and the global oscillation value.

use std::f64::consts::PI;

use stardrift_core::constants::OSCILLATION_STEP;

use crate::arena::Arena;

pub fn run(arena: &mut Arena) {
    for (_, star) in arena.stars.iter_active_mut() {
        star.flicker += star.flicker_rate;
        if star.flicker > PI {
            star.flicker -= PI;
        }
    }

    arena.oscillation += OSCILLATION_STEP;
    if arena.oscillation > PI {
        arena.oscillation -= PI;
    }
}
