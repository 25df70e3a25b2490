//! Score popups drift upward and expire.

use stardrift_core::constants::POINTS_RISE;

use crate::arena::Arena;

pub fn run(arena: &mut Arena) {
    for (_, popup) in arena.points.iter_active_mut() {
        popup.position.y += POINTS_RISE;
        popup.lifetime -= 1;
        if popup.lifetime <= 0 {
            popup.active = false;
        }
    }
}
