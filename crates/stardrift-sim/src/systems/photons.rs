//! Photon flight. Photons do not wrap; they retire on leaving the field.

use crate::arena::Arena;

pub fn run(arena: &mut Arena) {
    let margin = arena.weapon.photon_size;
    let bounds = arena.bounds;
    for (_, photon) in arena.photons.iter_active_mut() {
        photon.position += photon.velocity;
        if !bounds.contains(photon.position, margin) {
            photon.active = false;
        }
    }
}
