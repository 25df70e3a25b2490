//! Per-tick passes over the arena.
//!
//! Systems are free functions over `&mut Arena`. They own no state; the RNG
//! and the event buffer are passed in by the engine.

pub mod asteroids;
pub mod background;
pub mod collision;
pub mod debris;
pub mod dust;
pub mod photons;
pub mod points;
pub mod ship;
pub mod ship_damage;
pub mod snapshot;
pub mod timers;
pub mod upgrades;
