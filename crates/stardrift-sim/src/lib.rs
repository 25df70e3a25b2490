//! Simulation engine for the stardrift asteroid field.
//!
//! Owns every entity pool, runs the per-tick passes in a fixed order,
//! and produces FieldSnapshots for whatever renders the field.

pub mod arena;
pub mod engine;
pub mod hull;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, Simulation};
