//! Core types and definitions for the stardrift asteroid field.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, pools, geometry, commands, events, snapshots and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod player;
pub mod pool;
pub mod random;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
