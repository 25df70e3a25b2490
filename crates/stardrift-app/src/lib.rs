//! Headless stardrift runner.
//!
//! Drives the simulation on a dedicated loop thread, steers it with a
//! scripted autopilot and summarizes what happened.

pub mod autopilot;
pub mod config;
pub mod control;
pub mod game_loop;
pub mod session;
pub mod state;
