//! Field snapshot: the complete visible state handed to renderers after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FieldEvent;
use crate::types::{Bounds, Point};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub bounds: Bounds,
    pub level: u32,
    pub max_level: u32,
    /// Level-transition countdown, if armed.
    pub level_timer: Option<u32>,
    /// Respawn countdown, if the ship is down.
    pub respawn: Option<u32>,
    /// Global pulse phase in `[0, π)`.
    pub oscillation: f64,
    /// Absent on the title screen.
    pub ship: Option<ShipView>,
    pub photons: Vec<Point>,
    pub asteroids: Vec<AsteroidView>,
    pub debris: Vec<DebrisView>,
    pub dust: Vec<DustView>,
    pub points: Vec<PointsView>,
    pub stars: Vec<StarView>,
    pub upgrade_text: Option<TextView>,
    pub score: ScoreView,
    pub events: Vec<FieldEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub kind: ShipKind,
    pub position: Point,
    pub heading: f64,
    pub size: f64,
    /// World-space outline, closed implicitly.
    pub hull: Vec<Point>,
    pub left: SectionView,
    pub right: SectionView,
    pub back: SectionView,
    pub photon_size: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectionView {
    pub hp: f64,
    pub state: SideState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub slot: usize,
    pub size: AsteroidSize,
    pub position: Point,
    /// World-space polygon.
    pub vertices: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisView {
    pub kind: DebrisKind,
    pub position: Point,
    pub heading: f64,
    pub lifetime: i32,
    /// World-space triangle.
    pub vertices: [Point; 3],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DustView {
    pub position: Point,
    pub lifetime: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsView {
    pub amount: u32,
    pub position: Point,
    pub lifetime: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarView {
    pub position: Point,
    pub flicker: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextView {
    pub message: String,
    pub lifetime: i32,
}

/// Session scoring and currencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub session_score: u32,
    pub high_score: u32,
    pub large_destroyed: u32,
    pub medium_destroyed: u32,
    pub small_destroyed: u32,
    pub common_collected: u32,
    pub upgrades_collected: u32,
    pub metal: u32,
    pub alloy: u32,
    pub photon_upgrades: u32,
    pub ship_upgrades: u32,
}
