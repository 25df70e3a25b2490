//! Events emitted by the simulation for the shell and audio/UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy happened during a tick.
///
/// The shell owns screen transitions; the simulation only announces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldEvent {
    /// The respawn countdown ran out.
    ReturnToTitle,
    /// A non-final level was cleared and the transition timer armed.
    LevelCleared { level: u32 },
    /// A new level began with this many large asteroids.
    LevelAdvanced { level: u32, asteroids: usize },
    /// The final level was cleared.
    AreaComplete { score: u32, high_score: u32 },
    /// A ship section was blown off.
    ShipPieceLost { side: ShipSide },
    /// The ship was destroyed and the respawn countdown started.
    ShipDestroyed { kind: ShipKind },
    AsteroidDestroyed { size: AsteroidSize, x: f64, y: f64 },
    DebrisCollected { kind: DebrisKind },
    UpgradeApplied { upgrade: UpgradeKind },
    /// The cruiser shield collapsed.
    ShieldDepleted,
    /// Session currencies were banked into the player record.
    SessionBanked { metal: f64, alloy: f64 },
}
