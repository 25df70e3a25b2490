//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before any
//! system runs.

use serde::{Deserialize, Serialize};

use crate::enums::ShipKind;

/// All discrete player actions. Held movement keys travel in `InputState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Leave the title screen and start a session with the given ship.
    StartSession { ship: ShipKind },
    /// Swap ships. Restarts the session from level 0.
    ChangeShip { ship: ShipKind },
    /// Restart the session with the current ship.
    Reset,
    Pause,
    Resume,
    /// Abandon the session without banking.
    ReturnToTitle,
    /// Jump out of the field: bank currencies and update the high score.
    JumpOut,

    // --- Combat ---
    Fire,

    // --- Developer ---
    /// Run ship destruction immediately, as if a section had just failed.
    DebugDestroyShip,
    /// Grant a random upgrade.
    DebugUpgrade,
}
