//! Held-key snapshot sampled once per tick.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Exactly one of left/right is held.
    pub fn single_turn(&self) -> bool {
        self.left != self.right
    }

    /// Exactly one of up/down is held.
    pub fn single_thrust(&self) -> bool {
        self.up != self.down
    }
}
