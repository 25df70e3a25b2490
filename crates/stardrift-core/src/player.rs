//! Persistent player record owned by the shell.
//!
//! The simulation reads it when a session starts and writes it when a
//! session is banked. The on-disk format belongs to the save system.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HIGH_SCORE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub high_score: u32,
    pub metal: f64,
    pub alloy: f64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            high_score: DEFAULT_HIGH_SCORE,
            metal: 0.0,
            alloy: 0.0,
        }
    }
}

impl PlayerRecord {
    /// Raises the high score to `score` if it is higher. Returns true on a new record.
    pub fn offer_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}
