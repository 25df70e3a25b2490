//! Error types for the fallible edges of the simulation.
//!
//! Ticking never fails; only configuration and external conversions do.

use std::fmt;

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for the expected shape.
    Parse(String),
    /// Field dimensions must be finite and positive.
    InvalidBounds { width: f64, height: f64 },
    /// At least one level is required.
    InvalidMaxLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "invalid field bounds {width}x{height}")
            }
            ConfigError::InvalidMaxLevel => write!(f, "max_level must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Ship-select index outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKindError(pub u8);

impl fmt::Display for ShipKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown ship kind {}", self.0)
    }
}

impl std::error::Error for ShipKindError {}
