//! Data structures for the game world
//!
//! Defines the mansion tree, the clue catalog, the suspect index, and the
//! shared types they exchange.

pub mod catalog;
pub mod mansion;
pub mod suspects;

pub use catalog::*;
pub use mansion::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};

/// Sentinel returned when a clue implicates nobody in the index.
pub const UNKNOWN_SUSPECT: &str = "Unknown";

/// The four people who were in the manor that night.
pub const SUSPECT_ROSTER: [&str; 4] = ["Ana", "Carlos", "Beatriz", "David"];

/// One navigation command, as normalized by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    Left,
    Right,
    Exit,
    /// Anything that is not a recognized direction. Consumed and re-prompted,
    /// never advances the game.
    Invalid,
}

/// Severity levels for log messages and displayed events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Discovery,
    Warning,
    Critical,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Discovery => "🔍",
            Severity::Warning => "❌",
            Severity::Critical => "💀",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Discovery => write!(f, "DISCOVERY"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}
