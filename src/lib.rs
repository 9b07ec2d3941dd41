//! Detective Quest
//!
//! A murder-mystery text adventure. A death has occurred at Blackwood Manor;
//! you explore its rooms, collect clues into your notebook, and finally point
//! the finger at a suspect.
//!
//! # Game Mechanics
//!
//! - **Exploration**: the manor is a fixed binary tree of rooms, walked one
//!   directional command at a time
//! - **Clue notebook**: collected clues live in a binary search tree, sorted
//!   and duplicate-free
//! - **Suspect dossier**: a chained hash table maps each clue to the suspect
//!   it implicates
//! - **Accusation**: your accusation is scored by how many collected clues
//!   point at the accused
//!
//! # Architecture
//!
//! - `data` - The structures the game is built on: the mansion tree, the clue
//!   catalog, the suspect index
//! - `game` - Exploration state machine, accusation scoring, event log
//! - `cli` - Line-based terminal front-end

pub mod cli;
pub mod data;
pub mod game;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Input stream closed: {0}")]
    InputClosed(String),

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
