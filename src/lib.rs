//! Mansion Mystery
//!
//! A detective text adventure: walk the rooms of a mansion, collect the
//! clues you find, then accuse a suspect and see whether the evidence holds.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left or right through a fixed tree of rooms
//! - **Evidence**: Every clue you find is filed alphabetically in your ledger
//! - **Accusation**: Name a suspect; two implicating clues make a conviction
//!
//! # Architecture
//!
//! - `data` - The mansion map, clue ledger, suspect index and case files
//! - `game` - Session state, navigation and the verdict engine
//! - `console` - Line-oriented front end for plain terminals and pipes
//! - `tui` - Terminal user interface with ratatui

pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Could not read case file {path}: {source}")]
    CaseFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Case file is not valid JSON: {0}")]
    CaseFileFormat(#[from] serde_json::Error),

    #[error("Mansion layout has no rooms")]
    EmptyMansion,

    #[error("Room id declared twice: {0}")]
    DuplicateRoom(String),

    #[error("Room {from} links to unknown room {to}")]
    UnknownRoom { from: String, to: String },

    #[error("Entrance room not found: {0}")]
    MissingEntrance(String),

    #[error("Room {0} is reachable through more than one doorway")]
    SharedRoom(String),

    #[error("Room {0} cannot be reached from the entrance")]
    UnreachableRoom(String),

    #[error("Suspect index needs at least one bucket")]
    ZeroBuckets,

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
