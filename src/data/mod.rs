//! Data structures for the game world
//!
//! Defines the mansion map, the clue ledger, the suspect index and the case
//! files they are loaded from.

pub mod case;
pub mod ledger;
pub mod mansion;
pub mod suspects;

pub use case::*;
pub use ledger::*;
pub use mansion::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};

/// Severity levels for messages shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Notice,
    Warning,
    Critical,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "·",
            Severity::Notice => "◆",
            Severity::Warning => "▲",
            Severity::Critical => "●",
        }
    }
}
