//! Verdict engine
//!
//! Weighs the collected clues against an accusation.

use crate::data::{ClueLedger, SuspectIndex};
use serde::{Deserialize, Serialize};

/// Implicating clues needed to convict
pub const GUILT_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Guilty,
    Insufficient,
}

impl Verdict {
    pub fn is_guilty(&self) -> bool {
        matches!(self, Verdict::Guilty)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Guilty => write!(f, "GUILTY"),
            Verdict::Insufficient => write!(f, "INSUFFICIENT EVIDENCE"),
        }
    }
}

/// Outcome of accusing someone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub accused: String,
    pub matches: usize,
    pub verdict: Verdict,
}

impl Accusation {
    pub fn summary(&self) -> String {
        match self.verdict {
            Verdict::Guilty => format!("{} is the culprit! Case closed.", self.accused),
            Verdict::Insufficient => {
                "The evidence is insufficient. You accused the wrong person!".to_string()
            }
        }
    }
}

/// How many collected clues point at `accused`.
///
/// Clues missing from the index implicate no one. Each ledger entry is
/// counted on its own, so a clue filed twice counts twice.
pub fn count_matches(ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> usize {
    let mut matches = 0;
    ledger.traverse_in_order(|clue| {
        if index.lookup(clue) == Some(accused) {
            matches += 1;
        }
    });
    matches
}

pub fn decide(matches: usize) -> Verdict {
    if matches >= GUILT_THRESHOLD {
        Verdict::Guilty
    } else {
        Verdict::Insufficient
    }
}

pub fn accuse(ledger: &ClueLedger, index: &SuspectIndex, accused: &str) -> Accusation {
    let matches = count_matches(ledger, index, accused);
    let verdict = decide(matches);
    tracing::info!(accused, matches, %verdict, "accusation weighed");
    Accusation {
        accused: accused.to_string(),
        matches,
        verdict,
    }
}
