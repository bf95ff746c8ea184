//! Case files: the static data a game is bootstrapped from
//!
//! A case names its mansion layout, the entrance room and which clue
//! implicates which suspect. Cases are read from JSON; the built-in
//! "Manor Affair" is used when no file is given.

use super::{ClueAssociation, Mansion, RoomSpec, SuspectIndex, DEFAULT_BUCKETS};
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub title: String,
    /// Id of the entrance room
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_count: Option<usize>,
    pub rooms: Vec<RoomSpec>,
    #[serde(default)]
    pub associations: Vec<ClueAssociation>,
}

impl CaseFile {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::CaseFileIo {
            path: path.display().to_string(),
            source,
        })?;
        let case = Self::from_json(&json)?;
        tracing::info!(title = %case.title, path = %path.display(), "case file loaded");
        Ok(case)
    }

    pub fn build_mansion(&self) -> Result<Mansion, GameError> {
        Mansion::build(&self.root, &self.rooms)
    }

    /// Build the suspect index. `buckets` overrides the case's own bucket count.
    pub fn build_index(&self, buckets: Option<usize>) -> Result<SuspectIndex, GameError> {
        let bucket_count = buckets.or(self.bucket_count).unwrap_or(DEFAULT_BUCKETS);
        SuspectIndex::from_associations(bucket_count, &self.associations)
    }

    /// The Manor Affair: seven rooms, six clues, three suspects
    pub fn manor_affair() -> Self {
        Self {
            title: "The Manor Affair".to_string(),
            root: "hall".to_string(),
            bucket_count: Some(DEFAULT_BUCKETS),
            rooms: vec![
                RoomSpec::new("hall", "Entrance Hall")
                    .clue("Boot footprints")
                    .left("living")
                    .right("kitchen"),
                RoomSpec::new("living", "Living Room")
                    .clue("Stained book")
                    .left("library")
                    .right("garden"),
                RoomSpec::new("kitchen", "Kitchen")
                    .clue("Missing knife")
                    .left("pantry")
                    .right("cellar"),
                RoomSpec::new("library", "Library").clue("Torn page"),
                RoomSpec::new("garden", "Garden"),
                RoomSpec::new("pantry", "Pantry").clue("Opened wrapper"),
                RoomSpec::new("cellar", "Cellar").clue("Rusty key"),
            ],
            associations: vec![
                ClueAssociation::new("Boot footprints", "Carlos"),
                ClueAssociation::new("Stained book", "Ana"),
                ClueAssociation::new("Missing knife", "Carlos"),
                ClueAssociation::new("Torn page", "Beatriz"),
                ClueAssociation::new("Opened wrapper", "Ana"),
                ClueAssociation::new("Rusty key", "Carlos"),
            ],
        }
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        Self::manor_affair()
    }
}
