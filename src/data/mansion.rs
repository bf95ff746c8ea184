//! The mansion map
//!
//! Rooms form a binary tree: every room has at most a left and a right
//! doorway, and every room except the entrance is behind exactly one
//! doorway. The tree is built once from a layout and never changes.

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a room inside its [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoomId(pub(crate) usize);

/// Layout description of a single room, as written in a case file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl RoomSpec {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    pub fn clue(mut self, clue: &str) -> Self {
        self.clue = Some(clue.to_string());
        self
    }

    pub fn left(mut self, id: &str) -> Self {
        self.left = Some(id.to_string());
        self
    }

    pub fn right(mut self, id: &str) -> Self {
        self.right = Some(id.to_string());
        self
    }
}

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub key: String,
    pub name: String,
    clue: String,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    /// The clue lying in this room, if any
    pub fn clue(&self) -> Option<&str> {
        if self.clue.is_empty() {
            None
        } else {
            Some(&self.clue)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Which doorway to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// The whole mansion, stored as an arena of rooms
#[derive(Debug, Clone, Serialize)]
pub struct Mansion {
    rooms: Vec<Room>,
    root: RoomId,
}

impl Mansion {
    /// Build the mansion from a layout, entering at the room called `entrance`.
    ///
    /// The layout must describe a single tree: ids are unique, every link
    /// names a declared room, no room sits behind two doorways (the entrance
    /// sits behind none) and every room can be reached from the entrance.
    pub fn build(entrance: &str, layout: &[RoomSpec]) -> Result<Self, GameError> {
        if layout.is_empty() {
            return Err(GameError::EmptyMansion);
        }

        let mut index: HashMap<&str, RoomId> = HashMap::with_capacity(layout.len());
        for (i, spec) in layout.iter().enumerate() {
            if index.insert(spec.id.as_str(), RoomId(i)).is_some() {
                return Err(GameError::DuplicateRoom(spec.id.clone()));
            }
        }

        let root = *index
            .get(entrance)
            .ok_or_else(|| GameError::MissingEntrance(entrance.to_string()))?;

        let resolve = |from: &RoomSpec, to: &Option<String>| -> Result<Option<RoomId>, GameError> {
            match to {
                None => Ok(None),
                Some(to) => index
                    .get(to.as_str())
                    .copied()
                    .map(Some)
                    .ok_or_else(|| GameError::UnknownRoom {
                        from: from.id.clone(),
                        to: to.clone(),
                    }),
            }
        };

        let mut has_parent = vec![false; layout.len()];
        let mut rooms = Vec::with_capacity(layout.len());
        for spec in layout {
            let left = resolve(spec, &spec.left)?;
            let right = resolve(spec, &spec.right)?;
            for child in [left, right].into_iter().flatten() {
                if child == root || has_parent[child.0] {
                    return Err(GameError::SharedRoom(layout[child.0].id.clone()));
                }
                has_parent[child.0] = true;
            }
            rooms.push(Room {
                key: spec.id.clone(),
                name: spec.name.clone(),
                clue: spec.clue.clone().unwrap_or_default(),
                left,
                right,
            });
        }

        let mansion = Self { rooms, root };

        // A detached cycle would give every member a parent, so connectivity
        // is checked separately.
        let mut reached = vec![false; mansion.rooms.len()];
        for (id, _) in mansion.depth_first() {
            reached[id.0] = true;
        }
        if let Some(lost) = reached.iter().position(|r| !r) {
            return Err(GameError::UnreachableRoom(mansion.rooms[lost].key.clone()));
        }

        tracing::debug!(rooms = mansion.rooms.len(), entrance, "mansion built");
        Ok(mansion)
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Look up a room. Ids can only be obtained from this mansion, so they are always valid.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        let room = self.room(id);
        match direction {
            Direction::Left => room.left,
            Direction::Right => room.right,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Pre-order walk from the entrance, paired with each room's depth
    pub fn depth_first(&self) -> Vec<(RoomId, usize)> {
        let mut order = Vec::with_capacity(self.rooms.len());
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            // Stops a malformed arena from looping; build() rejects those anyway.
            if order.len() > self.rooms.len() {
                break;
            }
            order.push((id, depth));
            let room = self.room(id);
            if let Some(right) = room.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = room.left {
                stack.push((left, depth + 1));
            }
        }
        order
    }
}
