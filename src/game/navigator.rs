//! Walking the mansion
//!
//! The navigator tracks where the detective stands and files the clue of
//! every room they enter. Exploration only ends when the player leaves;
//! standing in a room with no doorways just means every move is blocked.

use crate::data::{ClueLedger, Direction, Mansion, RoomId};
use serde::{Deserialize, Serialize};

/// A player command while exploring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Exit,
    Unrecognized(String),
}

impl Command {
    /// Parse player input. Case and surrounding whitespace are ignored.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "l" | "left" => Command::Move(Direction::Left),
            "r" | "right" => Command::Move(Direction::Right),
            "x" | "exit" | "q" | "quit" => Command::Exit,
            _ => Command::Unrecognized(trimmed.to_string()),
        }
    }
}

/// What happened in response to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavEvent {
    /// Walked into a room; `clue` is what was found there, already filed
    Entered {
        room: RoomId,
        name: String,
        clue: Option<String>,
    },
    /// No doorway that way; the detective stays put
    NoPath(Direction),
    InvalidCommand(String),
    Exited,
    /// A command arrived after the player had already left
    AlreadyFinished,
}

#[derive(Debug)]
pub struct Navigator {
    current: RoomId,
    ledger: ClueLedger,
    path: Vec<RoomId>,
    finished: bool,
}

impl Navigator {
    /// Stand in the entrance, filing its clue. Returns the arrival event.
    pub fn begin(mansion: &Mansion) -> (Self, NavEvent) {
        let mut navigator = Self {
            current: mansion.root(),
            ledger: ClueLedger::new(),
            path: Vec::new(),
            finished: false,
        };
        let arrival = navigator.enter(mansion, mansion.root());
        (navigator, arrival)
    }

    pub fn apply(&mut self, mansion: &Mansion, command: &Command) -> NavEvent {
        if self.finished {
            return NavEvent::AlreadyFinished;
        }
        match command {
            Command::Move(direction) => match mansion.child(self.current, *direction) {
                Some(next) => self.enter(mansion, next),
                None => {
                    tracing::debug!(%direction, room = %mansion.room(self.current).name, "no doorway");
                    NavEvent::NoPath(*direction)
                }
            },
            Command::Exit => {
                self.finished = true;
                tracing::debug!(rooms = self.path.len(), clues = self.ledger.len(), "exploration over");
                NavEvent::Exited
            }
            Command::Unrecognized(input) => {
                tracing::debug!(input = %input, "unrecognized command");
                NavEvent::InvalidCommand(input.clone())
            }
        }
    }

    fn enter(&mut self, mansion: &Mansion, id: RoomId) -> NavEvent {
        let room = mansion.room(id);
        self.current = id;
        self.path.push(id);

        let clue = room.clue().map(str::to_string);
        if let Some(ref clue) = clue {
            self.ledger.insert(clue);
            tracing::info!(room = %room.name, clue = %clue, "clue collected");
        } else {
            tracing::debug!(room = %room.name, "nothing here");
        }

        NavEvent::Entered {
            room: id,
            name: room.name.clone(),
            clue,
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    /// Every room entered, in order, starting with the entrance
    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CaseFile;

    fn manor() -> Mansion {
        CaseFile::manor_affair().build_mansion().unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("l"), Command::Move(Direction::Left));
        assert_eq!(Command::parse("  RIGHT \n"), Command::Move(Direction::Right));
        assert_eq!(Command::parse("x"), Command::Exit);
        assert_eq!(Command::parse("Quit"), Command::Exit);
        assert_eq!(Command::parse(" up "), Command::Unrecognized("up".to_string()));
        assert_eq!(Command::parse(""), Command::Unrecognized(String::new()));
    }

    #[test]
    fn entrance_clue_is_filed_on_begin() {
        let mansion = manor();
        let (nav, arrival) = Navigator::begin(&mansion);
        assert_eq!(
            arrival,
            NavEvent::Entered {
                room: mansion.root(),
                name: "Entrance Hall".to_string(),
                clue: Some("Boot footprints".to_string()),
            }
        );
        assert_eq!(nav.ledger().sorted(), vec!["Boot footprints"]);
        assert_eq!(nav.path(), &[mansion.root()]);
    }

    #[test]
    fn walks_down_and_collects() {
        let mansion = manor();
        let (mut nav, _) = Navigator::begin(&mansion);
        nav.apply(&mansion, &Command::Move(Direction::Right));
        let event = nav.apply(&mansion, &Command::Move(Direction::Left));
        assert!(matches!(event, NavEvent::Entered { ref name, .. } if name == "Pantry"));
        assert_eq!(
            nav.ledger().sorted(),
            vec!["Boot footprints", "Missing knife", "Opened wrapper"]
        );
        assert_eq!(nav.path().len(), 3);
    }

    #[test]
    fn room_without_clue_files_nothing() {
        let mansion = manor();
        let (mut nav, _) = Navigator::begin(&mansion);
        nav.apply(&mansion, &Command::Move(Direction::Left));
        let event = nav.apply(&mansion, &Command::Move(Direction::Right));
        assert!(matches!(event, NavEvent::Entered { clue: None, ref name, .. } if name == "Garden"));
        assert_eq!(nav.ledger().len(), 2);
    }

    #[test]
    fn leaf_blocks_moves_until_exit() {
        let mansion = manor();
        let (mut nav, _) = Navigator::begin(&mansion);
        nav.apply(&mansion, &Command::Move(Direction::Left));
        nav.apply(&mansion, &Command::Move(Direction::Left));
        let library = nav.current();
        assert!(mansion.room(library).is_leaf());

        assert_eq!(nav.apply(&mansion, &Command::Move(Direction::Left)), NavEvent::NoPath(Direction::Left));
        assert_eq!(nav.apply(&mansion, &Command::Move(Direction::Right)), NavEvent::NoPath(Direction::Right));
        assert_eq!(nav.current(), library);
        assert!(!nav.is_finished());

        // Blocked moves are not new visits
        assert_eq!(nav.ledger().len(), 3);
        assert_eq!(nav.path().len(), 3);

        assert_eq!(nav.apply(&mansion, &Command::Exit), NavEvent::Exited);
        assert!(nav.is_finished());
    }

    #[test]
    fn invalid_command_changes_nothing() {
        let mansion = manor();
        let (mut nav, _) = Navigator::begin(&mansion);
        let event = nav.apply(&mansion, &Command::parse("jump"));
        assert_eq!(event, NavEvent::InvalidCommand("jump".to_string()));
        assert_eq!(nav.current(), mansion.root());
        assert_eq!(nav.ledger().len(), 1);
    }

    #[test]
    fn commands_after_exit_are_ignored() {
        let mansion = manor();
        let (mut nav, _) = Navigator::begin(&mansion);
        nav.apply(&mansion, &Command::Exit);
        assert_eq!(nav.apply(&mansion, &Command::Move(Direction::Left)), NavEvent::AlreadyFinished);
        assert_eq!(nav.current(), mansion.root());
    }
}
