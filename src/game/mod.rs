//! Core game logic and state management

pub mod navigator;
pub mod verdict;

pub use navigator::{Command, NavEvent, Navigator};
pub use verdict::{accuse, count_matches, decide, Accusation, Verdict, GUILT_THRESHOLD};

use crate::data::*;
use crate::GameError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The main game state
#[derive(Debug)]
pub struct Game {
    /// Title of the case being played
    pub title: String,

    /// Current game phase
    pub phase: GamePhase,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,

    /// When the session started
    pub started_at: DateTime<Utc>,

    mansion: Mansion,
    index: SuspectIndex,
    navigator: Navigator,
    accusation: Option<Accusation>,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusing,
    Closed(Verdict),
}

/// Game statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub commands_issued: u32,
    pub rooms_entered: u32,
    pub clues_collected: u32,
    pub blocked_moves: u32,
    pub invalid_commands: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::alert(Severity::Info, source, message)
    }

    pub fn alert(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

impl Game {
    /// Start a session in an already-built mansion
    pub fn new(title: &str, mansion: Mansion, index: SuspectIndex) -> Self {
        let (navigator, arrival) = Navigator::begin(&mansion);

        let mut game = Self {
            title: title.to_string(),
            phase: GamePhase::Exploring,
            stats: GameStats::default(),
            message_log: Vec::new(),
            started_at: Utc::now(),
            mansion,
            index,
            navigator,
            accusation: None,
        };

        game.add_message(GameMessage::info(
            "Narrator",
            &format!("{}. The doors close behind you...", game.title),
        ));
        game.record(&arrival);

        tracing::info!(title, rooms = game.mansion.len(), "investigation started");
        game
    }

    /// Bootstrap a session from a case file
    pub fn from_case(case: &CaseFile, buckets: Option<usize>) -> Result<Self, GameError> {
        let mansion = case.build_mansion()?;
        let index = case.build_index(buckets)?;
        Ok(Self::new(&case.title, mansion, index))
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    /// Carry out an exploration command, returning what the player sees
    pub fn execute(&mut self, command: &Command) -> Vec<String> {
        if self.phase != GamePhase::Exploring {
            return vec!["Exploration is over. Time to name a suspect.".to_string()];
        }

        self.stats.commands_issued += 1;
        let event = self.navigator.apply(&self.mansion, command);
        if event == NavEvent::Exited {
            self.phase = GamePhase::Accusing;
        }
        self.record(&event)
    }

    /// Log an event and update the counters it touches
    fn record(&mut self, event: &NavEvent) -> Vec<String> {
        let lines = narrate(event);
        let severity = match event {
            NavEvent::Entered { clue: Some(_), .. } => Severity::Notice,
            NavEvent::Entered { .. } | NavEvent::Exited => Severity::Info,
            NavEvent::NoPath(_) | NavEvent::InvalidCommand(_) | NavEvent::AlreadyFinished => {
                Severity::Warning
            }
        };

        match event {
            NavEvent::Entered { clue, .. } => {
                self.stats.rooms_entered += 1;
                if clue.is_some() {
                    self.stats.clues_collected += 1;
                }
            }
            NavEvent::NoPath(_) => self.stats.blocked_moves += 1,
            NavEvent::InvalidCommand(_) => self.stats.invalid_commands += 1,
            NavEvent::Exited | NavEvent::AlreadyFinished => {}
        }

        for line in &lines {
            self.add_message(GameMessage::alert(severity, "Mansion", line));
        }
        lines
    }

    /// Name the culprit. Only allowed once exploration has ended, and only once.
    pub fn accuse(&mut self, accused: &str) -> Result<Accusation, GameError> {
        match self.phase {
            GamePhase::Exploring => {
                return Err(GameError::InvalidState(
                    "finish exploring before accusing anyone".to_string(),
                ))
            }
            GamePhase::Closed(_) => {
                return Err(GameError::InvalidState("the case is already closed".to_string()))
            }
            GamePhase::Accusing => {}
        }

        let accusation = verdict::accuse(self.navigator.ledger(), &self.index, accused);
        self.phase = GamePhase::Closed(accusation.verdict);

        self.add_message(GameMessage::alert(
            Severity::Critical,
            "Judge",
            &format!("Clues pointing at {}: {}", accusation.accused, accusation.matches),
        ));
        self.add_message(GameMessage::alert(Severity::Critical, "Judge", &accusation.summary()));

        self.accusation = Some(accusation.clone());
        Ok(accusation)
    }

    /// Collected clues, one line each, or a notice that there are none
    pub fn clue_listing(&self) -> Vec<String> {
        let ledger = self.navigator.ledger();
        if ledger.is_empty() {
            return vec!["No clues were collected.".to_string()];
        }
        let mut lines = Vec::with_capacity(ledger.len());
        ledger.traverse_in_order(|clue| lines.push(format!("- {}", clue)));
        lines
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        let elapsed = Utc::now().signed_duration_since(self.started_at);
        format!(
            "Room: {} | Rooms entered: {} | Clues: {} | Elapsed: {:02}:{:02}",
            self.current_room().name,
            self.stats.rooms_entered,
            self.navigator.ledger().len(),
            elapsed.num_minutes(),
            elapsed.num_seconds() % 60,
        )
    }

    pub fn current_room(&self) -> &Room {
        self.mansion.room(self.navigator.current())
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn index(&self) -> &SuspectIndex {
        &self.index
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn ledger(&self) -> &ClueLedger {
        self.navigator.ledger()
    }

    pub fn accusation(&self) -> Option<&Accusation> {
        self.accusation.as_ref()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Closed(_))
    }
}

/// Player-facing text for a navigation event
pub fn narrate(event: &NavEvent) -> Vec<String> {
    match event {
        NavEvent::Entered { name, clue, .. } => {
            let found = match clue {
                Some(clue) => format!("Clue found: {}", clue),
                None => "No clue in this room.".to_string(),
            };
            vec![format!("You are in: {}", name), found]
        }
        NavEvent::NoPath(direction) => vec![format!("There is no path to the {}!", direction)],
        NavEvent::InvalidCommand(input) if input.is_empty() => vec!["Invalid option.".to_string()],
        NavEvent::InvalidCommand(input) => vec![format!("Invalid option: {}", input)],
        NavEvent::Exited => vec!["Exploration finished.".to_string()],
        NavEvent::AlreadyFinished => vec!["Exploration is over.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manor_game() -> Game {
        Game::from_case(&CaseFile::manor_affair(), None).unwrap()
    }

    #[test]
    fn new_game_stands_in_the_entrance() {
        let game = manor_game();
        assert_eq!(game.phase, GamePhase::Exploring);
        assert_eq!(game.current_room().name, "Entrance Hall");
        assert_eq!(game.stats.rooms_entered, 1);
        assert_eq!(game.stats.clues_collected, 1);
        assert!(game
            .message_log
            .iter()
            .any(|m| m.severity == Severity::Notice && m.message == "Clue found: Boot footprints"));
    }

    #[test]
    fn execute_narrates_and_counts() {
        let mut game = manor_game();
        let lines = game.execute(&Command::parse("r"));
        assert_eq!(lines, vec!["You are in: Kitchen", "Clue found: Missing knife"]);

        game.execute(&Command::parse("r"));
        let lines = game.execute(&Command::parse("r"));
        assert_eq!(lines, vec!["There is no path to the right!"]);
        let lines = game.execute(&Command::parse("?"));
        assert_eq!(lines, vec!["Invalid option: ?"]);

        assert_eq!(game.stats.commands_issued, 4);
        assert_eq!(game.stats.rooms_entered, 3);
        assert_eq!(game.stats.blocked_moves, 1);
        assert_eq!(game.stats.invalid_commands, 1);
        assert!(game.check_status().starts_with("Room: Cellar | Rooms entered: 3 | Clues: 3"));
    }

    #[test]
    fn accusing_requires_exit_first() {
        let mut game = manor_game();
        assert!(matches!(game.accuse("Carlos"), Err(GameError::InvalidState(_))));

        game.execute(&Command::Exit);
        assert_eq!(game.phase, GamePhase::Accusing);
        assert_eq!(
            game.execute(&Command::parse("l")),
            vec!["Exploration is over. Time to name a suspect."]
        );

        let accusation = game.accuse("Carlos").unwrap();
        assert_eq!(accusation.matches, 1);
        assert_eq!(game.phase, GamePhase::Closed(Verdict::Insufficient));
        assert!(game.is_over());
        assert!(matches!(game.accuse("Ana"), Err(GameError::InvalidState(_))));
        assert_eq!(game.accusation(), Some(&accusation));
    }

    #[test]
    fn clue_listing_is_sorted() {
        let mut game = manor_game();
        game.execute(&Command::parse("right"));
        game.execute(&Command::parse("right"));
        assert_eq!(
            game.clue_listing(),
            vec!["- Boot footprints", "- Missing knife", "- Rusty key"]
        );
    }

    #[test]
    fn clue_listing_reports_empty_ledger() {
        let layout = vec![RoomSpec::new("porch", "Porch")];
        let mansion = Mansion::build("porch", &layout).unwrap();
        let index = SuspectIndex::new(DEFAULT_BUCKETS).unwrap();
        let game = Game::new("Empty Porch", mansion, index);
        assert_eq!(game.clue_listing(), vec!["No clues were collected."]);
        assert_eq!(game.stats.clues_collected, 0);
    }
}
