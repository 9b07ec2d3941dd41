//! Core game logic and state management

pub mod accusation;

pub use accusation::{count_matches, Verdict};

use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of player input. Implemented by the terminal front-end and by
/// scripted sources in tests.
pub trait CommandSource {
    /// Read and normalize one navigation command. Blocks until a line is
    /// available; unrecognized input comes back as [`NavCommand::Invalid`].
    fn read_direction(&mut self) -> Result<NavCommand>;

    /// Read one line of free text, trimmed only of the line terminator. Used
    /// for the accusation; no case normalization, no further trimming.
    fn read_name(&mut self) -> Result<String>;
}

/// Sink for display events. The core never formats or localizes text; it
/// hands structured events to whoever is rendering the game.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Everything the player sees, as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { rooms: usize },
    RoomEntered { room: String },
    ClueFound { clue: String },
    NoNewClue,
    MoveBlocked { direction: NavCommand },
    InvalidCommand,
    LeftMansion,
    /// The player left without a single clue. The case is over; no
    /// accusation phase follows.
    CaseFailed,
    AccusationPhase { suspects: Vec<String>, clues_collected: u32 },
    CollectedClue { clue: String },
    AnalysisBegins,
    ClueAnalyzed { clue: String, suspect: String },
    VerdictReached { accused: String, supporting: u32, verdict: Verdict },
}

impl GameEvent {
    pub fn severity(&self) -> Severity {
        match self {
            GameEvent::ClueFound { .. } => Severity::Discovery,
            GameEvent::MoveBlocked { .. } | GameEvent::InvalidCommand => Severity::Warning,
            GameEvent::CaseFailed => Severity::Critical,
            GameEvent::VerdictReached { verdict, .. } => match verdict {
                Verdict::Convicted | Verdict::CaseDismissed => Severity::Info,
                Verdict::WrongfulAccusation => Severity::Critical,
            },
            _ => Severity::Info,
        }
    }
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusation,
    GameOver(GameOutcome),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The accusation held up: case solved.
    Convicted,
    /// One supporting clue is not enough; the case was shelved.
    CaseDismissed,
    /// Nothing pointed at the accused.
    WrongfulAccusation,
    /// Left the manor empty-handed; the killer walked.
    NoEvidence,
}

impl From<Verdict> for GameOutcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Convicted => GameOutcome::Convicted,
            Verdict::CaseDismissed => GameOutcome::CaseDismissed,
            Verdict::WrongfulAccusation => GameOutcome::WrongfulAccusation,
        }
    }
}

/// Game statistics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub clues_collected: u32,
    pub moves_made: u32,
    pub moves_blocked: u32,
    pub invalid_commands: u32,
}

/// A timestamped line in the game transcript, kept by the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub text: String,
}

impl GameMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            text: text.into(),
        }
    }
}

/// The main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// The manor, a fixed binary tree of rooms
    mansion: Room,

    /// Path from the entrance to the room the player is standing in. Moves
    /// only ever descend, so this fully identifies the current room.
    path: Vec<NavCommand>,

    /// Clues collected so far, sorted and duplicate-free
    catalog: ClueCatalog,

    /// The case file: which suspect each clue implicates
    index: SuspectIndex,

    /// Current game phase
    pub phase: GamePhase,

    /// Game statistics
    pub stats: GameStats,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Set up a fresh game: build the manor, seed the case file, stand the
    /// player at the entrance.
    pub fn new() -> Self {
        Self {
            mansion: build_mansion(),
            path: Vec::new(),
            catalog: ClueCatalog::new(),
            index: SuspectIndex::case_file(),
            phase: GamePhase::Exploring,
            stats: GameStats::default(),
        }
    }

    /// The clues collected so far, in ascending lexicographic order.
    pub fn collected_clues(&self) -> Vec<String> {
        self.catalog.sorted_clues()
    }

    /// Play a full game: exploration, then (if any clue was found) the
    /// accusation. Returns how it ended.
    pub fn run<IO>(&mut self, io: &mut IO) -> Result<GameOutcome>
    where
        IO: CommandSource + EventSink,
    {
        io.emit(&GameEvent::GameStarted {
            rooms: self.mansion.room_count(),
        });

        self.explore(io)?;

        if self.phase == GamePhase::Accusation {
            let verdict = accusation::evaluate(
                &self.catalog,
                &self.index,
                self.stats.clues_collected,
                io,
            )?;
            self.phase = GamePhase::GameOver(verdict.into());
        }

        match self.phase {
            GamePhase::GameOver(outcome) => Ok(outcome),
            _ => Err(GameError::InvalidState("game ended mid-phase".to_string()).into()),
        }
    }

    /// The exploration loop. One turn per iteration: announce the room,
    /// harvest its clue if it still has one, then consume one command.
    pub fn explore<IO>(&mut self, io: &mut IO) -> Result<()>
    where
        IO: CommandSource + EventSink,
    {
        while self.phase == GamePhase::Exploring {
            let (room_name, clue) = {
                let room = self.current_room_mut()?;
                (room.name.clone(), room.collect_clue())
            };

            io.emit(&GameEvent::RoomEntered { room: room_name });

            match clue {
                Some(clue) => {
                    io.emit(&GameEvent::ClueFound { clue: clue.clone() });
                    self.catalog.insert(&clue);
                    self.stats.clues_collected += 1;
                }
                None => io.emit(&GameEvent::NoNewClue),
            }

            match io.read_direction()? {
                direction @ (NavCommand::Left | NavCommand::Right) => {
                    self.step(direction, io)?;
                }
                NavCommand::Exit => {
                    io.emit(&GameEvent::LeftMansion);
                    if self.stats.clues_collected == 0 {
                        io.emit(&GameEvent::CaseFailed);
                        self.phase = GamePhase::GameOver(GameOutcome::NoEvidence);
                    } else {
                        self.phase = GamePhase::Accusation;
                    }
                }
                NavCommand::Invalid => {
                    io.emit(&GameEvent::InvalidCommand);
                    self.stats.invalid_commands += 1;
                }
            }
        }
        Ok(())
    }

    /// Try to descend in the given direction. A missing child blocks the
    /// move and leaves the player where they are.
    fn step(&mut self, direction: NavCommand, io: &mut impl EventSink) -> Result<()> {
        let room = self.current_room_mut()?;
        let child_exists = match direction {
            NavCommand::Left => room.left.is_some(),
            NavCommand::Right => room.right.is_some(),
            _ => false,
        };

        if child_exists {
            self.path.push(direction);
            self.stats.moves_made += 1;
        } else {
            io.emit(&GameEvent::MoveBlocked { direction });
            self.stats.moves_blocked += 1;
        }
        Ok(())
    }

    fn current_room_mut(&mut self) -> Result<&mut Room> {
        let mut room = &mut self.mansion;
        for step in &self.path {
            room = match step {
                NavCommand::Left => room.left.as_deref_mut(),
                NavCommand::Right => room.right.as_deref_mut(),
                _ => None,
            }
            .ok_or_else(|| GameError::InvalidState("path leads off the mansion".to_string()))?;
        }
        Ok(room)
    }
}
