//! Line-based terminal front-end
//!
//! All presentation lives here: the banner, the navigation menu, the emoji,
//! and the narrative text for every [`GameEvent`]. The core game never prints
//! anything itself.

use crate::data::{NavCommand, Severity};
use crate::game::{CommandSource, EventSink, GameEvent, GameMessage, GameOutcome, Verdict};
use crate::{GameError, Result};
use std::io::{BufRead, Write};

/// Intro banner
pub const BANNER: &str = r#"
🕵️  === DETECTIVE QUEST === 🕵️
A mysterious death has occurred at Blackwood Manor.
Explore the rooms, collect clues and unmask the culprit!
"#;

/// Navigation menu shown before each move
pub const MENU: &str = "\nOptions:\n  'l' - Go to the room on the left\n  'r' - Go to the room on the right\n  'e' - Leave the mansion\n";

/// Normalize one line of input into a navigation command. Only the first
/// non-blank character counts, case-insensitively; everything else is
/// [`NavCommand::Invalid`].
pub fn parse_direction(line: &str) -> NavCommand {
    match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('l') => NavCommand::Left,
        Some('r') => NavCommand::Right,
        Some('e') => NavCommand::Exit,
        _ => NavCommand::Invalid,
    }
}

/// Strip the line terminator and nothing else. Accusations are matched byte
/// for byte, so interior whitespace and case must survive.
pub fn trim_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// The terminal: prompts on stdout, reads stdin, renders events with the
/// game's emoji voice, and keeps a timestamped transcript.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    pub transcript: Vec<GameMessage>,
}

impl Terminal<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Vec::new(),
        }
    }

    pub fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        Ok(())
    }

    pub fn print_outro(&mut self, outcome: &GameOutcome) -> Result<()> {
        let line = match outcome {
            GameOutcome::Convicted => "The case of Blackwood Manor is closed.",
            GameOutcome::CaseDismissed => "The file gathers dust in the archives.",
            GameOutcome::WrongfulAccusation => "An innocent person nearly paid for your haste.",
            GameOutcome::NoEvidence => "Blackwood Manor keeps its secret.",
        };
        writeln!(self.output, "\n{line}")?;
        Ok(())
    }

    fn read_raw_line(&mut self, context: &str) -> Result<String> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(GameError::InputClosed(context.to_string()).into());
        }
        Ok(line)
    }

    fn say(&mut self, severity: Severity, text: String) {
        // Transcript first; a broken pipe on stdout should not lose the line.
        self.transcript.push(GameMessage::new(severity, text.clone()));
        let _ = writeln!(self.output, "{text}");
    }

    fn render(event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted { rooms } => {
                format!("Blackwood Manor loaded with {rooms} mysterious rooms...\n\n=== EXPLORING THE MANSION ===")
            }
            GameEvent::RoomEntered { room } => format!("\n📍 You are in the: {room}"),
            GameEvent::ClueFound { clue } => {
                format!("🔍 Clue found: {clue}\n✅ Clue added to your notebook!")
            }
            GameEvent::NoNewClue => "ℹ️  No new clue here...".to_string(),
            GameEvent::MoveBlocked { direction } => match direction {
                NavCommand::Left => "❌ There is no room to the left!".to_string(),
                _ => "❌ There is no room to the right!".to_string(),
            },
            GameEvent::InvalidCommand => "❌ Invalid move! Use 'l', 'r' or 'e'.".to_string(),
            GameEvent::LeftMansion => "\n🚪 Leaving the mansion...".to_string(),
            GameEvent::CaseFailed => {
                "\n💀 YOU FAILED! Not a single clue was collected.\nThe killer escaped and you were fired!".to_string()
            }
            GameEvent::AccusationPhase {
                suspects,
                clues_collected,
            } => format!(
                "\n🎭 === FINAL PHASE - ACCUSATION === 🎭\nSuspects: {}\n\n📖 Clues collected ({} in total):",
                suspects.join(", "),
                clues_collected
            ),
            GameEvent::CollectedClue { clue } => format!("   - {clue}"),
            GameEvent::AnalysisBegins => "\n🔎 Clue analysis:".to_string(),
            GameEvent::ClueAnalyzed { clue, suspect } => {
                format!("   - '{clue}' → points to {suspect}")
            }
            GameEvent::VerdictReached {
                accused,
                supporting,
                verdict,
            } => {
                let mut text = format!(
                    "\n=== VERDICT ===\nAccused: {accused}\nClues supporting the accusation: {supporting}\n"
                );
                match verdict {
                    Verdict::Convicted => {
                        text.push_str(&format!(
                            "🎉 CONGRATULATIONS! The accusation is backed by multiple clues!\n🔒 {accused} has been arrested! Case solved!"
                        ));
                    }
                    Verdict::CaseDismissed => {
                        text.push_str(&format!(
                            "⚠️  The accusation is weak! Only one clue points to {accused}.\n💼 The case was shelved for lack of evidence."
                        ));
                    }
                    Verdict::WrongfulAccusation => {
                        text.push_str(&format!(
                            "💀 TOTAL FAILURE! No clue points to {accused}.\n🚓 You were fired for a groundless accusation!"
                        ));
                    }
                }
                text
            }
        }
    }
}

impl<R: BufRead, W: Write> EventSink for Terminal<R, W> {
    fn emit(&mut self, event: &GameEvent) {
        let text = Self::render(event);
        self.say(event.severity(), text);
    }
}

impl<R: BufRead, W: Write> CommandSource for Terminal<R, W> {
    fn read_direction(&mut self) -> Result<NavCommand> {
        write!(self.output, "{MENU}Where do you want to go? ")?;
        self.output.flush()?;
        let line = self.read_raw_line("while choosing a direction")?;
        Ok(parse_direction(&line))
    }

    fn read_name(&mut self) -> Result<String> {
        write!(self.output, "\n🗣️  Who is the culprit? Type the name: ")?;
        self.output.flush()?;
        let line = self.read_raw_line("while reading the accusation")?;
        Ok(trim_line_terminator(&line).to_string())
    }
}
