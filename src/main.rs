//! Detective Quest
//!
//! A murder-mystery text adventure: explore Blackwood Manor, collect clues,
//! accuse a suspect.

use detective_quest::cli::Terminal;
use detective_quest::{Game, Result};

fn main() -> Result<()> {
    let mut terminal = Terminal::stdio();
    terminal.print_banner()?;

    let mut game = Game::new();
    let outcome = game.run(&mut terminal)?;

    // Every narrative ending is a normal exit; only a closed input stream or
    // a broken terminal bubbles up as an error.
    terminal.print_outro(&outcome)?;
    Ok(())
}
