//! End-to-end games played through the terminal front-end

use detective_quest::cli::Terminal;
use detective_quest::game::{Game, GameOutcome};
use std::io::Cursor;

fn play(script: &str) -> (Game, Terminal<Cursor<Vec<u8>>, Vec<u8>>, GameOutcome) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut terminal = Terminal::new(input, Vec::new());
    let mut game = Game::new();
    let outcome = game.run(&mut terminal).expect("scripted game should finish");
    (game, terminal, outcome)
}

fn transcript_position(terminal: &Terminal<Cursor<Vec<u8>>, Vec<u8>>, needle: &str) -> usize {
    terminal
        .transcript
        .iter()
        .position(|m| m.text.contains(needle))
        .unwrap_or_else(|| panic!("transcript is missing {needle:?}"))
}

#[test]
fn west_wing_walk_collects_and_lists_three_clues() {
    let (game, terminal, outcome) = play("l\nl\ne\nAna\n");

    assert_eq!(
        game.collected_clues(),
        vec![
            "Book about poisons",
            "Forced door - forced entry",
            "Torn love letter",
        ]
    );

    // The listing comes out in lexicographic order, not visit order.
    let book = transcript_position(&terminal, "- Book about poisons");
    let door = transcript_position(&terminal, "- Forced door - forced entry");
    let letter = transcript_position(&terminal, "- Torn love letter");
    assert!(book < door && door < letter);

    // "Torn love letter" is Ana's only clue in this run.
    transcript_position(&terminal, "'Torn love letter' → points to Ana");
    assert_eq!(outcome, GameOutcome::CaseDismissed);
}

#[test]
fn library_and_living_room_convict_carlos() {
    let (_, terminal, outcome) = play("L\nR\ne\nCarlos\n");

    assert_eq!(outcome, GameOutcome::Convicted);
    transcript_position(&terminal, "Clues supporting the accusation: 2");
    transcript_position(&terminal, "Carlos has been arrested");
}

#[test]
fn blocked_and_invalid_moves_leave_the_game_playable() {
    // One garbage command at the entrance, then a dead-end bounce in the
    // winter garden before leaving.
    let (game, terminal, outcome) = play("north\nr\nr\nr\ne\nDavid\n");

    assert_eq!(game.stats.invalid_commands, 1);
    assert_eq!(game.stats.moves_blocked, 1);
    assert_eq!(game.stats.clues_collected, 3);
    transcript_position(&terminal, "Invalid move");
    transcript_position(&terminal, "no room to the right");

    // Nothing collected implicates David.
    assert_eq!(outcome, GameOutcome::WrongfulAccusation);
}

#[test]
fn accusation_comparison_is_exact() {
    // Lowercase "carlos" does not match the stored "Carlos".
    let (_, _, outcome) = play("l\nr\ne\ncarlos\n");
    assert_eq!(outcome, GameOutcome::WrongfulAccusation);
}

#[test]
fn entrance_clue_resolves_to_unknown() {
    let (_, terminal, _) = play("e\nBeatriz\n");
    transcript_position(&terminal, "'Forced door - forced entry' → points to Unknown");
}

#[test]
fn exhausted_input_surfaces_as_an_error() {
    let input = Cursor::new(b"l\n".to_vec());
    let mut terminal = Terminal::new(input, Vec::new());
    let mut game = Game::new();
    assert!(game.run(&mut terminal).is_err());
}
