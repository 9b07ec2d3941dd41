//! The final phase: accusation and verdict
//!
//! Lays the collected clues on the table, resolves each one against the case
//! file, then asks the player to name the culprit and scores the accusation.

use super::{CommandSource, EventSink, GameEvent};
use crate::data::{ClueCatalog, SuspectIndex, SUSPECT_ROSTER};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Minimum number of supporting clues for a conviction.
pub const CONVICTION_THRESHOLD: u32 = 2;

/// The outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Two or more clues back the accusation.
    Convicted,
    /// Exactly one clue: insufficient evidence, case shelved.
    CaseDismissed,
    /// No clue points at the accused.
    WrongfulAccusation,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Convicted => write!(f, "CONVICTED"),
            Verdict::CaseDismissed => write!(f, "CASE DISMISSED"),
            Verdict::WrongfulAccusation => write!(f, "WRONGFUL ACCUSATION"),
        }
    }
}

/// Run the accusation phase: list the evidence, read the accusation, deliver
/// the verdict.
pub fn evaluate<IO>(
    catalog: &ClueCatalog,
    index: &SuspectIndex,
    clues_collected: u32,
    io: &mut IO,
) -> Result<Verdict>
where
    IO: CommandSource + EventSink,
{
    io.emit(&GameEvent::AccusationPhase {
        suspects: SUSPECT_ROSTER.iter().map(|s| s.to_string()).collect(),
        clues_collected,
    });

    // First pass: the notebook as collected, in sorted order.
    catalog.for_each_in_order(|clue| {
        io.emit(&GameEvent::CollectedClue {
            clue: clue.to_string(),
        });
    });

    // Second pass: what each clue means.
    io.emit(&GameEvent::AnalysisBegins);
    catalog.for_each_in_order(|clue| {
        io.emit(&GameEvent::ClueAnalyzed {
            clue: clue.to_string(),
            suspect: index.suspect_for(clue).to_string(),
        });
    });

    // Exact byte comparison against stored suspect names; the front-end only
    // strips the line terminator.
    let accused = io.read_name()?;
    let supporting = count_matches(catalog, index, &accused);
    let verdict = verdict_for(supporting);

    io.emit(&GameEvent::VerdictReached {
        accused,
        supporting,
        verdict,
    });

    Ok(verdict)
}

/// How many collected clues implicate the accused.
pub fn count_matches(catalog: &ClueCatalog, index: &SuspectIndex, accused: &str) -> u32 {
    let mut matches = 0;
    catalog.for_each_in_order(|clue| {
        if index.suspect_for(clue) == accused {
            matches += 1;
        }
    });
    matches
}

fn verdict_for(supporting: u32) -> Verdict {
    if supporting >= CONVICTION_THRESHOLD {
        Verdict::Convicted
    } else if supporting == 1 {
        Verdict::CaseDismissed
    } else {
        Verdict::WrongfulAccusation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Catalog whose resolved suspects are {Ana, Ana, Carlos}.
    fn two_ana_one_carlos() -> (ClueCatalog, SuspectIndex) {
        let mut catalog = ClueCatalog::new();
        catalog.insert("Torn love letter"); // Ana
        catalog.insert("Blonde hair strand"); // Ana
        catalog.insert("Blue ink stains"); // Carlos
        (catalog, SuspectIndex::case_file())
    }

    #[test]
    fn two_matches_convict() {
        let (catalog, index) = two_ana_one_carlos();
        assert_eq!(count_matches(&catalog, &index, "Ana"), 2);
        assert_eq!(verdict_for(2), Verdict::Convicted);
    }

    #[test]
    fn one_match_dismisses_the_case() {
        let (catalog, index) = two_ana_one_carlos();
        assert_eq!(count_matches(&catalog, &index, "Carlos"), 1);
        assert_eq!(verdict_for(1), Verdict::CaseDismissed);
    }

    #[test]
    fn zero_matches_is_a_wrongful_accusation() {
        let (catalog, index) = two_ana_one_carlos();
        assert_eq!(count_matches(&catalog, &index, "David"), 0);
        assert_eq!(verdict_for(0), Verdict::WrongfulAccusation);
    }

    #[test]
    fn matching_is_byte_exact() {
        let (catalog, index) = two_ana_one_carlos();
        assert_eq!(count_matches(&catalog, &index, "ana"), 0);
        assert_eq!(count_matches(&catalog, &index, "Ana "), 0);
        assert_eq!(count_matches(&catalog, &index, ""), 0);
    }

    #[test]
    fn unresolved_clues_count_for_an_unknown_accusation() {
        // A clue outside the case file resolves to the sentinel, which is
        // compared like any other name.
        let mut catalog = ClueCatalog::new();
        catalog.insert("Muddy footprint");
        let index = SuspectIndex::case_file();
        assert_eq!(count_matches(&catalog, &index, "Unknown"), 1);
    }
}
