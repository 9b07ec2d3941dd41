//! The suspect index: who does each clue implicate?
//!
//! A fixed-size hash table with separate chaining. Each bucket is a singly
//! linked chain of entries; insertion prepends, so when the same clue text is
//! inserted twice the most recent association shadows the older one without
//! removing it. Lookups that miss resolve to the [`UNKNOWN_SUSPECT`] sentinel
//! rather than an error.

use super::UNKNOWN_SUSPECT;
use serde::{Deserialize, Serialize};

/// Number of buckets. Fixed game constant; the case file holds a dozen
/// associations, so collisions are expected and chains stay short.
pub const TABLE_SIZE: usize = 10;

/// One clue → suspect association in a bucket chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SuspectEntry {
    clue: String,
    suspect: String,
    next: Option<Box<SuspectEntry>>,
}

/// The clue → suspect hash table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectIndex {
    buckets: Vec<Option<Box<SuspectEntry>>>,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self {
            buckets: (0..TABLE_SIZE).map(|_| None).collect(),
        }
    }

    /// An index seeded with the Blackwood case file: the twelve fixed
    /// clue → suspect associations, in their canonical order.
    pub fn case_file() -> Self {
        let mut index = Self::new();
        for (clue, suspect) in [
            ("Torn love letter", "Ana"),
            ("Blue ink stains", "Carlos"),
            ("Expensive jewelry receipt", "Beatriz"),
            ("Blonde hair strand", "Ana"),
            ("Expensive perfume smell", "Beatriz"),
            ("Book about poisons", "Carlos"),
            ("Broken watch", "David"),
            ("Mysterious white powder", "Carlos"),
            ("Torn old photo", "Ana"),
            ("Safe key", "David"),
            ("Threat note", "Beatriz"),
            ("Stained gloves", "David"),
        ] {
            index.insert(clue, suspect);
        }
        index
    }

    /// Bucket index for a clue. Total over every input: accumulates the whole
    /// string djb2-style and reduces modulo the table size, so keys that do
    /// not start with a lowercase letter still land in `[0, TABLE_SIZE)`.
    pub fn bucket_for(clue: &str) -> usize {
        let mut hash: u64 = 5381;
        for byte in clue.bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
        }
        (hash % TABLE_SIZE as u64) as usize
    }

    /// Record that a clue implicates a suspect. Prepends to the bucket chain
    /// in O(1); an existing entry for the same clue is shadowed, not removed.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = Self::bucket_for(clue);
        let entry = SuspectEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: self.buckets[bucket].take(),
        };
        self.buckets[bucket] = Some(Box::new(entry));
    }

    /// The suspect a clue implicates, or [`UNKNOWN_SUSPECT`] if the case file
    /// has nothing on it. Chains are scanned head-to-tail, so the most
    /// recently inserted association for a clue wins.
    pub fn suspect_for<'a>(&'a self, clue: &str) -> &'a str {
        let mut entry = self.buckets[Self::bucket_for(clue)].as_deref();
        while let Some(e) = entry {
            if e.clue == clue {
                return &e.suspect;
            }
            entry = e.next.as_deref();
        }
        UNKNOWN_SUSPECT
    }

    /// Total number of entries across all chains, shadowed ones included.
    pub fn entry_count(&self) -> usize {
        let mut count = 0;
        for head in &self.buckets {
            let mut entry = head.as_deref();
            while let Some(e) = entry {
                count += 1;
                entry = e.next.as_deref();
            }
        }
        count
    }
}
