//! The mansion: a fixed binary tree of rooms
//!
//! Blackwood Manor never changes shape. Seven rooms, built once at startup,
//! each optionally holding a single clue that can be collected exactly once.

use serde::{Deserialize, Serialize};

/// A room in the manor. Each parent exclusively owns its children; the tree
/// has no sharing and no cycles, so teardown is a plain `Drop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// The clue waiting in this room. `None` once collected (or if the room
    /// never had one).
    pub clue: Option<String>,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: Some(clue.to_string()),
            left: None,
            right: None,
        }
    }

    /// Take the room's clue, if it still has one. Second and later calls
    /// return `None`.
    pub fn collect_clue(&mut self) -> Option<String> {
        self.clue.take()
    }

    /// Number of rooms in this subtree, counting `self`.
    pub fn room_count(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Room::room_count);
        let right = self.right.as_deref().map_or(0, Room::room_count);
        1 + left + right
    }
}

/// Build Blackwood Manor. The topology and clue placement are fixed game
/// content: the west wing hangs off the entrance's left, the east wing off
/// its right.
pub fn build_mansion() -> Room {
    let mut entrance = Room::new("Entrance", "Forced door - forced entry");

    // West wing
    let mut library = Room::new("Library", "Book about poisons");
    library.left = Some(Box::new(Room::new("Office", "Torn love letter")));
    library.right = Some(Box::new(Room::new("Living Room", "Blue ink stains")));

    // East wing
    let mut bedroom = Room::new("Master Bedroom", "Expensive perfume smell");
    bedroom.left = Some(Box::new(Room::new("Bathroom", "Mysterious white powder")));
    bedroom.right = Some(Box::new(Room::new("Winter Garden", "Blonde hair strand")));

    entrance.left = Some(Box::new(library));
    entrance.right = Some(Box::new(bedroom));
    entrance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mansion_has_seven_rooms() {
        let mansion = build_mansion();
        assert_eq!(mansion.room_count(), 7);
    }

    #[test]
    fn mansion_topology_is_fixed() {
        let mansion = build_mansion();
        assert_eq!(mansion.name, "Entrance");

        let library = mansion.left.as_deref().unwrap();
        assert_eq!(library.name, "Library");
        assert_eq!(library.left.as_deref().unwrap().name, "Office");
        assert_eq!(library.right.as_deref().unwrap().name, "Living Room");

        let bedroom = mansion.right.as_deref().unwrap();
        assert_eq!(bedroom.name, "Master Bedroom");
        assert_eq!(bedroom.left.as_deref().unwrap().name, "Bathroom");
        assert_eq!(bedroom.right.as_deref().unwrap().name, "Winter Garden");
    }

    #[test]
    fn every_room_starts_with_a_clue() {
        fn check(room: &Room) {
            assert!(room.clue.is_some(), "{} has no clue", room.name);
            if let Some(left) = room.left.as_deref() {
                check(left);
            }
            if let Some(right) = room.right.as_deref() {
                check(right);
            }
        }
        check(&build_mansion());
    }

    #[test]
    fn collect_clue_is_one_shot() {
        let mut room = Room::new("Office", "Torn love letter");
        assert_eq!(room.collect_clue().as_deref(), Some("Torn love letter"));
        assert_eq!(room.collect_clue(), None);
        assert_eq!(room.collect_clue(), None);
    }

    #[test]
    fn leaves_have_no_children() {
        let mansion = build_mansion();
        let office = mansion.left.as_deref().unwrap().left.as_deref().unwrap();
        assert!(office.left.is_none());
        assert!(office.right.is_none());
    }
}
