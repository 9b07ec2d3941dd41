//! The clue catalog: the detective's notebook
//!
//! A binary search tree keyed by clue text. Clues come out of an in-order
//! traversal in ascending lexicographic order, and inserting the same clue
//! twice leaves the catalog unchanged, so the notebook is always sorted and
//! duplicate-free. The tree is deliberately unbalanced; with a handful of
//! clues per game there is nothing to balance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }

    fn insert(&mut self, clue: &str) {
        match clue.cmp(&self.clue) {
            std::cmp::Ordering::Less => match self.left {
                Some(ref mut left) => left.insert(clue),
                None => self.left = Some(Box::new(ClueNode::new(clue))),
            },
            std::cmp::Ordering::Greater => match self.right {
                Some(ref mut right) => right.insert(clue),
                None => self.right = Some(Box::new(ClueNode::new(clue))),
            },
            // Already cataloged, nothing to do.
            std::cmp::Ordering::Equal => {}
        }
    }

    fn visit_in_order(&self, visit: &mut dyn FnMut(&str)) {
        if let Some(ref left) = self.left {
            left.visit_in_order(visit);
        }
        visit(&self.clue);
        if let Some(ref right) = self.right {
            right.visit_in_order(visit);
        }
    }
}

/// The collected-clue catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueCatalog {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog a clue. Re-inserting a clue that is already present is a
    /// no-op.
    pub fn insert(&mut self, clue: &str) {
        if self.contains_inner(clue) {
            return;
        }
        self.len += 1;
        match self.root {
            Some(ref mut root) => root.insert(clue),
            None => self.root = Some(Box::new(ClueNode::new(clue))),
        }
    }

    pub fn contains(&self, clue: &str) -> bool {
        self.contains_inner(clue)
    }

    fn contains_inner(&self, clue: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match clue.cmp(&n.clue) {
                std::cmp::Ordering::Less => n.left.as_deref(),
                std::cmp::Ordering::Greater => n.right.as_deref(),
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues cataloged.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walk the catalog in ascending lexicographic order.
    pub fn for_each_in_order(&self, mut visit: impl FnMut(&str)) {
        if let Some(ref root) = self.root {
            root.visit_in_order(&mut visit);
        }
    }

    /// The clues in ascending lexicographic order.
    pub fn sorted_clues(&self) -> Vec<String> {
        let mut clues = Vec::with_capacity(self.len);
        self.for_each_in_order(|clue| clues.push(clue.to_string()));
        clues
    }
}
