use crate::arena::Entry;

/// A skiplist node. `next[k]` is the successor at level `k`.
///
/// A node without a value is a sentinel: the head before every level and the terminal node after
/// every level are both sentinels, so the end of a level is a node rather than a missing link.
pub struct Node<T> {
    pub value: Option<T>,
    pub next: Vec<Entry>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value: Some(value),
            next: Vec::new(),
        }
    }

    pub fn sentinel() -> Self {
        Node {
            value: None,
            next: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.next.len()
    }

    /// Returns the successor at `level`.
    ///
    /// # Panics
    ///
    /// Panics if the node does not participate in `level`.
    pub fn get_pointer(&self, level: usize) -> Entry {
        assert!(
            level < self.next.len(),
            "level {} is out of bounds for a node of height {}",
            level,
            self.next.len(),
        );
        self.next[level]
    }
}
