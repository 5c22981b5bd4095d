//! Operation surface shared by both collision strategies.

use crate::error::TableError;

/// What a successful `put` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    /// A new entry was created at `index`. `collisions` counts the entries
    /// passed on the way: chain length before the append, or probe steps
    /// before the insertion slot.
    Inserted { index: usize, collisions: usize },
    /// An existing entry at `index` had its value replaced in place.
    Updated { index: usize },
}

impl PutOutcome {
    pub fn index(&self) -> usize {
        match *self {
            PutOutcome::Inserted { index, .. } | PutOutcome::Updated { index } => index,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, PutOutcome::Updated { .. })
    }
}

/// A fixed-capacity `&str -> i32` table.
///
/// Both variants keep their own `get` shape (`Option` for chaining,
/// `Result` for probing); `lookup` folds either into an `Option` so callers
/// can treat absence uniformly.
pub trait CollisionTable {
    fn put(&mut self, key: &str, value: i32) -> Result<PutOutcome, TableError>;

    fn lookup(&self, key: &str) -> Option<i32>;

    fn remove(&mut self, key: &str) -> bool;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `len / capacity`; counts entries, not occupied buckets.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors() {
        let ins = PutOutcome::Inserted {
            index: 4,
            collisions: 2,
        };
        let upd = PutOutcome::Updated { index: 1 };
        assert_eq!(ins.index(), 4);
        assert_eq!(upd.index(), 1);
        assert!(!ins.is_update());
        assert!(upd.is_update());
    }
}
