//! Error taxonomy shared by both table variants.

use thiserror::Error;

/// Recoverable failures reported by [`ProbingTable`](crate::ProbingTable).
///
/// [`ChainingTable`](crate::ChainingTable) never fails: it represents a miss
/// as `None` and always has room for another key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    #[error("table is full ({capacity} slots), cannot insert '{key}'")]
    TableFull { key: String, capacity: usize },
}

impl TableError {
    pub(crate) fn not_found(key: &str) -> Self {
        TableError::KeyNotFound(key.to_owned())
    }

    pub(crate) fn full(key: &str, capacity: usize) -> Self {
        TableError::TableFull {
            key: key.to_owned(),
            capacity,
        }
    }
}
