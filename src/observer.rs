//! Mutation side channel for both tables.
//!
//! Tables report every state transition (insert, update, remove, miss,
//! rejection) to a `TableObserver`. The default `NoopObserver` compiles
//! away; `LogObserver` forwards events to the `log` facade. The `Display`
//! impl on `TableEvent` renders the narration line the demo prints.

use core::fmt;
use log::{debug, warn};

/// One observable transition of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent<'a> {
    /// New key stored in an empty bucket (chaining).
    Inserted { key: &'a str, index: usize },
    /// New key appended behind `depth` existing entries of a chain.
    Chained {
        key: &'a str,
        index: usize,
        depth: usize,
    },
    /// New key stored after `probes` steps along the probe sequence.
    Probed {
        key: &'a str,
        index: usize,
        probes: usize,
    },
    Updated { key: &'a str, index: usize },
    Removed { key: &'a str, index: usize },
    /// `remove` did not find the key.
    Missing { key: &'a str },
    /// `put` of a new key refused because the table has no usable slot.
    Rejected { key: &'a str, capacity: usize },
}

impl<'a> TableEvent<'a> {
    pub fn key(&self) -> &'a str {
        match *self {
            TableEvent::Inserted { key, .. }
            | TableEvent::Chained { key, .. }
            | TableEvent::Probed { key, .. }
            | TableEvent::Updated { key, .. }
            | TableEvent::Removed { key, .. }
            | TableEvent::Missing { key }
            | TableEvent::Rejected { key, .. } => key,
        }
    }
}

impl fmt::Display for TableEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::Inserted { key, index } => {
                write!(f, "Stored '{}' at index {}", key, index)
            }
            TableEvent::Chained { key, index, .. } => {
                write!(f, "Stored '{}' at index {} (added to chain)", key, index)
            }
            TableEvent::Probed { key, index, probes } => write!(
                f,
                "Stored '{}' at index {} (probed {} times)",
                key, index, probes
            ),
            TableEvent::Updated { key, index } => {
                write!(f, "Updated '{}' at index {}", key, index)
            }
            TableEvent::Removed { key, index } => {
                write!(f, "Removed '{}' from index {}", key, index)
            }
            TableEvent::Missing { key } => write!(f, "Key '{}' not found", key),
            TableEvent::Rejected { key, .. } => {
                write!(f, "Table is full, cannot insert '{}'", key)
            }
        }
    }
}

/// Receives table events. Invoked after the table is consistent again.
pub trait TableObserver {
    fn on_event(&mut self, event: &TableEvent<'_>);
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TableObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: &TableEvent<'_>) {}
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl TableObserver for LogObserver {
    fn on_event(&mut self, event: &TableEvent<'_>) {
        match event {
            TableEvent::Rejected { capacity, .. } => {
                warn!("{} (capacity {})", event, capacity)
            }
            _ => debug!("{}", event),
        }
    }
}

impl<O> TableObserver for &mut O
where
    O: TableObserver + ?Sized,
{
    #[inline]
    fn on_event(&mut self, event: &TableEvent<'_>) {
        (**self).on_event(event)
    }
}
