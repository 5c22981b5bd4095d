//! collision-tables: two fixed-capacity `&str -> i32` hash tables that
//! differ only in how they resolve collisions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: put separate chaining and linear probing side by side behind the
//!   same operations so their insertion, lookup and deletion rules can be
//!   compared directly.
//! - Layers:
//!   - IndexHasher<S>: reduces a `BuildHasher` hash of the key to a home
//!     index in `[0, capacity)`. Shared leaf; knows nothing about storage.
//!   - ChainingTable<S, O>: one chain per bucket, chains stored in a
//!     `SlotMap` arena and linked by arena keys.
//!   - ProbingTable<S, O>: one flat ring of `Slot`s (`Empty`, `Occupied`,
//!     `Tombstone`), searched forward with wraparound.
//!   - CollisionTable: trait over both for code that does not care which
//!     strategy it holds.
//!
//! Constraints
//! - Fixed capacity: no resizing or rehashing, ever.
//! - Single-threaded, single-owner; all mutation goes through `&mut self`.
//! - Unique keys: at most one live entry per key across the whole table.
//! - `len()` always equals the number of live entries reachable by the
//!   table's traversal rule.
//!
//! Chaining
//! - Never full: a new key is appended to the tail of its bucket's chain.
//!   Load factor may exceed 1.
//! - Update rewrites the value where the entry sits; chain order is
//!   insertion order.
//! - Removal unlinks the entry (head or interior) and frees its arena slot.
//!
//! Probing
//! - Search stops at a matching `Occupied` slot, at an `Empty` slot (proof
//!   of absence), or after one full wrap. `Tombstone` never stops a search.
//! - Insert probes to the key or to the first `Empty`, remembering the first
//!   `Tombstone`/`Empty` as the insertion point; this keeps keys unique even
//!   when the key sits past a tombstone.
//! - A new key is rejected with `TableError::TableFull` once
//!   `len == capacity`; updates of existing keys are still accepted.
//! - Removal turns the slot into a `Tombstone`, never back into `Empty`.
//!
//! Lookup shape
//! - `ChainingTable::get` returns `Option<i32>`; `ProbingTable::get` returns
//!   `Result<i32, TableError>` with `KeyNotFound`. `CollisionTable::lookup`
//!   folds both into `Option<i32>`.
//!
//! Observation
//! - Every mutation (insert, update, remove, miss, reject) is reported to a
//!   `TableObserver`. The default `NoopObserver` does nothing;
//!   `LogObserver` forwards to `log`. Lookups are silent.
//!
//! Hashing
//! - The default builder is hashbrown's `DefaultHashBuilder`, seeded per
//!   table. Indices are stable for one table but not across tables or runs;
//!   nothing may depend on which bucket a key lands in. Tests that need a
//!   known layout pass a constant `BuildHasher`.

pub mod chaining;
pub mod error;
pub mod index_hasher;
pub mod logger;
pub mod observer;
pub mod probing;
pub mod table;

#[cfg(test)]
mod table_proptest;

// Public surface
pub use chaining::{ChainingSnapshot, ChainingTable};
pub use error::TableError;
pub use index_hasher::{IndexHasher, DEFAULT_CAPACITY};
pub use observer::{LogObserver, NoopObserver, TableEvent, TableObserver};
pub use probing::{ProbingSnapshot, ProbingTable, Slot};
pub use table::{CollisionTable, PutOutcome};
