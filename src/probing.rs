//! ProbingTable: open addressing with linear probing and tombstones.
//!
//! All entries live in one flat slot array. A key is searched from its home
//! index forward, wrapping at the end, until it is found, an `Empty` slot
//! proves it absent, or the whole ring has been visited. Removal leaves a
//! `Tombstone` so that keys placed further along the same probe sequence
//! stay reachable; tombstones are reused by later inserts.

use crate::error::TableError;
use crate::index_hasher::{IndexHasher, DEFAULT_CAPACITY};
use crate::observer::{NoopObserver, TableEvent, TableObserver};
use crate::table::{CollisionTable, PutOutcome};
use core::fmt;
use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;
use log::warn;

/// State of one slot in the probe ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Never used. Ends every search.
    Empty,
    Occupied { key: String, value: i32 },
    /// Previously occupied. Skipped by searches, reusable by inserts.
    Tombstone,
}

pub struct ProbingTable<S = DefaultHashBuilder, O = NoopObserver> {
    hasher: IndexHasher<S>,
    slots: Vec<Slot>,
    len: usize, // live (Occupied) slots
    observer: O,
}

impl ProbingTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl Default for ProbingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ProbingTable<S>
where
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            hasher: IndexHasher::with_hasher(capacity, hasher),
            slots: vec![Slot::Empty; capacity],
            len: 0,
            observer: NoopObserver,
        }
    }
}

impl<S, O> ProbingTable<S, O>
where
    S: BuildHasher,
    O: TableObserver,
{
    /// Replace the observer, keeping the contents.
    pub fn with_observer<P: TableObserver>(self, observer: P) -> ProbingTable<S, P> {
        ProbingTable {
            hasher: self.hasher,
            slots: self.slots,
            len: self.len,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.hasher.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Number of tombstoned slots.
    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone))
            .count()
    }

    /// Index and value of the live slot holding `key`.
    fn find(&self, key: &str) -> Option<(usize, i32)> {
        let start = self.hasher.index(key);
        for offset in 0..self.capacity() {
            let i = self.hasher.probe(start, offset);
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, value } if k.as_str() == key => {
                    return Some((i, *value));
                }
                Slot::Occupied { .. } | Slot::Tombstone => {}
            }
        }
        None
    }

    /// Insert or update.
    ///
    /// The probe runs until the key is found or an `Empty` slot is reached,
    /// so a key sitting past a tombstone is updated rather than duplicated.
    /// The new entry goes into the first `Tombstone` or `Empty` seen.
    /// Updating an existing key succeeds even when the table is full; a new
    /// key is rejected with `TableFull` once `len == capacity`.
    pub fn put(&mut self, key: &str, value: i32) -> Result<PutOutcome, TableError> {
        let start = self.hasher.index(key);
        let mut vacancy: Option<(usize, usize)> = None; // (index, probes)

        for offset in 0..self.capacity() {
            let i = self.hasher.probe(start, offset);
            match &mut self.slots[i] {
                Slot::Occupied { key: k, value: v } if k.as_str() == key => {
                    *v = value;
                    self.observer
                        .on_event(&TableEvent::Updated { key, index: i });
                    return Ok(PutOutcome::Updated { index: i });
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    vacancy.get_or_insert((i, offset));
                }
                Slot::Empty => {
                    vacancy.get_or_insert((i, offset));
                    break;
                }
            }
        }

        let capacity = self.capacity();
        if self.len >= capacity {
            return Err(self.reject(key));
        }
        let Some((index, probes)) = vacancy else {
            warn!(
                "probe for '{}' wrapped around {} slots without a usable slot ({} live)",
                key, capacity, self.len
            );
            return Err(self.reject(key));
        };

        self.slots[index] = Slot::Occupied {
            key: key.to_owned(),
            value,
        };
        self.len += 1;
        self.observer.on_event(&TableEvent::Probed {
            key,
            index,
            probes,
        });
        Ok(PutOutcome::Inserted {
            index,
            collisions: probes,
        })
    }

    fn reject(&mut self, key: &str) -> TableError {
        let capacity = self.capacity();
        self.observer
            .on_event(&TableEvent::Rejected { key, capacity });
        TableError::full(key, capacity)
    }

    pub fn get(&self, key: &str) -> Result<i32, TableError> {
        self.find(key)
            .map(|(_, value)| value)
            .ok_or_else(|| TableError::not_found(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Tombstone the slot holding `key`. Returns false when absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some((index, _)) = self.find(key) else {
            self.observer.on_event(&TableEvent::Missing { key });
            return false;
        };
        self.slots[index] = Slot::Tombstone;
        self.len -= 1;
        self.observer.on_event(&TableEvent::Removed { key, index });
        true
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.slots.iter().filter_map(|s| match s {
            Slot::Occupied { key, value } => Some((key.as_str(), *value)),
            Slot::Empty | Slot::Tombstone => None,
        })
    }

    /// Snapshot of every slot plus size and load factor.
    pub fn display(&self) -> ProbingSnapshot {
        ProbingSnapshot {
            slots: self.slots.clone(),
            len: self.len,
            capacity: self.capacity(),
        }
    }
}

impl<S, O> CollisionTable for ProbingTable<S, O>
where
    S: BuildHasher,
    O: TableObserver,
{
    fn put(&mut self, key: &str, value: i32) -> Result<PutOutcome, TableError> {
        ProbingTable::put(self, key, value)
    }

    fn lookup(&self, key: &str) -> Option<i32> {
        self.get(key).ok()
    }

    fn remove(&mut self, key: &str) -> bool {
        ProbingTable::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        ProbingTable::capacity(self)
    }
}

/// Point-in-time contents of a `ProbingTable`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbingSnapshot {
    pub slots: Vec<Slot>,
    pub len: usize,
    pub capacity: usize,
}

impl ProbingSnapshot {
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}

impl fmt::Display for ProbingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "Index {}: [empty]", i)?,
                Slot::Tombstone => writeln!(f, "Index {}: [deleted]", i)?,
                Slot::Occupied { key, value } => {
                    writeln!(f, "Index {}: {} -> {}", i, key, value)?
                }
            }
        }
        writeln!(f, "Total items: {}", self.len)?;
        write!(f, "Load factor: {:.2}", self.load_factor())
    }
}
