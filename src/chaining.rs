//! ChainingTable: separate chaining over an index-based arena.
//!
//! Each bucket stores the arena key of its chain head; each entry stores the
//! arena key of its successor. Appends go to the tail, so a chain keeps
//! insertion order; updates rewrite the value where the entry already sits.
//! Removal splices the entry out of its chain and frees its arena slot.

use crate::error::TableError;
use crate::index_hasher::{IndexHasher, DEFAULT_CAPACITY};
use crate::observer::{NoopObserver, TableEvent, TableObserver};
use crate::table::{CollisionTable, PutOutcome};
use core::fmt;
use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry {
    key: String,
    value: i32,
    next: Option<DefaultKey>,
}

pub struct ChainingTable<S = DefaultHashBuilder, O = NoopObserver> {
    hasher: IndexHasher<S>,
    buckets: Vec<Option<DefaultKey>>, // chain heads
    entries: SlotMap<DefaultKey, Entry>,
    observer: O,
}

impl ChainingTable {
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

impl Default for ChainingTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks one chain from a head key.
struct Chain<'a> {
    entries: &'a SlotMap<DefaultKey, Entry>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.entries.get(self.cursor?)?;
        self.cursor = e.next;
        Some(e)
    }
}

/// Iterator over live entries in bucket order, chain order within a bucket.
pub struct Iter<'a> {
    heads: core::slice::Iter<'a, Option<DefaultKey>>,
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i32);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                return Some((e.key.as_str(), e.value));
            }
            self.chain.cursor = *self.heads.next()?;
        }
    }
}

impl<S> ChainingTable<S>
where
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            hasher: IndexHasher::with_hasher(capacity, hasher),
            buckets: vec![None; capacity],
            entries: SlotMap::with_key(),
            observer: NoopObserver,
        }
    }
}

impl<S, O> ChainingTable<S, O>
where
    S: BuildHasher,
    O: TableObserver,
{
    /// Replace the observer, keeping the contents.
    pub fn with_observer<P: TableObserver>(self, observer: P) -> ChainingTable<S, P> {
        ChainingTable {
            hasher: self.hasher,
            buckets: self.buckets,
            entries: self.entries,
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
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.hasher.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    fn chain(&self, index: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets[index],
        }
    }

    /// Insert or update. Chaining never runs out of room, so this always
    /// succeeds.
    pub fn put(&mut self, key: &str, value: i32) -> PutOutcome {
        let index = self.hasher.index(key);

        let Some(head) = self.buckets[index] else {
            let k = self.entries.insert(Entry {
                key: key.to_owned(),
                value,
                next: None,
            });
            self.buckets[index] = Some(k);
            self.observer.on_event(&TableEvent::Inserted { key, index });
            return PutOutcome::Inserted {
                index,
                collisions: 0,
            };
        };

        let mut tail = head;
        let mut depth = 0;
        loop {
            let e = &mut self.entries[tail];
            if e.key == key {
                e.value = value;
                self.observer.on_event(&TableEvent::Updated { key, index });
                return PutOutcome::Updated { index };
            }
            depth += 1;
            match e.next {
                Some(next) => tail = next,
                None => break,
            }
        }

        let k = self.entries.insert(Entry {
            key: key.to_owned(),
            value,
            next: None,
        });
        self.entries[tail].next = Some(k);
        self.observer
            .on_event(&TableEvent::Chained { key, index, depth });
        PutOutcome::Inserted {
            index,
            collisions: depth,
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        let index = self.hasher.index(key);
        self.chain(index).find(|e| e.key == key).map(|e| e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.hasher.index(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[index];

        while let Some(k) = cursor {
            let e = &self.entries[k];
            if e.key != key {
                prev = Some(k);
                cursor = e.next;
                continue;
            }

            let next = e.next;
            match prev {
                None => self.buckets[index] = next,
                Some(p) => self.entries[p].next = next,
            }
            self.entries.remove(k);
            self.observer.on_event(&TableEvent::Removed { key, index });
            return true;
        }

        self.observer.on_event(&TableEvent::Missing { key });
        false
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            heads: self.buckets.iter(),
            chain: Chain {
                entries: &self.entries,
                cursor: None,
            },
        }
    }

    /// Snapshot of every bucket's chain plus size and load factor.
    pub fn display(&self) -> ChainingSnapshot {
        let buckets = (0..self.capacity())
            .map(|i| {
                self.chain(i)
                    .map(|e| (e.key.clone(), e.value))
                    .collect()
            })
            .collect();
        ChainingSnapshot {
            buckets,
            len: self.len(),
            capacity: self.capacity(),
        }
    }
}

impl<S, O> CollisionTable for ChainingTable<S, O>
where
    S: BuildHasher,
    O: TableObserver,
{
    fn put(&mut self, key: &str, value: i32) -> Result<PutOutcome, TableError> {
        Ok(ChainingTable::put(self, key, value))
    }

    fn lookup(&self, key: &str) -> Option<i32> {
        self.get(key)
    }

    fn remove(&mut self, key: &str) -> bool {
        ChainingTable::remove(self, key)
    }

    fn len(&self) -> usize {
        ChainingTable::len(self)
    }

    fn capacity(&self) -> usize {
        ChainingTable::capacity(self)
    }
}

/// Point-in-time contents of a `ChainingTable`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainingSnapshot {
    /// One chain per bucket index, head first. Empty vec for an empty bucket.
    pub buckets: Vec<Vec<(String, i32)>>,
    pub len: usize,
    pub capacity: usize,
}

impl ChainingSnapshot {
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity as f64
    }
}

impl fmt::Display for ChainingSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {}: ", i)?;
            if chain.is_empty() {
                writeln!(f, "Empty")?;
                continue;
            }
            for (n, (k, v)) in chain.iter().enumerate() {
                if n > 0 {
                    f.write_str(" -> ")?;
                }
                write!(f, "({}: {})", k, v)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Total items: {}", self.len)?;
        write!(f, "Load factor: {:.2}", self.load_factor())
    }
}
