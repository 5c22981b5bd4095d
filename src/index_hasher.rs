//! IndexHasher: reduces a string hash to a bucket index in `[0, capacity)`.

use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Capacity used by `new()` and `Default` on both tables.
pub const DEFAULT_CAPACITY: usize = 10;

/// Maps keys to bucket indices for a fixed capacity.
///
/// The hash comes from a `BuildHasher` (hashbrown's default unless the
/// caller supplies one). The builder is created once per table, so the index
/// of a key is stable for the lifetime of that table but not across tables
/// or processes.
#[derive(Clone, Debug)]
pub struct IndexHasher<S = DefaultHashBuilder> {
    build_hasher: S,
    capacity: usize,
}

impl IndexHasher {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<S> IndexHasher<S>
where
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, build_hasher: S) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            build_hasher,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Home index of `key`. The hash is unsigned, so no sign fix-up is needed
    /// before the modulo.
    #[inline]
    pub fn index(&self, key: &str) -> usize {
        (self.build_hasher.hash_one(key) % self.capacity as u64) as usize
    }

    /// Index `offset` steps along the linear probe sequence starting at `start`.
    #[inline]
    pub(crate) fn probe(&self, start: usize, offset: usize) -> usize {
        (start + offset) % self.capacity
    }
}
