//! ProbeMap: the table layer atop Slot and ProbeSequence.

use crate::probe::ProbeSequence;
use crate::slot::Slot;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;

const DEFAULT_CAPACITY: usize = 8;

/// An open-addressing map from `String` keys to `u64` values.
///
/// All entries live directly in one flat slot array; collisions are
/// resolved by walking a table-wide randomized offset permutation.
/// Removal plants tombstones, insert reaching load factor 0.5 doubles
/// the capacity, and the load factor therefore stays strictly below 0.5
/// after every public operation.
#[derive(Debug)]
pub struct ProbeMap {
    slots: Vec<Slot>,
    probe: ProbeSequence,
    hasher: RandomState,
    live: usize,
}

impl ProbeMap {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with `capacity` slots and a fresh offset
    /// permutation. `capacity` must be positive.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        ProbeMap {
            slots: vec![Slot::default(); capacity],
            probe: ProbeSequence::generate(capacity, &mut rand::rng()),
            hasher: RandomState::new(),
            live: 0,
        }
    }

    fn hash(&self, key: &str) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Slot index currently holding `key`, if any.
    ///
    /// Scans the full candidate sequence and exits early only on a key
    /// match. A never-used slot along the way does not prove absence:
    /// tombstones elsewhere in the sequence may separate the true
    /// location, so stopping there would lose reachable entries.
    fn find_slot(&self, key: &str) -> Option<usize> {
        let hash = self.hash(key);
        for attempt in 0..self.capacity() {
            let idx = self.probe.slot(hash, attempt);
            if self.slots[idx].key() == Some(key) {
                return Some(idx);
            }
        }
        None
    }

    /// Insert a new pair. Returns false without touching the table when
    /// the key is already present; overwrites go through [`value_mut`].
    ///
    /// Grows to twice the capacity when the insert brings the load
    /// factor to 0.5, so the bound `load_factor() < 0.5` holds again by
    /// the time this returns.
    ///
    /// [`value_mut`]: ProbeMap::value_mut
    pub fn insert(&mut self, key: String, value: u64) -> bool {
        if self.contains(&key) {
            return false;
        }
        let hash = self.hash(&key);
        let mut placed = false;
        for attempt in 0..self.capacity() {
            let idx = self.probe.slot(hash, attempt);
            if self.slots[idx].is_empty() {
                self.slots[idx].load(key, value);
                self.live += 1;
                placed = true;
                break;
            }
        }
        if !placed {
            // Unreachable while the load factor bound holds; a full walk
            // finding no empty slot means the bookkeeping is corrupt.
            panic!(
                "probe sequence exhausted at load factor {}",
                self.load_factor()
            );
        }
        if self.load_factor() >= 0.5 {
            self.resize(self.capacity() * 2);
        }
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find_slot(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.find_slot(key).and_then(|idx| self.slots[idx].value())
    }

    /// Remove `key`, leaving a tombstone in its slot. Returns false when
    /// the key is absent. Never shrinks the table.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.find_slot(key) {
            Some(idx) => {
                self.slots[idx].kill();
                self.live -= 1;
                true
            }
            None => false,
        }
    }

    /// Mutable access to the value for `key`, inserting 0 first when the
    /// key is absent. The borrow ends before any later structural
    /// mutation can move the entry.
    pub fn value_mut(&mut self, key: &str) -> &mut u64 {
        if !self.contains(key) {
            let inserted = self.insert(key.to_owned(), 0);
            debug_assert!(inserted);
        }
        let idx = match self.find_slot(key) {
            Some(idx) => idx,
            None => unreachable!("key was inserted just above"),
        };
        match self.slots[idx].value_mut() {
            Some(value) => value,
            None => unreachable!("find_slot only returns occupied slots"),
        }
    }

    /// All live keys, in slot-array order. Not insertion order, not
    /// sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.slots.iter().filter_map(Slot::key).collect()
    }

    pub fn load_factor(&self) -> f64 {
        self.live as f64 / self.capacity() as f64
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Rebuild the table at `new_capacity`: fresh offset permutation,
    /// every live pair reinserted through ordinary insert (which may
    /// itself grow again if `new_capacity` is too tight), tombstones
    /// dropped. The replacement is built completely and then swapped in
    /// by move, so the table is never observed half-migrated.
    pub fn resize(&mut self, new_capacity: usize) {
        let mut next = ProbeMap::with_capacity(new_capacity);
        for slot in self.slots.drain(..) {
            if let Slot::Occupied { key, value } = slot {
                let inserted = next.insert(key, value);
                debug_assert!(inserted, "live entries are unique by construction");
            }
        }
        *self = next;
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let occupied = self.slots.iter().filter(|s| !s.is_empty()).count();
        assert_eq!(self.live, occupied, "live count drifted from occupied slots");
        assert_eq!(self.slots.len(), self.probe.capacity());
        assert!(
            self.live * 2 < self.capacity(),
            "load factor bound violated: {} live in {} slots",
            self.live,
            self.capacity()
        );
        let offsets = self.probe.offsets();
        assert_eq!(offsets[0], 0);
        let distinct: std::collections::BTreeSet<usize> = offsets.iter().copied().collect();
        assert_eq!(distinct.len(), offsets.len(), "offsets are not a permutation");
    }
}

impl Default for ProbeMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug text rendering: one `Key: <key> -- Value: <value>` line per
/// occupied slot, in slot-array order, empty slots omitted.
impl fmt::Display for ProbeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            if let Slot::Occupied { key, value } = slot {
                writeln!(f, "Key: {} -- Value: {}", key, value)?;
            }
        }
        Ok(())
    }
}
