//! probemap: a single-threaded, open-addressing map from string keys to
//! unsigned integers, probed through one table-wide randomized offset
//! sequence, with tombstone deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the collision-resolution and slot-lifecycle logic small
//!   enough that each piece can be reasoned about independently.
//! - Layers:
//!   - Slot: a tri-state cell (never used, occupied, tombstoned) holding
//!     at most one key/value pair. Deleted slots stay distinguishable
//!     from never-used slots so probing does not stop early.
//!   - ProbeSequence: a permutation of `0..capacity` with the first
//!     offset pinned to zero, generated once per capacity and shared by
//!     every key. Attempt `i` for a key hashing to `h` lands on
//!     `(h % capacity + offsets[i]) % capacity`, so any key's candidate
//!     walk covers every slot exactly once.
//!   - ProbeMap: the public table. Owns the slot array, the offset
//!     permutation, a per-instance `RandomState` hasher, and the live
//!     count; implements insert/lookup/remove/resize on top of the
//!     layers below.
//!
//! Constraints
//! - Single-threaded, synchronous, non-reentrant; no internal locking.
//! - Load factor is held strictly below 0.5 after every public
//!   operation: insert doubles capacity the moment it reaches 0.5.
//! - A tombstoned slot never reverts to never-used; it is only reclaimed
//!   by a later insert landing on it.
//! - Capacity is always positive; zero is rejected at construction.
//!
//! Probing policy
//! - Lookup scans the full candidate sequence and exits early only on a
//!   key match. A never-used slot along the way does not prove absence,
//!   because tombstones elsewhere in the sequence may separate the true
//!   location. Stopping at the first never-used slot would be a
//!   correctness regression, not an optimization.
//!
//! Resize semantics
//! - Growth builds a complete replacement table (fresh permutation,
//!   rehashed keys), reinserts every live pair through ordinary insert,
//!   drops tombstones, and then replaces the whole table by move. The
//!   caller never observes a half-migrated table.
//!
//! Notes and non-goals
//! - No iteration-order guarantee beyond slot-array order.
//! - No shrink on delete; removal only ever plants tombstones.
//! - No hasher pluggability and no external seed API; the offset
//!   permutation takes its randomness from `rand::rng()` and stays fixed
//!   for the lifetime of a capacity.
//! - Recoverable outcomes (absent key, duplicate key) are plain values;
//!   probe exhaustion during insert means the slot bookkeeping is
//!   corrupt and panics.

mod probe;
mod probe_map;
mod probe_map_proptest;
mod slot;

// Public surface
pub use probe_map::ProbeMap;
