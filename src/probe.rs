//! ProbeSequence: the per-capacity randomized offset permutation.

use rand::seq::SliceRandom;
use rand::Rng;

/// A permutation of `0..capacity` with the first offset pinned to zero,
/// shared by every key for the lifetime of one capacity.
///
/// Pinning `offsets[0]` keeps the first candidate for any key at its raw
/// hash bucket; the shuffled tail makes the rest of the walk differ from
/// plain linear or quadratic probing while still covering every slot
/// exactly once, so a full walk always terminates and never skips a slot.
#[derive(Debug)]
pub(crate) struct ProbeSequence {
    offsets: Vec<usize>,
}

impl ProbeSequence {
    /// Generate the permutation for `capacity` slots. The randomness
    /// source is injected so tests can seed it; it is consulted once here
    /// and never again for this capacity.
    pub(crate) fn generate<R: Rng + ?Sized>(capacity: usize, rng: &mut R) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        let mut offsets: Vec<usize> = (0..capacity).collect();
        offsets[1..].shuffle(rng);
        ProbeSequence { offsets }
    }

    /// Candidate slot index for a key hashing to `hash`, at `attempt` in
    /// `0..capacity`.
    pub(crate) fn slot(&self, hash: u64, attempt: usize) -> usize {
        let capacity = self.offsets.len();
        ((hash % capacity as u64) as usize + self.offsets[attempt]) % capacity
    }

    pub(crate) fn capacity(&self) -> usize {
        self.offsets.len()
    }

    #[cfg(test)]
    pub(crate) fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}
