//! Slot: the tri-state cell the table's flat array is made of.

/// One cell of the slot array.
///
/// The three states matter to probing in different ways: `NeverUsed` and
/// `Tombstoned` both accept a new pair (`is_empty`), but only `Tombstoned`
/// records that a key once lived here, so lookups keep walking past it.
/// Nothing ever transitions back to `NeverUsed` short of reallocating the
/// whole array at a new capacity.
#[derive(Debug, Default, Clone)]
pub(crate) enum Slot {
    #[default]
    NeverUsed,
    Occupied { key: String, value: u64 },
    Tombstoned,
}

impl Slot {
    /// Place a pair in this slot, overwriting any prior payload.
    ///
    /// Valid from every state: fresh inserts land on `NeverUsed`,
    /// reclamation lands on `Tombstoned`, and resize reinsertion or an
    /// in-place overwrite lands on `Occupied`.
    pub(crate) fn load(&mut self, key: String, value: u64) {
        *self = Slot::Occupied { key, value };
    }

    /// Drop the payload and leave a tombstone behind.
    ///
    /// The caller has already confirmed occupancy via a key match.
    pub(crate) fn kill(&mut self) {
        debug_assert!(!self.is_empty(), "kill() on a slot with no payload");
        *self = Slot::Tombstoned;
    }

    /// True when a new key may land here. Not a license for lookups to
    /// stop probing: a `Tombstoned` slot is empty but still opaque.
    pub(crate) fn is_empty(&self) -> bool {
        !matches!(self, Slot::Occupied { .. })
    }

    pub(crate) fn key(&self) -> Option<&str> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn value(&self) -> Option<u64> {
        match self {
            Slot::Occupied { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut u64> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }
}
