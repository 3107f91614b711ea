use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of catalog slots
///
/// Records which pieces are currently on the board. Every rotation of a piece
/// reads the same bit, so placing one rotation hides all four.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceBitset {
    bits: BitVec,
}

impl PieceBitset {
    /// Create a bitset with no slots present
    pub fn new(slots: usize) -> Self {
        Self {
            bits: bitvec![0; slots],
        }
    }

    /// Number of slots the bitset can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Add a slot, returning whether it was absent
    ///
    /// Out-of-range slots are ignored and reported as not inserted
    pub fn insert(&mut self, slot: usize) -> bool {
        if let Some(mut bit) = self.bits.get_mut(slot) {
            if !*bit {
                bit.set(true);
                return true;
            }
        }
        false
    }

    /// Remove a slot, returning whether it was present
    pub fn remove(&mut self, slot: usize) -> bool {
        if let Some(mut bit) = self.bits.get_mut(slot) {
            if *bit {
                bit.set(false);
                return true;
            }
        }
        false
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Test if no slots are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count slots in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all present slots in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for PieceBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceBitset({} placed: {:?})", self.count(), self.to_vec())
    }
}
