//! Placement index keyed by partial edge constraints
//!
//! Every rotation of every piece is registered under the key of each subset
//! of its four edges. A cell whose known restrictions pack to key `k` can
//! therefore read its candidates straight from bucket `k`.
//!
//! Each bucket keeps a running count of placements whose piece is still off
//! the board. Pieces remember which buckets they appear in, and how many times,
//! so placing or removing a piece adjusts only those buckets.

use crate::algorithm::bitset::PieceBitset;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::edges::ConstraintKey;
use crate::spatial::pieces::{PieceCatalog, Placement};
use std::collections::{HashMap, HashSet};

/// Number of edge subsets registered per placement (the power set of four edges)
pub const SUBSETS_PER_PLACEMENT: u8 = 16;

/// Candidates sharing one constraint key
#[derive(Debug, Clone, Default)]
struct Bucket {
    /// Placement handles in registration order
    placements: Vec<usize>,
    /// Placements whose piece is not on the board
    available: usize,
}

/// Back-reference from a piece to a bucket it populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BucketRef {
    bucket: usize,
    /// How many of the piece's rotations sit in that bucket
    repetitions: usize,
}

/// Lookup structure from constraint keys to compatible placements
#[derive(Debug, Clone)]
pub struct PlacementIndex {
    placements: Vec<Placement>,
    buckets: Vec<Bucket>,
    bucket_by_key: HashMap<ConstraintKey, usize>,
    piece_buckets: Vec<Vec<BucketRef>>,
    placed: PieceBitset,
}

impl PlacementIndex {
    /// Register every rotation of every catalog piece under all its subset keys
    pub fn build(catalog: &PieceCatalog) -> Self {
        let mut placements = Vec::with_capacity(catalog.len() * 4);
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut bucket_by_key = HashMap::new();
        let mut piece_buckets = Vec::with_capacity(catalog.len());

        for (slot, piece) in catalog.pieces().iter().enumerate() {
            let mut touched: Vec<BucketRef> = Vec::new();

            for placement in piece.rotations(slot) {
                let handle = placements.len();
                let edges = placement.edges();
                placements.push(placement);

                for mask in 0..SUBSETS_PER_PLACEMENT {
                    let key = edges.subset(mask).key();
                    let bucket_id = *bucket_by_key.entry(key).or_insert_with(|| {
                        buckets.push(Bucket::default());
                        buckets.len() - 1
                    });

                    if let Some(bucket) = buckets.get_mut(bucket_id) {
                        bucket.placements.push(handle);
                        bucket.available += 1;
                    }

                    match touched.iter_mut().find(|r| r.bucket == bucket_id) {
                        Some(existing) => existing.repetitions += 1,
                        None => touched.push(BucketRef {
                            bucket: bucket_id,
                            repetitions: 1,
                        }),
                    }
                }
            }

            piece_buckets.push(touched);
        }

        Self {
            placements,
            buckets,
            bucket_by_key,
            piece_buckets,
            placed: PieceBitset::new(catalog.len()),
        }
    }

    /// Number of available placements matching `key`, in constant time
    pub fn available(&self, key: ConstraintKey) -> usize {
        self.bucket(key).map_or(0, |bucket| bucket.available)
    }

    /// Available placements matching `key`, without duplicates
    ///
    /// Placements of pieces already on the board are skipped, as are
    /// placements presenting the same four edges as an earlier one. Order
    /// follows registration order, which is catalog order then rotation order.
    pub fn candidates(&self, key: ConstraintKey) -> Vec<usize> {
        let Some(bucket) = self.bucket(key) else {
            return Vec::new();
        };

        let mut seen = HashSet::with_capacity(bucket.available);
        let mut result = Vec::with_capacity(bucket.available);
        for &handle in &bucket.placements {
            let Some(placement) = self.placements.get(handle) else {
                continue;
            };
            if !self.placed.contains(placement.slot()) && seen.insert(placement.fingerprint()) {
                result.push(handle);
            }
        }
        result
    }

    /// Take a placement's piece off the shelf
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the handle is unknown or its piece
    /// is already on the board
    pub fn mark_used(&mut self, handle: usize) -> Result<()> {
        let slot = self.slot_of(handle, "mark_used")?;
        if !self.placed.insert(slot) {
            return Err(invariant_violation(
                "mark_used",
                &format!("piece in slot {slot} is already placed"),
            ));
        }
        self.adjust_counts(slot, |available, repetitions| available - repetitions);
        Ok(())
    }

    /// Return a placement's piece to the shelf
    ///
    /// Exact inverse of [`PlacementIndex::mark_used`].
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the handle is unknown or its piece
    /// is not on the board
    pub fn mark_unused(&mut self, handle: usize) -> Result<()> {
        let slot = self.slot_of(handle, "mark_unused")?;
        if !self.placed.remove(slot) {
            return Err(invariant_violation(
                "mark_unused",
                &format!("piece in slot {slot} is not placed"),
            ));
        }
        self.adjust_counts(slot, |available, repetitions| available + repetitions);
        Ok(())
    }

    /// Placement behind a handle
    pub fn placement(&self, handle: usize) -> Option<&Placement> {
        self.placements.get(handle)
    }

    /// Every registered placement, indexed by handle
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Test if the piece in `slot` is on the board
    pub fn is_placed(&self, slot: usize) -> bool {
        self.placed.contains(slot)
    }

    /// Pieces currently on the board
    pub const fn placed(&self) -> &PieceBitset {
        &self.placed
    }

    /// Number of distinct constraint keys
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets the piece in `slot` appears in
    pub fn buckets_touched(&self, slot: usize) -> usize {
        self.piece_buckets.get(slot).map_or(0, Vec::len)
    }

    /// Available count of every bucket, keyed by constraint
    ///
    /// Allocates; meant for consistency checks rather than the search loop.
    pub fn counts_snapshot(&self) -> HashMap<ConstraintKey, usize> {
        self.bucket_by_key
            .iter()
            .filter_map(|(&key, &id)| self.buckets.get(id).map(|b| (key, b.available)))
            .collect()
    }

    fn bucket(&self, key: ConstraintKey) -> Option<&Bucket> {
        self.bucket_by_key
            .get(&key)
            .and_then(|&id| self.buckets.get(id))
    }

    fn slot_of(&self, handle: usize, operation: &'static str) -> Result<usize> {
        self.placements
            .get(handle)
            .map(Placement::slot)
            .ok_or_else(|| {
                invariant_violation(operation, &format!("unknown placement handle {handle}"))
            })
    }

    fn adjust_counts(&mut self, slot: usize, update: impl Fn(usize, usize) -> usize) {
        let Some(refs) = self.piece_buckets.get(slot) else {
            return;
        };
        for r in refs {
            if let Some(bucket) = self.buckets.get_mut(r.bucket) {
                bucket.available = update(bucket.available, r.repetitions);
            }
        }
    }
}
