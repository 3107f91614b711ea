//! Directional edge sets and their packed constraint keys

use crate::io::configuration::KEY_FIELD_BITS;
use crate::spatial::pattern::{Direction, Pattern};
use std::fmt;

/// Packed encoding of up to four known edge patterns
///
/// Each direction owns a disjoint [`KEY_FIELD_BITS`]-wide field holding the
/// pattern code, or zero when that edge is unconstrained. A cell with no
/// known edges has the key [`ConstraintKey::EMPTY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintKey(u32);

impl ConstraintKey {
    /// Key with every field unconstrained
    pub const EMPTY: Self = Self(0);

    /// Raw packed value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Pattern stored in one direction's field
    pub const fn field(self, direction: Direction) -> Option<Pattern> {
        let shift = KEY_FIELD_BITS * direction.index() as u32;
        let mask = (1u32 << KEY_FIELD_BITS) - 1;
        Pattern::from_code(((self.0 >> shift) & mask) as u8)
    }
}

impl fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Four directional edge values, each possibly unconstrained
///
/// Used both for the restrictions a cell inherits from its surroundings and
/// for the subsets of a placement's edges registered in the placement index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edges([Option<Pattern>; 4]);

impl Edges {
    /// No edge known
    pub const UNCONSTRAINED: Self = Self([None; 4]);

    /// All four edges known, in north, east, south, west order
    pub const fn full(edges: [Pattern; 4]) -> Self {
        Self([
            Some(edges[0]),
            Some(edges[1]),
            Some(edges[2]),
            Some(edges[3]),
        ])
    }

    /// Value in one direction
    pub const fn get(&self, direction: Direction) -> Option<Pattern> {
        self.0[direction.index()]
    }

    /// Replace the value in one direction
    pub const fn set(&mut self, direction: Direction, value: Option<Pattern>) {
        self.0[direction.index()] = value;
    }

    /// Number of directions with a known pattern
    pub fn known_count(&self) -> usize {
        self.0.iter().filter(|edge| edge.is_some()).count()
    }

    /// Keep only the directions whose bit is set in `mask` (bit 0 = north)
    #[must_use]
    pub fn subset(&self, mask: u8) -> Self {
        let mut kept = Self::UNCONSTRAINED;
        for direction in Direction::ALL {
            if mask & (1 << direction.index()) != 0 {
                kept.set(direction, self.get(direction));
            }
        }
        kept
    }

    /// Pack into a constraint key
    pub fn key(&self) -> ConstraintKey {
        let packed = Direction::ALL.iter().fold(0u32, |acc, &direction| {
            let code = self.get(direction).map_or(0, Pattern::code) as u32;
            acc | (code << (KEY_FIELD_BITS * direction.index() as u32))
        });
        ConstraintKey(packed)
    }
}
