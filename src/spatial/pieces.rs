//! Puzzle pieces, their rotations and the catalog they are drawn from
//!
//! A piece's edges never change once built. Rotating a piece yields a
//! [`Placement`]; all four placements of a piece refer back to it through
//! its catalog slot, so availability is tracked once per piece rather than
//! once per rotation.

use crate::io::error::{Result, SolverError};
use crate::spatial::edges::{ConstraintKey, Edges};
use crate::spatial::pattern::{Direction, Pattern};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Stable identity of a physical piece (1-based, assigned in catalog order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

impl PieceId {
    /// Wrap a piece number
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    /// Piece number
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square tile with four fixed edge patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    edges: [Pattern; 4],
}

impl Piece {
    /// Build a piece from its unrotated north, east, south and west edges
    pub const fn new(id: PieceId, edges: [Pattern; 4]) -> Self {
        Self { id, edges }
    }

    /// Identity of this piece
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Unrotated edges in north, east, south, west order
    pub const fn edges(&self) -> [Pattern; 4] {
        self.edges
    }

    /// Unrotated edge facing `direction`
    pub const fn edge(&self, direction: Direction) -> Pattern {
        self.edges[direction.index()]
    }

    /// The four rotations of this piece
    ///
    /// `slot` is the piece's position in the catalog the rotations belong to.
    /// The rotation labelled with orientation `o` turns the piece so that its
    /// original `o` edge faces north.
    pub fn rotations(&self, slot: usize) -> [Placement; 4] {
        Direction::ALL.map(|orientation| {
            let edges = Direction::ALL
                .map(|facing| self.edge(Direction::from_index(facing.index() + orientation.index())));
            Placement {
                slot,
                piece_id: self.id,
                orientation,
                edges,
                fingerprint: Edges::full(edges).key(),
            }
        })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Piece {}: N={} E={} S={} W={}",
            self.id,
            self.edge(Direction::North),
            self.edge(Direction::East),
            self.edge(Direction::South),
            self.edge(Direction::West)
        )
    }
}

/// A piece fixed at one of its four rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    slot: usize,
    piece_id: PieceId,
    orientation: Direction,
    edges: [Pattern; 4],
    fingerprint: ConstraintKey,
}

impl Placement {
    /// Catalog slot of the underlying piece
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Identity of the underlying piece
    pub const fn piece_id(&self) -> PieceId {
        self.piece_id
    }

    /// Which original edge faces north
    pub const fn orientation(&self) -> Direction {
        self.orientation
    }

    /// Rotated edge facing `direction`
    pub const fn edge(&self, direction: Direction) -> Pattern {
        self.edges[direction.index()]
    }

    /// Rotated edges as a fully known edge set
    pub const fn edges(&self) -> Edges {
        Edges::full(self.edges)
    }

    /// Full-constraint key of the rotated edges
    ///
    /// Two placements with equal fingerprints present the same four edges and
    /// are interchangeable on the board.
    pub const fn fingerprint(&self) -> ConstraintKey {
        self.fingerprint
    }
}

/// Ordered set of pieces for one solve attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    /// Number pieces sequentially from 1 in the given order
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = [Pattern; 4]>,
    {
        let pieces = edges
            .into_iter()
            .enumerate()
            .map(|(i, piece_edges)| Piece::new(PieceId::new(i + 1), piece_edges))
            .collect();
        Self { pieces }
    }

    /// Pieces in slot order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece at a slot
    pub fn get(&self, slot: usize) -> Option<&Piece> {
        self.pieces.get(slot)
    }

    /// Number of pieces
    pub const fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Test if the catalog holds no pieces
    pub const fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Side length of the square board these pieces tile
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidCatalog`] if the catalog is empty or its
    /// size is not a perfect square
    pub fn side_len(&self) -> Result<usize> {
        let count = self.pieces.len();
        if count == 0 {
            return Err(SolverError::InvalidCatalog {
                reason: "catalog contains no pieces".to_string(),
            });
        }
        let side = count.isqrt();
        if side * side == count {
            Ok(side)
        } else {
            Err(SolverError::InvalidCatalog {
                reason: format!("{count} pieces cannot fill a square board"),
            })
        }
    }

    /// Copy with the pieces in random order; identities are preserved
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut pieces = self.pieces.clone();
        pieces.shuffle(rng);
        Self { pieces }
    }
}
