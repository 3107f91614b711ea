//! Square board of cells with incrementally maintained edge restrictions
//!
//! Every cell records what its four surroundings demand: the border symbol
//! on the outer ring, the facing edge of an occupied neighbour, or nothing.
//! Placing and removing pieces update those restrictions immediately, so a
//! cell's constraint key is always current when the search reads it.

use crate::algorithm::index::PlacementIndex;
use crate::io::error::{Result, SolverError, invalid_parameter, invariant_violation};
use crate::spatial::edges::{ConstraintKey, Edges};
use crate::spatial::pattern::{Direction, Pattern};
use ndarray::Array2;
use std::collections::VecDeque;
use std::fmt;

/// Zero-based board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row, counted from the north edge
    pub row: usize,
    /// Column, counted from the west edge
    pub col: usize,
}

impl Position {
    /// Create a position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell the seed piece is anchored to
    pub const ANCHOR: Self = Self::new(0, 0);
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-based column, row like the printed puzzle
        write!(f, "{}, {}", self.col + 1, self.row + 1)
    }
}

/// One board square
#[derive(Debug, Clone, Default)]
pub struct Cell {
    restrictions: Edges,
    occupant: Option<usize>,
    /// Untried candidates, populated only while the cell is on the search history
    pending: VecDeque<usize>,
}

impl Cell {
    /// What the surroundings currently require of each edge
    pub const fn restrictions(&self) -> &Edges {
        &self.restrictions
    }

    /// Packed key of the current restrictions
    pub fn key(&self) -> ConstraintKey {
        self.restrictions.key()
    }

    /// Placement handle on this cell, if any
    pub const fn occupant(&self) -> Option<usize> {
        self.occupant
    }

    /// Test if a piece sits on this cell
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Number of untried candidates queued for backtracking
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// N×N board state for one solve attempt
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
    size: usize,
    border: Pattern,
    occupied: usize,
    movements: u64,
}

impl Board {
    /// Create an empty board whose outward-facing edges require `border`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn new(size: usize, border: Pattern) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"board must have at least one cell",
            ));
        }

        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            let mut restrictions = Edges::UNCONSTRAINED;
            for direction in Direction::ALL {
                if Self::faces_border(size, Position::new(row, col), direction) {
                    restrictions.set(direction, Some(border));
                }
            }
            Cell {
                restrictions,
                ..Cell::default()
            }
        });

        Ok(Self {
            cells,
            size,
            border,
            occupied: 0,
            movements: 0,
        })
    }

    /// Place the first available piece that fits the anchor corner
    ///
    /// Returns the placement handle used.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoStartingPlacement`] if no piece fits the
    /// anchor, or an invariant violation if the anchor is already occupied
    pub fn seed(&mut self, index: &mut PlacementIndex) -> Result<usize> {
        let key = self.key_at(Position::ANCHOR)?;
        let first = index
            .candidates(key)
            .first()
            .copied()
            .ok_or(SolverError::NoStartingPlacement { key })?;
        self.place(index, first, Position::ANCHOR)?;
        Ok(first)
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Pattern required on outward-facing edges
    pub const fn border(&self) -> Pattern {
        self.border
    }

    /// All cells, row-major
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at a position
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get((position.row, position.col))
    }

    /// Number of occupied cells
    pub const fn placed_count(&self) -> usize {
        self.occupied
    }

    /// Total place and unplace operations performed on this board
    pub const fn movements(&self) -> u64 {
        self.movements
    }

    /// Test if every cell is occupied
    pub const fn is_solved(&self) -> bool {
        self.occupied == self.size * self.size
    }

    /// Neighbouring position in a direction, if it lies on the board
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.offset();
        let row = position.row.checked_add_signed(d_row)?;
        let col = position.col.checked_add_signed(d_col)?;
        (row < self.size && col < self.size).then_some(Position::new(row, col))
    }

    /// Test if the edge of `position` facing `direction` lies on the outer ring
    pub const fn is_border_facing(&self, position: Position, direction: Direction) -> bool {
        Self::faces_border(self.size, position, direction)
    }

    /// Bind a placement to an empty cell and propagate its edges to neighbours
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the position is off the board or
    /// occupied, or if the placement's piece is already in use
    pub fn place(&mut self, index: &mut PlacementIndex, handle: usize, position: Position) -> Result<()> {
        let edges = index
            .placement(handle)
            .map(|placement| placement.edges())
            .ok_or_else(|| invariant_violation("place", &format!("unknown placement {handle}")))?;

        let cell = self.cell_mut(position, "place")?;
        if let Some(existing) = cell.occupant {
            return Err(invariant_violation(
                "place",
                &format!("cell ({position}) already holds placement {existing}"),
            ));
        }
        index.mark_used(handle)?;
        cell.occupant = Some(handle);

        for direction in Direction::ALL {
            if let Some(neighbor) = self.neighbor(position, direction) {
                if let Some(target) = self.cells.get_mut((neighbor.row, neighbor.col)) {
                    target
                        .restrictions
                        .set(direction.opposite(), edges.get(direction));
                }
            }
        }

        self.occupied += 1;
        self.movements += 1;
        Ok(())
    }

    /// Remove the occupant of a cell, undoing everything [`Board::place`] did
    ///
    /// Returns the removed placement handle.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the position is off the board or empty
    pub fn unplace(&mut self, index: &mut PlacementIndex, position: Position) -> Result<usize> {
        let cell = self.cell_mut(position, "unplace")?;
        let handle = cell.occupant.ok_or_else(|| {
            invariant_violation("unplace", &format!("cell ({position}) is empty"))
        })?;
        index.mark_unused(handle)?;
        cell.occupant = None;

        for direction in Direction::ALL {
            if let Some(neighbor) = self.neighbor(position, direction) {
                if let Some(target) = self.cells.get_mut((neighbor.row, neighbor.col)) {
                    target.restrictions.set(direction.opposite(), None);
                }
            }
        }

        self.occupied -= 1;
        self.movements += 1;
        Ok(handle)
    }

    /// Constraint key of a cell
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the position is off the board
    pub fn key_at(&self, position: Position) -> Result<ConstraintKey> {
        self.cell(position)
            .map(Cell::key)
            .ok_or_else(|| invariant_violation("key_at", &format!("({position}) is off the board")))
    }

    /// Store the untried candidates for a cell
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the position is off the board
    pub fn set_pending(&mut self, position: Position, candidates: Vec<usize>) -> Result<()> {
        self.cell_mut(position, "set_pending")?.pending = candidates.into();
        Ok(())
    }

    /// Take the next untried candidate for a cell
    pub fn pop_pending(&mut self, position: Position) -> Option<usize> {
        self.cells
            .get_mut((position.row, position.col))
            .and_then(|cell| cell.pending.pop_front())
    }

    /// Forget the untried candidates for a cell
    pub fn clear_pending(&mut self, position: Position) {
        if let Some(cell) = self.cells.get_mut((position.row, position.col)) {
            cell.pending.clear();
        }
    }

    /// Verify that restrictions and occupants agree everywhere
    ///
    /// Checks that every restriction equals the border symbol or the facing
    /// edge of an occupied neighbour (or is unconstrained otherwise), and that
    /// every occupant satisfies its cell's restrictions.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation describing the first mismatch found
    pub fn check_consistency(&self, index: &PlacementIndex) -> Result<()> {
        for ((row, col), cell) in self.cells.indexed_iter() {
            let position = Position::new(row, col);
            let placement = match cell.occupant {
                Some(handle) => Some(index.placement(handle).ok_or_else(|| {
                    invariant_violation("check_consistency", &format!("unknown placement {handle}"))
                })?),
                None => None,
            };

            for direction in Direction::ALL {
                let expected = if self.is_border_facing(position, direction) {
                    Some(self.border)
                } else {
                    self.neighbor(position, direction)
                        .and_then(|n| self.cell(n))
                        .and_then(|n| n.occupant)
                        .and_then(|h| index.placement(h))
                        .map(|p| p.edge(direction.opposite()))
                };

                if cell.restrictions.get(direction) != expected {
                    return Err(invariant_violation(
                        "check_consistency",
                        &format!("stale {direction} restriction at ({position})"),
                    ));
                }

                if let (Some(placement), Some(required)) = (placement, expected) {
                    if placement.edge(direction) != required {
                        return Err(invariant_violation(
                            "check_consistency",
                            &format!(
                                "piece {} at ({position}) shows {} to the {direction}, needs {required}",
                                placement.piece_id(),
                                placement.edge(direction)
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    const fn faces_border(size: usize, position: Position, direction: Direction) -> bool {
        match direction {
            Direction::North => position.row == 0,
            Direction::East => position.col + 1 == size,
            Direction::South => position.row + 1 == size,
            Direction::West => position.col == 0,
        }
    }

    fn cell_mut(&mut self, position: Position, operation: &'static str) -> Result<&mut Cell> {
        self.cells
            .get_mut((position.row, position.col))
            .ok_or_else(|| invariant_violation(operation, &format!("({position}) is off the board")))
    }
}
