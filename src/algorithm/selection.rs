//! Most-constrained-cell selection
//!
//! The search always branches on the open cell with the fewest available
//! candidates, which keeps the branching factor small and exposes dead ends
//! early. Only cells with at least [`MIN_KNOWN_EDGES`] known edges compete.

use crate::algorithm::index::PlacementIndex;
use crate::io::configuration::MIN_KNOWN_EDGES;
use crate::spatial::board::{Board, Position};
use crate::spatial::edges::ConstraintKey;

/// An open cell together with its candidate count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChoice {
    /// Where the cell is
    pub position: Position,
    /// Key of the cell's current restrictions
    pub key: ConstraintKey,
    /// Available placements matching the key
    pub available: usize,
}

/// Unoccupied cells eligible for selection, in row-major order
pub fn eligible_cells<'a>(
    board: &'a Board,
    index: &'a PlacementIndex,
) -> impl Iterator<Item = CellChoice> + 'a {
    board
        .cells()
        .indexed_iter()
        .filter(|(_, cell)| {
            !cell.is_occupied() && cell.restrictions().known_count() >= MIN_KNOWN_EDGES
        })
        .map(|((row, col), cell)| {
            let key = cell.key();
            CellChoice {
                position: Position::new(row, col),
                key,
                available: index.available(key),
            }
        })
}

/// Pick the eligible cell with the fewest available candidates
///
/// Ties go to the first such cell in row-major order. Returns `None` only if
/// no unoccupied cell has enough known edges, which cannot happen on a
/// consistent board that still has open cells.
pub fn select_next_cell(board: &Board, index: &PlacementIndex) -> Option<CellChoice> {
    let mut best: Option<CellChoice> = None;
    for choice in eligible_cells(board, index) {
        if best.is_none_or(|current| choice.available < current.available) {
            best = Some(choice);
        }
    }
    best
}
