//! Backtracking solver for square edge-matching tile puzzles
//!
//! Pieces carry a pattern on each edge and must tile an N×N board so that
//! touching edges match and the outer ring shows the border pattern. The
//! search indexes every rotation of every piece by each subset of its edges,
//! always fills the most constrained open cell next, and backtracks through
//! an explicit history when a cell has no candidates left.

#![forbid(unsafe_code)]

/// Placement index, cell selection and the backtracking executor
pub mod algorithm;
/// Statistics over repeated solve attempts
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Patterns, pieces and the board
pub mod spatial;

pub use algorithm::executor::{SearchState, SolveOutcome, SolvedBoard, SolverConfig, solve};
pub use io::error::{Result, SolverError};
