/// Compact set of placed catalog slots
pub mod bitset;
/// Place/backtrack state machine and the solve entry point
pub mod executor;
/// Constraint-key index of piece rotations with live availability counts
pub mod index;
/// Most-constrained-cell selection heuristic
pub mod selection;
