//! Spatial data structures of the puzzle
//!
//! This module contains:
//! - Edge patterns and compass directions
//! - Packed constraint keys over partially known edges
//! - Pieces, their rotations and catalogs
//! - The board and its cell restrictions

/// Board of cells with incrementally maintained restrictions
pub mod board;
/// Directional edge sets and constraint keys
pub mod edges;
/// Edge patterns and directions
pub mod pattern;
/// Pieces, placements and catalogs
pub mod pieces;

pub use board::{Board, Position};
