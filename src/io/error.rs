//! Error types for solver operations

use crate::spatial::edges::ConstraintKey;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Exhausting the search is not an error: an unsolvable shuffle is reported
/// through the search outcome instead.
#[derive(Debug)]
pub enum SolverError {
    /// Piece catalog cannot describe a square puzzle
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// No piece fits the anchor corner, so the search cannot start
    NoStartingPlacement {
        /// Constraint key of the anchor cell
        key: ConstraintKey,
    },

    /// Internal bookkeeping disagrees with itself
    ///
    /// Always indicates a bug in constraint maintenance, never a property of
    /// the puzzle being solved.
    InvariantViolation {
        /// Operation that detected the inconsistency
        operation: &'static str,
        /// Description of the inconsistency
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog text could not be parsed
    CatalogParse {
        /// One-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid piece catalog: {reason}")
            }
            Self::NoStartingPlacement { key } => {
                write!(f, "No piece fits the anchor corner (constraint key {key})")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated during {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CatalogParse { line, reason } => {
                write!(f, "Catalog line {line}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> SolverError {
    SolverError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}

impl SolverError {
    /// Test if this error reports an internal bug rather than bad input
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
