//! Piece catalogs: the bundled 6×6 puzzle and a plain-text loader
//!
//! The text format lists one piece per line as four pattern names in north,
//! east, south, west order. Blank lines and lines starting with `#` are
//! ignored. Names may be long (`BlueStar`) or short (`Blue`), in any case.

use crate::io::error::{Result, SolverError};
use crate::spatial::pattern::Pattern;
use crate::spatial::pieces::PieceCatalog;
use std::path::Path;

const BLUE_STAR: Pattern = Pattern::BlueStar;
const BORDER: Pattern = Pattern::Border;
const PINK_CIRCLE: Pattern = Pattern::PinkCircle;
const PINK_TRIDENT: Pattern = Pattern::PinkTrident;
const YELLOW_CIRCLE: Pattern = Pattern::YellowCircle;
const RED_YELLOW: Pattern = Pattern::RedYellowTriangle;
const YELLOW_GREEN: Pattern = Pattern::YellowGreenTriangle;
const RED_TRIDENT: Pattern = Pattern::RedTrident;

/// Edges of the bundled 36-piece puzzle, numbered 1.. in this order
pub const BUILTIN_PIECES: [[Pattern; 4]; 36] = [
    [BLUE_STAR, YELLOW_GREEN, BORDER, RED_YELLOW],
    [BLUE_STAR, PINK_TRIDENT, BLUE_STAR, YELLOW_GREEN],
    [PINK_TRIDENT, BLUE_STAR, YELLOW_CIRCLE, BORDER],
    [PINK_CIRCLE, RED_YELLOW, BORDER, RED_YELLOW],
    [RED_YELLOW, BLUE_STAR, PINK_CIRCLE, YELLOW_GREEN],
    [PINK_CIRCLE, PINK_TRIDENT, RED_TRIDENT, BORDER],
    [BORDER, RED_TRIDENT, YELLOW_CIRCLE, YELLOW_GREEN],
    [RED_YELLOW, PINK_CIRCLE, YELLOW_CIRCLE, BLUE_STAR],
    [YELLOW_CIRCLE, RED_TRIDENT, PINK_CIRCLE, BORDER],
    [YELLOW_CIRCLE, BORDER, BORDER, RED_YELLOW],
    [YELLOW_GREEN, PINK_CIRCLE, RED_YELLOW, PINK_TRIDENT],
    [PINK_CIRCLE, BORDER, YELLOW_CIRCLE, BLUE_STAR],
    [YELLOW_GREEN, RED_TRIDENT, BORDER, BORDER],
    [RED_TRIDENT, PINK_TRIDENT, BLUE_STAR, YELLOW_GREEN],
    [YELLOW_CIRCLE, BORDER, RED_TRIDENT, YELLOW_GREEN],
    [BORDER, YELLOW_GREEN, YELLOW_CIRCLE, RED_YELLOW],
    [YELLOW_CIRCLE, PINK_CIRCLE, YELLOW_GREEN, BORDER],
    [RED_TRIDENT, YELLOW_CIRCLE, RED_YELLOW, YELLOW_GREEN],
    [BLUE_STAR, RED_YELLOW, BORDER, PINK_TRIDENT],
    [YELLOW_GREEN, YELLOW_CIRCLE, RED_TRIDENT, RED_YELLOW],
    [PINK_TRIDENT, BORDER, YELLOW_CIRCLE, PINK_CIRCLE],
    [BLUE_STAR, YELLOW_GREEN, RED_TRIDENT, PINK_CIRCLE],
    [PINK_CIRCLE, RED_TRIDENT, PINK_TRIDENT, BORDER],
    [PINK_CIRCLE, RED_TRIDENT, YELLOW_CIRCLE, YELLOW_GREEN],
    [RED_YELLOW, RED_TRIDENT, BORDER, BORDER],
    [PINK_TRIDENT, RED_TRIDENT, YELLOW_GREEN, PINK_CIRCLE],
    [RED_TRIDENT, PINK_CIRCLE, YELLOW_CIRCLE, BORDER],
    [PINK_CIRCLE, PINK_TRIDENT, RED_TRIDENT, PINK_TRIDENT],
    [BLUE_STAR, PINK_CIRCLE, PINK_TRIDENT, PINK_CIRCLE],
    [YELLOW_CIRCLE, PINK_CIRCLE, BORDER, PINK_TRIDENT],
    [PINK_CIRCLE, YELLOW_CIRCLE, BLUE_STAR, YELLOW_CIRCLE],
    [PINK_TRIDENT, RED_YELLOW, BORDER, PINK_CIRCLE],
    [YELLOW_GREEN, PINK_TRIDENT, BORDER, BORDER],
    [RED_TRIDENT, YELLOW_CIRCLE, BLUE_STAR, YELLOW_CIRCLE],
    [BLUE_STAR, PINK_TRIDENT, BLUE_STAR, YELLOW_GREEN],
    [RED_YELLOW, YELLOW_CIRCLE, BLUE_STAR, YELLOW_GREEN],
];

/// The bundled puzzle as a catalog
pub fn builtin_catalog() -> PieceCatalog {
    PieceCatalog::from_edges(BUILTIN_PIECES)
}

/// Parse a catalog from text
///
/// # Errors
///
/// Returns [`SolverError::CatalogParse`] for a line that does not hold
/// exactly four known pattern names, or [`SolverError::InvalidCatalog`] if
/// no pieces are listed
pub fn parse_catalog(text: &str) -> Result<PieceCatalog> {
    let mut pieces = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let names: Vec<&str> = line.split_whitespace().collect();
        let [north, east, south, west] = names.as_slice() else {
            return Err(SolverError::CatalogParse {
                line: i + 1,
                reason: format!("expected 4 patterns, found {}", names.len()),
            });
        };

        let mut edges = [Pattern::Border; 4];
        for (edge, name) in edges.iter_mut().zip([north, east, south, west]) {
            *edge = Pattern::from_name(name).ok_or_else(|| SolverError::CatalogParse {
                line: i + 1,
                reason: format!("unknown pattern '{name}'"),
            })?;
        }
        pieces.push(edges);
    }

    if pieces.is_empty() {
        return Err(SolverError::InvalidCatalog {
            reason: "no pieces listed".to_string(),
        });
    }

    Ok(PieceCatalog::from_edges(pieces))
}

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub fn load_catalog(path: &Path) -> Result<PieceCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;
    parse_catalog(&text)
}
