//! Board read-out for external renderers, plus text and HTML renderings

use crate::algorithm::index::PlacementIndex;
use crate::io::configuration::HTML_STYLESHEET;
use crate::io::error::{Result, SolverError};
use crate::spatial::board::{Board, Position};
use crate::spatial::pattern::{Direction, restriction_name};
use crate::spatial::pieces::PieceId;
use std::fmt::Write as _;
use std::path::Path;

/// Piece and orientation occupying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    /// Cell coordinates
    pub position: Position,
    /// Piece on the cell
    pub piece_id: PieceId,
    /// Which original edge of the piece faces north
    pub orientation: Direction,
}

/// Occupied cells in row-major order
pub fn render(board: &Board, index: &PlacementIndex) -> Vec<RenderedCell> {
    board
        .cells()
        .indexed_iter()
        .filter_map(|((row, col), cell)| {
            let placement = index.placement(cell.occupant()?)?;
            Some(RenderedCell {
                position: Position::new(row, col),
                piece_id: placement.piece_id(),
                orientation: placement.orientation(),
            })
        })
        .collect()
}

const CELL_WIDTH: usize = 20;

/// Plain-text drawing of the board
///
/// Each cell occupies three lines: its north edge, then west edge, piece id
/// with orientation letter and east edge, then its south edge. Empty cells
/// show their current restrictions instead.
pub fn render_text(board: &Board, index: &PlacementIndex) -> String {
    let mut out = String::new();
    let separator = format!("{}\n", "-".repeat((CELL_WIDTH + 1) * board.size() + 1));

    for row in board.cells().rows() {
        out.push_str(&separator);
        let mut north = String::from("|");
        let mut middle = String::from("|");
        let mut south = String::from("|");

        for cell in row {
            let placement = cell.occupant().and_then(|handle| index.placement(handle));
            let edge = |direction: Direction| {
                placement.map_or_else(
                    || restriction_name(cell.restrictions().get(direction)),
                    |p| p.edge(direction).short_name(),
                )
            };
            let label = placement.map_or_else(
                || String::from("."),
                |p| format!("{}{}", p.piece_id(), p.orientation().letter()),
            );

            let _ = write!(north, "{:^CELL_WIDTH$}|", edge(Direction::North));
            let _ = write!(
                middle,
                "{:<7}{:^6}{:>7}|",
                edge(Direction::West),
                label,
                edge(Direction::East)
            );
            let _ = write!(south, "{:^CELL_WIDTH$}|", edge(Direction::South));
        }

        for line in [north, middle, south] {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push_str(&separator);
    out
}

/// HTML page laying out piece images in a table
///
/// Each occupied cell references `piece{id}.png` with an `img-{N|E|S|W}`
/// class so the stylesheet can rotate it.
pub fn render_html(board: &Board, index: &PlacementIndex) -> String {
    let mut out = format!(
        "<!doctype html>\n<html>\n<head>  <link rel=\"stylesheet\" type=\"text/css\" href=\"{HTML_STYLESHEET}\" >\n</head>\n<body>\n  <table class=\"board\">\n"
    );

    for row in board.cells().rows() {
        out.push_str("    <tr>\n");
        for cell in row {
            match cell.occupant().and_then(|handle| index.placement(handle)) {
                Some(placement) => {
                    let _ = writeln!(
                        out,
                        "      <td><img src=\"piece{}.png\" class=\"img img-{}\" /></td>",
                        placement.piece_id(),
                        placement.orientation().letter()
                    );
                }
                None => out.push_str("      <td></td>\n"),
            }
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </table>\n</body>\n</html>");
    out
}

/// Write [`render_html`] output to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written
pub fn write_html(board: &Board, index: &PlacementIndex, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, render_html(board, index)).map_err(|e| SolverError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write html",
        source: e,
    })
}
