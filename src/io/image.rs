//! PNG export drawing each cell as four coloured edge triangles

use crate::algorithm::index::PlacementIndex;
use crate::io::configuration::MAX_PNG_TILE_SIZE;
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::board::Board;
use crate::spatial::pattern::Direction;
use image::{ImageBuffer, Rgba};
use std::path::Path;

// Splits a tile along its diagonals into the triangle touching each edge
const fn quadrant(x: u32, y: u32, tile_size: u32) -> Direction {
    let right = tile_size - 1 - x;
    let bottom = tile_size - 1 - y;
    if y <= x && y <= right {
        Direction::North
    } else if right <= x && right <= bottom {
        Direction::East
    } else if bottom <= x {
        Direction::South
    } else {
        Direction::West
    }
}

// Side length in pixels of the whole image
fn image_side(board_size: usize, tile_size: u32) -> Result<u32> {
    if tile_size == 0 || tile_size > MAX_PNG_TILE_SIZE {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("tiles must be 1 to {MAX_PNG_TILE_SIZE} pixels wide"),
        ));
    }
    u32::try_from(board_size)
        .ok()
        .and_then(|size| size.checked_mul(tile_size))
        .ok_or_else(|| {
            invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("a {board_size}×{board_size} board does not fit in one image"),
            )
        })
}

/// Rasterise the board, `tile_size` pixels per cell
///
/// Occupied cells show their placement's edges; empty cells show known
/// restrictions and stay transparent elsewhere.
///
/// # Errors
///
/// Returns an error if `tile_size` is zero, exceeds [`MAX_PNG_TILE_SIZE`], or
/// makes the image side overflow
pub fn board_image(
    board: &Board,
    index: &PlacementIndex,
    tile_size: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let side = image_side(board.size(), tile_size)?;
    let mut img = ImageBuffer::new(side, side);

    for ((row, col), cell) in board.cells().indexed_iter() {
        let placement = cell.occupant().and_then(|handle| index.placement(handle));
        for y in 0..tile_size {
            for x in 0..tile_size {
                let direction = quadrant(x, y, tile_size);
                let pattern = placement.map_or_else(
                    || cell.restrictions().get(direction),
                    |p| Some(p.edge(direction)),
                );
                let color = pattern.map_or([0, 0, 0, 0], |p| p.rgba());
                img.put_pixel(
                    col as u32 * tile_size + x,
                    row as u32 * tile_size + y,
                    Rgba(color),
                );
            }
        }
    }

    Ok(img)
}

/// Export the board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `tile_size` is zero, too large, or overflows the image side
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    board: &Board,
    index: &PlacementIndex,
    tile_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = board_image(board, index, tile_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
