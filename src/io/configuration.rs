//! Solver constants and runtime configuration defaults

// Constraint key layout
/// Width in bits of each direction's field in a constraint key
pub const KEY_FIELD_BITS: u32 = 8;

// Cells with fewer known edges branch too widely to be worth attempting first
/// Minimum known edges for a cell to be considered by the selection heuristic
pub const MIN_KNOWN_EDGES: usize = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

/// Default number of attempts in profile mode
pub const DEFAULT_PROFILE_ATTEMPTS: usize = 1000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Side length in pixels of one cell in PNG output
pub const PNG_TILE_SIZE: u32 = 64;
/// Largest accepted cell side in pixels for PNG output
pub const MAX_PNG_TILE_SIZE: u32 = 1024;
/// Stylesheet referenced by HTML output
pub const HTML_STYLESHEET: &str = "style.css";
/// Default tracing filter when neither `-v` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
