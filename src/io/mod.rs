/// Bundled puzzle and catalog file parsing
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Progress bars for profiling runs
pub mod progress;
/// Board read-out, text and HTML rendering
pub mod render;
