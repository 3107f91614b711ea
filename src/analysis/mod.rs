//! Profiling statistics across solve attempts

/// Movement and timing summaries
pub mod statistics;
