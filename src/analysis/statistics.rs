//! Summary statistics over repeated solve attempts
//!
//! Each attempt contributes its movement count and wall-clock time. The
//! summary reports minimum, maximum and mean of both series.

use std::fmt;
use std::time::Duration;

/// Cost of one solved attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptSample {
    /// Place and unplace operations performed
    pub movements: u64,
    /// Wall-clock time in milliseconds
    pub millis: f64,
}

impl AttemptSample {
    /// Build a sample from a movement count and elapsed time
    pub fn new(movements: u64, elapsed: Duration) -> Self {
        Self {
            movements,
            millis: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Minimum, maximum and mean of the attempt samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSummary {
    /// Number of samples summarised
    pub attempts: usize,
    /// Fewest movements in any attempt
    pub min_movements: u64,
    /// Most movements in any attempt
    pub max_movements: u64,
    /// Integer mean of movements, rounded down
    pub avg_movements: u64,
    /// Fastest attempt in milliseconds
    pub min_millis: f64,
    /// Slowest attempt in milliseconds
    pub max_millis: f64,
    /// Mean attempt time in milliseconds
    pub avg_millis: f64,
}

impl ProfileSummary {
    /// Summarise samples, or `None` if there are none
    pub fn from_samples(samples: &[AttemptSample]) -> Option<Self> {
        let first = samples.first()?;
        let attempts = samples.len();

        let mut summary = Self {
            attempts,
            min_movements: first.movements,
            max_movements: first.movements,
            avg_movements: 0,
            min_millis: first.millis,
            max_millis: first.millis,
            avg_millis: 0.0,
        };

        let mut total_movements: u128 = 0;
        let mut total_millis = 0.0;
        for sample in samples {
            summary.min_movements = summary.min_movements.min(sample.movements);
            summary.max_movements = summary.max_movements.max(sample.movements);
            summary.min_millis = summary.min_millis.min(sample.millis);
            summary.max_millis = summary.max_millis.max(sample.millis);
            total_movements += u128::from(sample.movements);
            total_millis += sample.millis;
        }

        summary.avg_movements = (total_movements / attempts as u128) as u64;
        summary.avg_millis = total_millis / attempts as f64;
        Some(summary)
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Movements: min={}, max={}, avg={}",
            self.min_movements, self.max_movements, self.avg_movements
        )?;
        write!(
            f,
            "Timings: min={:.2}, max={:.2}, avg={:.2}",
            self.min_millis, self.max_millis, self.avg_millis
        )
    }
}
