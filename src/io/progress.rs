//! Progress display for multi-attempt profiling runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Attempts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed attempts and the most recent movement count
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Show a bar for `attempts` attempts
    pub fn initialize(&mut self, attempts: usize) {
        let bar = ProgressBar::new(attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Record a finished attempt
    pub fn complete_attempt(&mut self, movements: u64) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_position(self.completed as u64);
            bar.set_message(format!("last: {movements} movements"));
        }
    }

    /// Number of attempts recorded since the last [`ProgressManager::initialize`]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
