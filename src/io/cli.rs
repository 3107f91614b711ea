//! Command-line interface for solving and profiling edge-matching puzzles

use crate::algorithm::executor::{SolveOutcome, SolverConfig, solve};
use crate::analysis::statistics::{AttemptSample, ProfileSummary};
use crate::io::catalog::{builtin_catalog, load_catalog};
use crate::io::configuration::{
    DEFAULT_LOG_FILTER, DEFAULT_PROFILE_ATTEMPTS, DEFAULT_SEED, PNG_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::{render_text, write_html};
use crate::spatial::pattern::Pattern;
use crate::spatial::pieces::PieceCatalog;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// What the program should do
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Solve one shuffle and print the board
    Solve,
    /// Solve many shuffles and report cost statistics
    Profile,
}

#[derive(Parser)]
#[command(name = "edgematch")]
#[command(author, version, about = "Solve square edge-matching tile puzzles")]
/// Command-line arguments for the solver
pub struct Cli {
    /// Run mode
    #[arg(short, long, value_enum, default_value_t = Mode::Solve)]
    pub mode: Mode,

    /// Seed for the piece shuffle (profile mode uses seed, seed+1, ...)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Catalog file with one piece per line; defaults to the bundled puzzle
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Border pattern name
    #[arg(short, long, default_value = "Border")]
    pub border: String,

    /// Number of attempts in profile mode
    #[arg(short, long, default_value_t = DEFAULT_PROFILE_ATTEMPTS)]
    pub attempts: usize,

    /// Give up after this many place/unplace movements
    #[arg(long)]
    pub budget: Option<u64>,

    /// Write the solved board as HTML
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Write the solved board as PNG
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Pixel size of one cell in PNG output
    #[arg(long, default_value_t = PNG_TILE_SIZE)]
    pub tile_size: u32,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tracing filter implied by the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_FILTER,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Solver configuration from the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the border name is not a known pattern
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let border = Pattern::from_name(&self.border).ok_or_else(|| {
            invalid_parameter("border", &self.border, &"not a known pattern name")
        })?;
        Ok(SolverConfig {
            border,
            movement_budget: self.budget,
        })
    }
}

/// Install the tracing subscriber, letting `RUST_LOG` override the flags
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the selected mode
pub struct Runner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Execute the selected mode
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, the catalog cannot be
    /// loaded, the search hits an internal inconsistency, or output files
    /// cannot be written
    pub fn run(&mut self) -> Result<()> {
        let catalog = self.catalog()?;
        let config = self.cli.solver_config()?;
        match self.cli.mode {
            Mode::Solve => self.solve_once(&catalog, config).map(|_| ()),
            Mode::Profile => self.profile(&catalog, config).map(|_| ()),
        }
    }

    fn catalog(&self) -> Result<PieceCatalog> {
        self.cli
            .catalog
            .as_deref()
            .map_or_else(|| Ok(builtin_catalog()), load_catalog)
    }

    /// Solve one shuffle, print it and write requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails or an output cannot be written
    // Allow print for the rendered board and user feedback
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn solve_once(&self, catalog: &PieceCatalog, config: SolverConfig) -> Result<SolveOutcome> {
        let outcome = solve(catalog, self.cli.seed, config)?;

        let Some(solution) = &outcome.solution else {
            if !self.cli.quiet {
                eprintln!("No solution found after {} movements.", outcome.movements);
            }
            return Ok(outcome);
        };

        if !self.cli.quiet {
            eprintln!("Solved in {} movements!", outcome.movements);
        }
        print!("{}", render_text(solution.board(), solution.index()));

        if let Some(path) = &self.cli.html {
            write_html(solution.board(), solution.index(), path)?;
        }
        if let Some(path) = &self.cli.png {
            export_board_as_png(solution.board(), solution.index(), self.cli.tile_size, path)?;
        }

        Ok(outcome)
    }

    /// Solve consecutive seeds and print movement and timing statistics
    ///
    /// Stops at the first shuffle without a solution and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `attempts` is zero or a search fails
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn profile(
        &mut self,
        catalog: &PieceCatalog,
        config: SolverConfig,
    ) -> Result<Option<ProfileSummary>> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"profile needs at least one attempt",
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.attempts);
        }

        let mut samples = Vec::with_capacity(self.cli.attempts);
        for attempt in 0..self.cli.attempts {
            let start_time = Instant::now();
            let outcome = solve(catalog, self.cli.seed.wrapping_add(attempt as u64), config)?;

            if outcome.solution.is_none() {
                if let Some(ref pm) = self.progress_manager {
                    pm.finish();
                }
                if !self.cli.quiet {
                    eprintln!("No solution found after {} movements.", outcome.movements);
                }
                return Ok(None);
            }

            samples.push(AttemptSample::new(outcome.movements, start_time.elapsed()));
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_attempt(outcome.movements);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let summary = ProfileSummary::from_samples(&samples);
        if let Some(summary) = &summary {
            if !self.cli.quiet {
                println!("{summary}");
            }
        }
        Ok(summary)
    }
}
