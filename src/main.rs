//! CLI entry point for the edge-matching puzzle solver

use clap::Parser;
use edgematch::io::cli::{Cli, Runner, init_logging};

fn main() -> edgematch::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());
    let mut runner = Runner::new(cli);
    runner.run()
}
