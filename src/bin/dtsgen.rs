#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use dtsgen::cli::args::CliArgs;
use dtsgen::cli::{driver, reporter::Reporter};

fn main() -> Result<()> {
    // Installs a subscriber only when DTSGEN_LOG or RUST_LOG is set.
    dtsgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let reporter = Reporter::new(!args.no_color && std::io::stdout().is_terminal());

    match driver::run(&args, &cwd) {
        Ok(summary) => {
            println!("{}", reporter.render_summary(&summary));
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", reporter.render_error(&err));
            std::process::exit(1);
        }
    }
}
