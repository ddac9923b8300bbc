//! Excise CLI
//!
//! Removes a clearly marked block from a text file and writes the result to
//! a new file, leaving the input untouched.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use excise_core::SubstituteOptions;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::adhoc::AnchorArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} marker-delimited block excision", "excise".green().bold());
            println!();
            println!("Run {} for available commands.", "excise --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr. `--verbose` forces debug; otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run { recipe, write } => {
            commands::run_recipe(&recipe, write)?;
        }
        Commands::Anchors {
            input,
            start,
            boundaries,
            end,
            keep_end,
            lines,
            replacement,
            output,
            write,
        } => {
            let anchors = AnchorArgs {
                start,
                boundaries,
                end,
                keep_end,
                lines,
            };
            commands::run_anchors(input, &anchors, &replacement, output, write)?;
        }
        Commands::Pattern {
            input,
            regex,
            limit,
            expand,
            replacement,
            output,
            write,
        } => {
            let options = SubstituteOptions { limit, expand };
            commands::run_pattern(input, &regex, options, &replacement, output, write)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "excise",
                &mut std::io::stdout(),
            );
        }
    }
    Ok(())
}
