//! # Teen Patti CLI Library
//!
//! Command-line front end for the `teenpatti-engine` rules core. It only
//! calls the engine's public API: dealing, evaluating, comparing and playing
//! rounds.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["teenpatti", "eval", "As", "2h", "3d"];
//! let code = teenpatti_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds, in batch, interactively, or as JSON lines
//! - `deal`: Deal two hands for inspection
//! - `eval`: Classify one three-card hand
//! - `compare`: Decide the winner between two given hands
//! - `sim`: Report category and outcome frequencies over many rounds
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TeenPattiCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_compare_command, handle_deal_command,
    handle_eval_command, handle_play_command, handle_sim_command,
};
use formatters::CardStyle;

pub use error::CliError;

/// Subcommand names, in the order shown by the usage hint.
pub const COMMANDS: &[&str] = &["play", "deal", "eval", "compare", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a round is abandoned
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["teenpatti", "deal", "--seed", "42"];
/// let code = teenpatti_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TeenPattiCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => return finish(Err(CliError::Config(e.to_string())), err),
    };
    let cfg = &resolved.config;
    let style = CardStyle::detect(cli.ascii || cfg.ascii, formatters::stdout_wants_color());
    tracing::debug!(command = cli.cmd.name(), ?style, "dispatching");

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            interactive,
            json,
        } => {
            let opts = PlayOptions {
                rounds: rounds.unwrap_or(cfg.rounds),
                seed: seed.or(cfg.seed),
                interactive,
                json,
                style,
            };
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed.or(cfg.seed), style, out),
        Commands::Eval { cards } => handle_eval_command(&cards, style, out),
        Commands::Compare { hand1, hand2 } => handle_compare_command(&hand1, &hand2, style, out),
        Commands::Sim { rounds, seed } => {
            handle_sim_command(rounds.unwrap_or(cfg.rounds), seed.or(cfg.seed), out)
        }
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };
    finish(result, err)
}

/// Maps a handler result onto an exit code, printing the error if any.
fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::info!("round abandoned: {}", msg);
            write_or_exit!(err, "{}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Teen Patti CLI");
            write_or_exit!(err, "Usage: teenpatti <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: teenpatti --help");
            exit_code::ERROR
        }
    }
}
