//! # Drawpoker CLI Library
//!
//! Terminal front end for the `drawpoker-engine` Jacks-or-Better session.
//! The library owns argument parsing, configuration and rendering; the engine
//! owns every rule.
//!
//! ## Main Entry Point
//!
//! The primary entry point is [`run`], which parses command-line arguments
//! and executes the matching subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawpoker", "play", "--seed", "7"];
//! let code = drawpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive session (bet, deal, hold, draw)
//! - `sim`: Auto-play with a hold policy and report the return to player
//! - `stats`: Aggregate JSONL round logs and check payouts
//! - `eval`: Classify a hand given as text
//! - `deal`: Deal a single hand for inspection
//! - `paytable`: Show the pay schedule
//! - `cfg`: Display current configuration settings
//! - `rng`: Verify RNG properties

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawPokerCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_paytable_command, handle_play_command, handle_rng_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "eval", "deal", "paytable", "cfg", "rng"];

/// Main entry point for the CLI application.
///
/// Interactive input is read from the process stdin; see [`run_with_input`]
/// to supply it explicitly.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["drawpoker", "deal", "--seed", "42"];
/// let code = drawpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] with interactive input taken from `input`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawPokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            crate::write_or_exit!(err, "{}", e);
            crate::write_or_exit!(err, "Drawpoker CLI");
            crate::write_or_exit!(err, "Usage: drawpoker <command> [options]\n");
            crate::write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                crate::write_or_exit!(err, "  {}", c);
            }
            crate::write_or_exit!(err, "\nFor full help, run: drawpoker --help");
            return exit_code::ERROR;
        }
    };

    let result = dispatch(cli.cmd, out, err, input);
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            crate::write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Play {
            credits,
            seed,
            log,
            reveal_ms,
        } => {
            let resolved = load_config()?;
            let opts = PlayOptions {
                credits,
                seed,
                log,
                reveal_ms,
            };
            handle_play_command(opts, &resolved.config, out, err, input)
        }
        Commands::Sim {
            rounds,
            policy,
            bet,
            credits,
            seed,
            output,
        } => {
            let resolved = load_config()?;
            let opts = SimOptions {
                rounds,
                policy,
                bet,
                credits,
                seed,
                output,
            };
            handle_sim_command(opts, &resolved.config, out, err)
        }
        Commands::Stats { input: path } => handle_stats_command(&path, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Paytable => handle_paytable_command(out),
        Commands::Cfg => handle_cfg_command(&load_config()?, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    }
}

fn load_config() -> Result<config::ConfigResolved, CliError> {
    config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))
}
