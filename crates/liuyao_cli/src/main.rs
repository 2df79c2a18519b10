//! `liuyao`: six-line hexagram charts from the command line.
//!
//! Startup: parse arguments, install the tracing subscriber, load the config
//! file and apply flag overrides, then dispatch the subcommand.
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal error (table invariant) |
//! |  2   | Invalid input or arguments       |
//! |  4   | Configuration error              |

use std::process::ExitCode;

use clap::Parser;
use liuyao_base::GuaError;
use liuyao_engine::EngineError;
use liuyao_time::CalendarError;
use tracing::{debug, error};

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::logging::init_logging;

mod cli;
mod commands;
mod config;
mod logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }
    debug!(verbose = cli.global.verbose, quiet = cli.global.quiet, "cli started");

    let config = match CliConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg.with_overrides(&cli.global),
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            return ExitCode::from(4);
        }
    };

    match commands::run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    let invalid = if let Some(e) = err.downcast_ref::<GuaError>() {
        e.is_invalid_input()
    } else if let Some(e) = err.downcast_ref::<CalendarError>() {
        e.is_invalid_input()
    } else if let Some(e) = err.downcast_ref::<EngineError>() {
        e.is_invalid_input()
    } else {
        false
    };
    if invalid { 2 } else { 1 }
}
