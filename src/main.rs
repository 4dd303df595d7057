// SPDX-License-Identifier: MIT

#![warn(missing_docs)]

//! The ignore crate fetches gitignore templates.
//!
//! This crate lists the templates of the GitHub gitignore catalog or concatenates the requested
//! ones into a `.gitignore` file.

// Loading macros must be done at the crate root.
#[macro_use]
extern crate log;

#[macro_use]
extern crate clap;

mod app;
mod client;
mod config;
mod errors;
mod output;
mod utils;

#[cfg(test)]
mod test_utils;

use std::error::Error as StdErr;
use std::io;
use std::process;

use app::run;
use config::catalog::CatalogConfig;
use config::logger::setup_logger;
use config::runtime::{generate_completions, parse_args, Action};
use errors::{Error, ErrorKind};

/// This is the entry point for the crate's binary.
///
/// This function parses the command arguments, sets up the logger then calls the function to run
/// the underlying logic. Errors end the process with a non-zero status.
fn main() {
    let action = parse_args(std::env::args_os()).unwrap_or_else(|err| exit_with(err));

    match action {
        Action::Display(text) => eprint!("{}", text),
        Action::Completions(shell) => generate_completions(shell, &mut io::stdout()),
        Action::Execute(request) => {
            if let Err(err) = setup_logger(request.verbosity) {
                eprintln!("[WARN] Failed to set up the logger: {}", err);
            }

            let stdout = io::stdout();
            let mut out = stdout.lock();

            if let Err(err) = run(&request, CatalogConfig::default(), &mut out) {
                exit_with(err);
            }
        }
    }
}

/// Reports `err` on `stderr` then exits; usage errors exit with 2, everything else with 1.
fn exit_with(err: Error) -> ! {
    let mut cause = err.source();
    while let Some(source) = cause {
        debug!("caused by: {}", source);
        cause = source.source();
    }

    eprintln!("Application error: {}", err);

    let code = match err.kind() {
        ErrorKind::UnknownCommand | ErrorKind::InvalidArguments => 2,
        _ => 1,
    };
    process::exit(code);
}
