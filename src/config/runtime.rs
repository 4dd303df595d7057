// SPDX-License-Identifier: MIT

//! The `runtime` module turns command arguments into an [`Action`], carrying a [`Request`] when
//! there is work to do.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;
use clap::ArgMatches;
use clap_complete::Shell;

use crate::config::cli::{build_cli, APP_NAME, COMPLETIONS_SUBCMD, GET_SUBCMD, LIST_SUBCMD};
use crate::errors::{Error, ErrorKind};
use crate::utils::current_dir;

/// `enum` containing the outcome of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Informational text (usage or version) to print to `stderr`, the run still succeeds.
    Display(String),
    /// Generate a completion script for the shell.
    Completions(Shell),
    /// Talk to the template catalog.
    Execute(Request),
}

/// `enum` containing the modes a [`Request`] can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List the names of all available templates.
    List,
    /// Fetch the named templates into a `.gitignore` file.
    Get,
}

/// `struct` containing a single invocation's request, immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Operation selected by the user.
    pub mode: Mode,

    /// Templates to fetch, in the order given (empty for [`Mode::List`]).
    pub templates: Vec<String>,

    /// Directory receiving the generated `.gitignore` (empty for [`Mode::List`]).
    pub output_dir: PathBuf,

    /// Number of `-v` occurrences.
    pub verbosity: u8,
}

/// Parses the argument list (binary name first) into an [`Action`].
///
/// Help requests, including a bare invocation, are not errors: they yield [`Action::Display`].
pub fn parse_args<I, T>(args: I) -> Result<Action, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => return action_from_clap_error(err),
    };
    debug!("parsed command arguments");

    let action = match matches.subcommand() {
        Some((LIST_SUBCMD, sub_matches)) => Action::Execute(Request {
            mode: Mode::List,
            templates: Vec::new(),
            output_dir: PathBuf::new(),
            verbosity: verbosity(&matches, sub_matches),
        }),
        Some((GET_SUBCMD, sub_matches)) => {
            let templates: Vec<String> = sub_matches
                .get_many::<String>("template")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let output_dir = match sub_matches.get_one::<PathBuf>("path") {
                Some(path) => path.clone(),
                None => current_dir()?,
            };

            Action::Execute(Request {
                mode: Mode::Get,
                templates,
                output_dir,
                verbosity: verbosity(&matches, sub_matches),
            })
        }
        Some((COMPLETIONS_SUBCMD, sub_matches)) => {
            let shell = sub_matches
                .get_one::<Shell>("shell")
                .copied()
                .ok_or_else(|| Error::from("No completion shell specified".to_owned()))?;
            Action::Completions(shell)
        }
        Some((other, _)) => {
            return Err(Error::with_message(
                ErrorKind::UnknownCommand,
                format!("Unknown command: {}", other),
            ))
        }
        None => Action::Display(build_cli().render_help().to_string()),
    };

    Ok(action)
}

/// Generates completions for shells defined in [`clap_complete::Shell`].
pub fn generate_completions<W: Write>(shell: Shell, out: &mut W) {
    use clap_complete::generate;

    generate(shell, &mut build_cli(), APP_NAME, out);
}

/// `-v` is global, count it wherever it was given.
fn verbosity(matches: &ArgMatches, sub_matches: &ArgMatches) -> u8 {
    matches
        .get_count("verbosity")
        .max(sub_matches.get_count("verbosity"))
}

fn action_from_clap_error(err: clap::Error) -> Result<Action, Error> {
    let rendered = err.to_string();

    match err.kind() {
        ClapErrorKind::DisplayHelp
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ClapErrorKind::DisplayVersion => Ok(Action::Display(rendered)),
        ClapErrorKind::InvalidSubcommand => Err(Error::new(
            ErrorKind::UnknownCommand,
            rendered.trim_end().to_owned(),
        )),
        _ => Err(Error::new(
            ErrorKind::InvalidArguments,
            rendered.trim_end().to_owned(),
        )),
    }
}
