// SPDX-License-Identifier: MIT

//! The `cli` module defines the [`clap`] command line of `ignore`.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::Shell;

pub const APP_NAME: &str = "ignore";

pub const COMPLETIONS_SUBCMD: &str = "completions";
pub const LIST_SUBCMD: &str = "list";
pub const GET_SUBCMD: &str = "get";

const EXAMPLES: &str = "Examples:
    ignore list
    ignore get C Julia TeX
    ignore get VisualStudio --path=..";

/// Builds a [`clap::Command`].
pub fn build_cli() -> Command {
    Command::new(APP_NAME)
        .arg_required_else_help(true)
        .version(crate_version!())
        .about("Gets .gitignore templates for you <3")
        .author("fisherprime")
        .after_help(EXAMPLES)
        .arg(
            Arg::new("verbosity")
                .help("Set the level of verbosity: -v, -vv or -vvv")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(Command::new(LIST_SUBCMD).about("List all available templates"))
        .subcommand(
            Command::new(GET_SUBCMD)
                .about("Get template(s) and write them to a .gitignore file")
                .arg(
                    Arg::new("template")
                        .help("Case sensitive (space-separated) list of TEMPLATE(s) to fetch")
                        .value_name("TEMPLATE")
                        .num_args(1..)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("path")
                        .help("Specify the output directory [default: current directory]")
                        .long("path")
                        .value_name("DIR")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new(COMPLETIONS_SUBCMD)
                .arg_required_else_help(true)
                .about("Generate tab completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Specify shell to generate completion script for")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}
