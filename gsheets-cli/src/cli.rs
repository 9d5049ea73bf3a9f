// Command definition for gsheets-syntax.
//
// Shared between main.rs and build.rs (shell completion generation), so it
// must stay self-contained: clap only, no other crate items.

use clap::{Arg, ArgAction, Command};

/// The full gsheets-syntax command tree
pub fn cli() -> Command {
    Command::new("gsheets-syntax")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for building the gsheets formula grammar from fragment sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build")
                .about("Assemble the grammar document from the fragment directory")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Extra configuration file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("fragments")
                        .long("fragments")
                        .help("Fragment source directory"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path the grammar document is written to"),
                )
                .arg(
                    Arg::new("base")
                        .long("base")
                        .help("Existing grammar to merge into instead of building from scratch"),
                )
                .arg(
                    Arg::new("no-sort")
                        .long("no-sort")
                        .help("Keep the authored order of function names")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("functions")
                .about("Convert a function-name list into a repository-format fragment")
                .arg(
                    Arg::new("path")
                        .help("Path to the name list, one function per line")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value("functions.json")
                        .help("Path the fragment is written to"),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Sort names before generating rules")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("categories").about("List the recognized grammar categories"))
}
