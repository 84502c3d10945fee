//! Clap command definition.
//!
//! The shell takes one optional positional function name followed by its
//! arguments. Without a function it reads invocations from stdin.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("showroom")
        .about("Run car showroom contract transactions against an in-memory ledger")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file (default: ./showroom.toml if present)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Create the sample cars before running")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("function")
                .value_name("FUNCTION")
                .help("Transaction name, e.g. createCar or carshowroom:queryCar"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Positional transaction arguments")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}
