//! Showroom CLI: run contract transactions against an in-memory ledger.
//!
//! Two modes:
//! - **Shell mode**: `showroom [flags] FUNCTION [ARGS...]`: one transaction, exit
//! - **Pipe mode**: `showroom [flags] < script`: one transaction per line
//!
//! The ledger lives for one process. In pipe mode every line runs against
//! the same ledger, so a script can create and then query.

mod commands;
mod format;
mod logging;
mod parse;

use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use showroom_executor::{Command, Executor, ShowroomConfig, CONFIG_FILE_NAME};

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_invocation, parse_line, Invocation};

fn main() {
    logging::init();
    let matches = build_cli().get_matches();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let executor = match open_executor(&matches) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let exit_code = match matches_to_invocation(&matches) {
        Some(invocation) => run_invocation(&executor, &invocation, mode),
        None => run_pipe(&executor, mode),
    };
    process::exit(exit_code);
}

fn open_executor(matches: &clap::ArgMatches) -> Result<Executor, String> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ShowroomConfig::from_file(Path::new(path)),
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            ShowroomConfig::from_file(Path::new(CONFIG_FILE_NAME))
        }
        None => Ok(ShowroomConfig::default()),
    }
    .map_err(|e| format!("Failed to load config: {}", e))?;

    if matches.get_flag("seed") {
        config.seed_on_open = true;
    }

    Executor::from_config(&config).map_err(|e| format!("Failed to start: {}", e))
}

/// Run one invocation and print its result. Returns the exit code.
fn run_invocation(executor: &Executor, invocation: &Invocation, mode: OutputMode) -> i32 {
    let result = if invocation.function == "metadata" && invocation.args.is_empty() {
        executor.execute(Command::Metadata)
    } else {
        executor.invoke(&invocation.function, &invocation.args)
    };

    match result {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

/// Run every stdin line. A failing line does not stop the script; the exit
/// code is 1 if any line failed.
fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        match parse_line(&line) {
            Ok(Some(invocation)) => {
                if run_invocation(executor, &invocation, mode) != 0 {
                    exit_code = 1;
                }
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("(error) {}", e);
                exit_code = 1;
            }
        }
    }

    exit_code
}
