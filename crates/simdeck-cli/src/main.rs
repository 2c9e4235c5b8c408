use std::env;
use std::path::Path;

mod actions;
mod command;
mod commands;
mod config;
mod events;
mod parsers;
mod query;

#[cfg(test)]
mod actions_tests;
#[cfg(test)]
mod config_tests;

use crate::command::Cli;

/// Basename of the invoked binary, for usage text and hints.
fn program_name(arg0: Option<&str>) -> String {
    arg0.and_then(|path| Path::new(path).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("simdeck")
        .to_string()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = program_name(args.first().map(String::as_str));
    let tokens = args.get(1..).unwrap_or_default();
    match Cli::parser(&program).parse(tokens) {
        Ok((_, Cli::Print(action))) => commands::print::run(&action),
        Ok((_, Cli::Run(command))) => commands::run::run(&command),
        Ok((_, Cli::Show(help))) => commands::help::run(&program, &help),
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprintln!("Run '{program} help' for usage.");
            std::process::exit(1);
        }
    }
}
