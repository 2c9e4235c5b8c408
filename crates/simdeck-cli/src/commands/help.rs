//! `simdeck help`: render the usage text derived from the grammar itself.

use crate::command::{Cli, Help};
use crate::config::OutputOptions;

pub fn render(program: &str, help: &Help) -> Result<String, serde_json::Error> {
    let usage = Cli::parser(program).description().usage();
    if help.output.contains(OutputOptions::JSON) {
        serde_json::to_string(&usage)
    } else {
        Ok(usage)
    }
}

pub fn run(program: &str, help: &Help) {
    match render(program, help) {
        Ok(text) => println!("{text}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
