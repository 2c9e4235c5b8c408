//! `simdeck <command>`: hand the parsed command to a dispatcher.
//!
//! The built-in dispatcher prints the plan it was given instead of driving
//! simulators. Execution backends implement [`Dispatcher`] against the same
//! typed [`Command`].

use std::io::{self, Write};

use serde::Serialize;

use crate::actions::Action;
use crate::command::Command;
use crate::config::OutputOptions;
use crate::query::Query;

pub trait Dispatcher {
    fn dispatch(&mut self, command: &Command) -> Result<(), DispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Writes one line per action the command would run against its targets.
pub struct PlanPrinter<W> {
    writer: W,
}

impl<W: Write> PlanPrinter<W> {
    pub fn new(writer: W) -> PlanPrinter<W> {
        PlanPrinter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[derive(Serialize)]
struct Plan<'a> {
    targets: &'a Query,
    actions: Vec<PlanEntry>,
}

#[derive(Serialize)]
struct PlanEntry {
    event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
}

impl PlanEntry {
    fn of(action: &Action) -> PlanEntry {
        PlanEntry {
            event: action.event_name().as_str(),
            subject: action.subject(),
        }
    }
}

impl<W: Write> Dispatcher for PlanPrinter<W> {
    fn dispatch(&mut self, command: &Command) -> Result<(), DispatchError> {
        let targets = command.query.clone().unwrap_or_else(Query::all);
        if command.configuration.output.contains(OutputOptions::JSON) {
            let plan = Plan {
                targets: &targets,
                actions: command.actions.iter().map(PlanEntry::of).collect(),
            };
            if command.configuration.output.contains(OutputOptions::PRETTY) {
                serde_json::to_writer_pretty(&mut self.writer, &plan)?;
            } else {
                serde_json::to_writer(&mut self.writer, &plan)?;
            }
            writeln!(self.writer)?;
        } else {
            writeln!(self.writer, "targets: {targets}")?;
            for action in &command.actions {
                match action.subject() {
                    Some(subject) => {
                        writeln!(self.writer, "would {} {}", action.event_name(), subject)?;
                    }
                    None => writeln!(self.writer, "would {}", action.event_name())?,
                }
            }
        }
        Ok(())
    }
}

pub fn run(command: &Command) {
    let stdout = io::stdout();
    let mut printer = PlanPrinter::new(stdout.lock());
    if let Err(error) = printer.dispatch(command) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
