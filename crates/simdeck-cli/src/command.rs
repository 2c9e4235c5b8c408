//! The fully parsed shape of an invocation.

use serde::Serialize;
use simdeck_lib::ParseError;

use crate::actions::Action;
use crate::config::{Configuration, OutputOptions};
use crate::query::Query;

/// One column of `list` output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatField {
    Udid,
    Name,
    Model,
    Os,
    State,
    Arch,
}

impl FormatField {
    fn from_token(token: &str) -> Option<FormatField> {
        match token {
            "udid" => Some(FormatField::Udid),
            "name" => Some(FormatField::Name),
            "model" => Some(FormatField::Model),
            "os" => Some(FormatField::Os),
            "state" => Some(FormatField::State),
            "arch" => Some(FormatField::Arch),
            _ => None,
        }
    }
}

/// The columns to show for each target, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format(pub Vec<FormatField>);

impl Format {
    /// Parses a comma-separated field list like `name,os,state`.
    pub fn from_specifier(token: &str) -> Result<Format, ParseError> {
        let mut fields = Vec::new();
        for part in token.split(',') {
            let field = FormatField::from_token(part)
                .ok_or_else(|| ParseError::could_not_interpret("Format", token))?;
            fields.push(field);
        }
        Ok(Format(fields))
    }
}

/// A configuration, a target selection, and the actions to run against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub configuration: Configuration,
    pub actions: Vec<Action>,
    pub query: Option<Query>,
    pub format: Option<Format>,
}

/// A request for usage text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Help {
    #[serde(serialize_with = "crate::config::flag_names")]
    pub output: OutputOptions,
}

/// Every invocation the binary understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cli {
    /// Echo one parsed action back without running anything.
    Print(Action),
    Run(Command),
    Show(Help),
}
