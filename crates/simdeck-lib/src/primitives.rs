//! Stock single-token parsers.
//!
//! Each parser here consumes exactly one token and is described as a
//! `Primitive`, which is what surfaces in the `Primitives:` block of
//! rendered usage text.

use std::fs;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use simdeck_core::Description;

use crate::error::ParseError;
use crate::parser::Parser;

/// A signed integer token.
pub fn of_int() -> Parser<i64> {
    Parser::single(Description::primitive("int", "Signed integer."), |token| {
        token
            .parse()
            .map_err(|_| ParseError::could_not_interpret("Int", token))
    })
}

/// A floating point token.
pub fn of_double() -> Parser<f64> {
    Parser::single(
        Description::primitive("double", "Double-precision floating point number."),
        |token| {
            token
                .parse()
                .map_err(|_| ParseError::could_not_interpret("Double", token))
        },
    )
}

/// Any single token, verbatim.
pub fn of_any() -> Parser<String> {
    Parser::single(
        Description::primitive("string", "String without spaces."),
        |token| Ok(token.to_string()),
    )
}

/// A token carrying a URL scheme, checked syntactically and never resolved.
pub fn of_url() -> Parser<String> {
    Parser::single(Description::primitive("url", "URL."), |token| {
        if has_url_scheme(token) {
            Ok(token.to_string())
        } else {
            Err(ParseError::could_not_interpret("URL", token))
        }
    })
}

fn has_url_scheme(token: &str) -> bool {
    let Some((scheme, _)) = token.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// A path that names an existing directory, checked against the filesystem.
pub fn of_existing_directory() -> Parser<String> {
    Parser::single(
        Description::primitive("directory", "Path to an existing directory."),
        |token| {
            let metadata = fs::metadata(token)
                .map_err(|_| ParseError::custom(format!("'{token}' should exist, but doesn't")))?;
            if !metadata.is_dir() {
                return Err(ParseError::custom(format!(
                    "'{token}' should be a directory, but isn't"
                )));
            }
            Ok(token.to_string())
        },
    )
}

/// A path that names an existing file, checked against the filesystem.
pub fn of_existing_file() -> Parser<String> {
    Parser::single(
        Description::primitive("file", "Path to an existing file."),
        |token| {
            let metadata = fs::metadata(token)
                .map_err(|_| ParseError::custom(format!("'{token}' should exist, but doesn't")))?;
            if !metadata.is_file() {
                return Err(ParseError::custom(format!(
                    "'{token}' should be a file, but isn't"
                )));
            }
            Ok(token.to_string())
        },
    )
}

/// A file path that need not exist. Rejects the `--` separator so path
/// lists cannot swallow it.
pub fn of_file() -> Parser<String> {
    Parser::single(Description::primitive("file", "Path to a file."), |token| {
        if token == "--" {
            return Err(ParseError::custom("Not a File Path"));
        }
        Ok(token.to_string())
    })
}

/// Seconds since the UNIX epoch. Negative and non-finite values are
/// rejected rather than folded into the epoch.
pub fn of_date() -> Parser<SystemTime> {
    Parser::single(
        Description::primitive("date", "Time since UNIX epoch (seconds)"),
        |token| {
            let seconds: f64 = token
                .parse()
                .map_err(|_| ParseError::could_not_interpret("Date", token))?;
            let since_epoch = Duration::try_from_secs_f64(seconds)
                .map_err(|_| ParseError::could_not_interpret("Date", token))?;
            UNIX_EPOCH
                .checked_add(since_epoch)
                .ok_or_else(|| ParseError::could_not_interpret("Date", token))
        },
    )
}

/// The literal `--` token that separates grammar regions.
pub fn of_dash_separator() -> Parser<()> {
    Parser::of_string("--", ())
}
