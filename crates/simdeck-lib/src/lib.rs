//! Command-token parsing with self-documenting grammars.
//!
//! A [`Parser`] consumes a prefix of a pre-tokenized argument list and
//! yields a typed value together with the remaining tokens, or a
//! [`ParseError`]. Every parser also carries a [`Description`] of the
//! grammar it matches; the two halves are composed together by each
//! combinator, so usage text never has to be written by hand.
//!
//! # Example
//!
//! ```
//! use simdeck_lib::Parser;
//!
//! let parser = Parser::alternative(vec![
//!     Parser::of_string("boot", "starting"),
//!     Parser::of_string("shutdown", "stopping"),
//! ]);
//!
//! let tokens = vec!["boot".to_string(), "now".to_string()];
//! let (remaining, phase) = parser.parse(&tokens).expect("known keyword");
//! assert_eq!(phase, "starting");
//! assert_eq!(remaining, ["now".to_string()]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod accumulate;
mod error;
mod parser;
pub mod primitives;


pub use accumulate::Accumulator;
pub use error::ParseError;
pub use parser::{Parsable, Parsed, Parser};
pub use simdeck_core::Description;
