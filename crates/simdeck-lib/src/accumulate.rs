//! Folding repeated matches into one value.
//!
//! Grammars like `--json --kill-all --json` match the same family of
//! parsers any number of times, in any order. The combinators here run an
//! [`Parser::alternative`] repeatedly and fold the results, either through
//! the [`Accumulator`] trait or through bitflag union.

use bitflags::Flags;

use crate::parser::Parser;

/// Values that can absorb another instance of themselves.
///
/// `append` keeps `other`'s fields wherever the two sides conflict, so
/// later matches override earlier ones.
pub trait Accumulator: Default {
    fn append(self, other: Self) -> Self;
}

impl<A: Accumulator + 'static> Parser<A> {
    /// At least `count` matches drawn from `parsers`, appended in match
    /// order onto the default value.
    pub fn accumulate(count: usize, parsers: Vec<Parser<A>>) -> Parser<A> {
        Parser::alternative_many(count, parsers)
            .map(|values| values.into_iter().fold(A::default(), Accumulator::append))
    }
}

impl<A: Flags + 'static> Parser<A> {
    /// At least `count` flag sets drawn from `parsers`, ORed together.
    pub fn union(count: usize, parsers: Vec<Parser<A>>) -> Parser<A> {
        Parser::alternative_many(count, parsers)
            .map(|values| values.into_iter().fold(A::empty(), A::union))
    }
}
