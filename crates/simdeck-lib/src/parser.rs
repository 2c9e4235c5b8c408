//! The token parser and its combinators.
//!
//! # Architecture
//!
//! A `Parser<A>` is a description plus a pure function from a token slice to
//! `(remaining, A)` or a `ParseError`. Combinators compose both halves at
//! once and never mutate their inputs:
//!
//! - Consumption is strictly from the front; parsers hand back sub-slices of
//!   the slice they were given
//! - Backtracking is unbounded and unmemoized: `alternative` retries every
//!   branch against the original slice, `optional` and `fallback` rewind on
//!   failure
//! - Failure is only recoverable inside `optional`/`recover`/`fallback`/
//!   `alternative`; everywhere else the first error aborts the parse
//!
//! The run function lives behind an `Rc`, so cloning a parser is cheap and
//! grammars can reuse sub-parsers freely.

use std::fmt;
use std::rc::Rc;

use simdeck_core::Description;

use crate::error::ParseError;

/// Result of running a parser: the unconsumed tail plus the parsed value.
pub type Parsed<'t, A> = Result<(&'t [String], A), ParseError>;

type RunFn<A> = dyn for<'t> Fn(&'t [String]) -> Parsed<'t, A>;

/// A composable unit of token consumption, carrying the grammar it matches.
pub struct Parser<A> {
    description: Description,
    run: Rc<RunFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Parser<A> {
        Parser {
            description: self.description.clone(),
            run: Rc::clone(&self.run),
        }
    }
}

/// Shows the grammar summary, which is how parsers are quoted in errors.
impl<A> fmt::Display for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description.summary())
    }
}

impl<A: 'static> Parser<A> {
    fn new(
        description: Description,
        run: impl for<'t> Fn(&'t [String]) -> Parsed<'t, A> + 'static,
    ) -> Parser<A> {
        Parser {
            description,
            run: Rc::new(run),
        }
    }

    /// Apply this parser to a token slice.
    pub fn parse<'t>(&self, tokens: &'t [String]) -> Parsed<'t, A> {
        (self.run)(tokens)
    }

    /// The grammar this parser matches.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Consume exactly one token and interpret it with `interpret`.
    ///
    /// Fails with [`ParseError::EndOfInput`] on an empty slice; any error
    /// from `interpret` is propagated as-is.
    pub fn single(
        description: Description,
        interpret: impl Fn(&str) -> Result<A, ParseError> + 'static,
    ) -> Parser<A> {
        Parser::new(description, move |tokens| match tokens.split_first() {
            None => Err(ParseError::EndOfInput),
            Some((first, rest)) => Ok((rest, interpret(first)?)),
        })
    }

    /// Match one case-sensitive literal token, yielding `value`.
    pub fn of_string(text: &str, value: A) -> Parser<A>
    where
        A: Clone,
    {
        let text = text.to_string();
        let description = Description::command(&text);
        Parser::single(description, move |token| {
            if token == text {
                Ok(value.clone())
            } else {
                Err(ParseError::does_not_match(&text, token))
            }
        })
    }

    /// Match the literal `--name`, yielding `value`.
    pub fn of_flag(name: &str, value: A, doc: &str) -> Parser<A>
    where
        A: Clone,
    {
        Parser::of_string(&format!("--{name}"), value).describe(Description::flag(name, doc))
    }

    /// A flag taking an argument, in both `--name value` and `--name=value`
    /// forms.
    ///
    /// In the `=` form the value is re-parsed as a one-token list after
    /// trimming surrounding single quotes, so `--locale='en_US'` and
    /// `--locale en_US` agree.
    pub fn of_flag_with_arg(name: &str, arg: Parser<A>, doc: &str) -> Parser<A> {
        let description = Description::primitive(name, doc);
        let prefix = format!("--{name}=");
        let equal_arg = arg.clone();
        let equal_form = Parser::single(description.clone(), move |token| {
            let Some(value) = token.strip_prefix(prefix.as_str()) else {
                return Err(ParseError::does_not_match(&prefix, token));
            };
            let value = value.trim_matches('\'').to_string();
            let (_, parsed) = equal_arg.parse(&[value])?;
            Ok(parsed)
        });
        let spaced_form = Parser::of_flag(name, (), doc).ignore_then(arg);
        Parser::alternative(vec![equal_form, spaced_form]).describe(description)
    }

    /// A literal keyword followed by an argument, keeping the argument.
    pub fn of_command_with_arg(text: &str, arg: Parser<A>) -> Parser<A> {
        Parser::of_string(text, ()).ignore_then(arg)
    }

    /// Always fail with `error`, matching nothing.
    pub fn fail(error: ParseError) -> Parser<A> {
        Parser::new(Description::choice(Vec::new()), move |_| Err(error.clone()))
    }

    /// Transform the parsed value; errors pass through unchanged.
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Parser<B> {
        let Parser { description, run } = self;
        Parser::new(description, move |tokens| {
            let (rest, value) = run(tokens)?;
            Ok((rest, f(value)))
        })
    }

    /// Sequence a parser chosen from the first parser's value.
    ///
    /// The description stays the first parser's; composites re-describe
    /// themselves explicitly.
    pub fn bind<B: 'static>(self, f: impl Fn(A) -> Parser<B> + 'static) -> Parser<B> {
        let Parser { description, run } = self;
        Parser::new(description, move |tokens| {
            let (rest, value) = run(tokens)?;
            f(value).parse(rest)
        })
    }

    /// Replace the description, keeping the behavior.
    pub fn describe(self, description: Description) -> Parser<A> {
        Parser {
            description,
            run: self.run,
        }
    }

    /// Wrap the description in a named help section.
    pub fn sectionize(self, tag: &str, name: &str, doc: &str) -> Parser<A> {
        let Parser { description, run } = self;
        Parser {
            description: Description::section(tag, name, doc, description),
            run,
        }
    }

    /// Prefix the description with the invoking program's name.
    pub fn top_level(self, program: &str) -> Parser<A> {
        let Parser { description, run } = self;
        Parser {
            description: Description::sequence(vec![Description::command(program), description]),
            run,
        }
    }

    /// Render a choice description one branch per line.
    pub fn with_expanded_description(self) -> Parser<A> {
        let Parser { description, run } = self;
        let description = match description {
            Description::Choice { children, .. } => Description::Choice {
                children,
                expanded: true,
            },
            other => other,
        };
        Parser { description, run }
    }

    /// Never fails: `None` on failure, rewound to the original tokens.
    pub fn optional(self) -> Parser<Option<A>> {
        let Parser { description, run } = self;
        Parser::new(Description::optional(description), move |tokens| {
            match run(tokens) {
                Ok((rest, value)) => Ok((rest, Some(value))),
                Err(_) => Ok((tokens, None)),
            }
        })
    }

    /// On failure, substitute `f(error)` without consuming anything.
    pub fn recover(self, f: impl Fn(ParseError) -> A + 'static) -> Parser<A> {
        let Parser { description, run } = self;
        Parser::new(description, move |tokens| match run(tokens) {
            Ok(success) => Ok(success),
            Err(error) => Ok((tokens, f(error))),
        })
    }

    /// On failure, substitute `value` without consuming anything.
    pub fn fallback(self, value: A) -> Parser<A>
    where
        A: Clone,
    {
        self.recover(move |_| value.clone())
    }

    /// Run `self` then `other`, pairing the values.
    pub fn then<B: 'static>(self, other: Parser<B>) -> Parser<(A, B)> {
        let Parser {
            description: first_desc,
            run: first,
        } = self;
        let Parser {
            description: second_desc,
            run: second,
        } = other;
        Parser::new(
            Description::sequence(vec![first_desc, second_desc]),
            move |tokens| {
                let (rest, a) = first(tokens)?;
                let (rest, b) = second(rest)?;
                Ok((rest, (a, b)))
            },
        )
    }

    /// Run `self` then `other`, keeping only `other`'s value.
    pub fn ignore_then<B: 'static>(self, other: Parser<B>) -> Parser<B> {
        let Parser {
            description: first_desc,
            run: first,
        } = self;
        let Parser {
            description: second_desc,
            run: second,
        } = other;
        Parser::new(
            Description::sequence(vec![first_desc, second_desc]),
            move |tokens| {
                let (rest, _) = first(tokens)?;
                second(rest)
            },
        )
    }

    /// Run `self` then `other`, keeping only `self`'s value.
    pub fn then_ignore<B: 'static>(self, other: Parser<B>) -> Parser<A> {
        let Parser {
            description: first_desc,
            run: first,
        } = self;
        let Parser {
            description: second_desc,
            run: second,
        } = other;
        Parser::new(
            Description::sequence(vec![first_desc, second_desc]),
            move |tokens| {
                let (rest, a) = first(tokens)?;
                let (rest, _) = second(rest)?;
                Ok((rest, a))
            },
        )
    }

    /// Three parsers in order, as a flat triple.
    pub fn seq3<B: 'static, C: 'static>(
        a: Parser<A>,
        b: Parser<B>,
        c: Parser<C>,
    ) -> Parser<(A, B, C)> {
        let description = Description::sequence(vec![
            a.description.clone(),
            b.description.clone(),
            c.description.clone(),
        ]);
        a.then(b)
            .then(c)
            .map(|((a, b), c)| (a, b, c))
            .describe(description)
    }

    /// Four parsers in order, as a flat quadruple.
    pub fn seq4<B: 'static, C: 'static, D: 'static>(
        a: Parser<A>,
        b: Parser<B>,
        c: Parser<C>,
        d: Parser<D>,
    ) -> Parser<(A, B, C, D)> {
        let description = Description::sequence(vec![
            a.description.clone(),
            b.description.clone(),
            c.description.clone(),
            d.description.clone(),
        ]);
        a.then(b)
            .then(c)
            .then(d)
            .map(|(((a, b), c), d)| (a, b, c, d))
            .describe(description)
    }

    /// Try each parser in order against the original tokens; first success
    /// wins. Exhausting every branch fails with the choice summary.
    pub fn alternative(parsers: Vec<Parser<A>>) -> Parser<A> {
        let description =
            Description::choice(parsers.iter().map(|p| p.description.clone()).collect());
        let expected = description.summary();
        Parser::new(description, move |tokens| {
            for parser in &parsers {
                if let Ok(success) = parser.parse(tokens) {
                    return Ok(success);
                }
            }
            Err(ParseError::does_not_match(
                expected.clone(),
                format!("{tokens:?}"),
            ))
        })
    }

    /// Zero or more repetitions of `parser`.
    pub fn many(parser: Parser<A>) -> Parser<Vec<A>> {
        Parser::many_count(0, parser)
    }

    /// At least `count` repetitions of `parser`.
    pub fn many_count(count: usize, parser: Parser<A>) -> Parser<Vec<A>> {
        Parser::many_sep_count(count, parser, Parser::passthrough())
    }

    /// At least `count` repetitions of `parser`, with `separator` between
    /// them.
    ///
    /// Repetition stops at the first failing value or separator. A separator
    /// matched after the final value is consumed even though nothing follows
    /// it.
    pub fn many_sep_count(
        count: usize,
        parser: Parser<A>,
        separator: Parser<()>,
    ) -> Parser<Vec<A>> {
        let description = Description::at_least_sep(
            count,
            parser.description.clone(),
            separator.description.clone(),
        );
        let item_summary = parser.description.summary();
        Parser::new(description, move |tokens| {
            let mut remaining = tokens;
            let mut values = Vec::new();
            while !remaining.is_empty() {
                let len_before = remaining.len();
                match parser.parse(remaining) {
                    Ok((rest, value)) => {
                        values.push(value);
                        remaining = rest;
                    }
                    Err(_) => break,
                }
                match separator.parse(remaining) {
                    Ok((rest, ())) => remaining = rest,
                    Err(_) => break,
                }
                // An iteration that consumed nothing would never stop.
                if remaining.len() == len_before {
                    break;
                }
            }
            if values.len() < count {
                return Err(ParseError::custom(format!(
                    "Only {} of {}",
                    values.len(),
                    item_summary
                )));
            }
            Ok((remaining, values))
        })
    }

    /// Repetitions of `parser` until `terminator` matches or input runs out.
    ///
    /// The terminator's tokens are consumed along with the repetition. A
    /// value that fails before the terminator is reached aborts the whole
    /// parse.
    pub fn many_till<B: 'static>(terminator: Parser<B>, parser: Parser<A>) -> Parser<Vec<A>> {
        let description = Description::sequence(vec![
            Description::at_least(0, parser.description.clone()),
            Description::optional(terminator.description.clone()),
        ]);
        Parser::new(description, move |tokens| {
            let mut remaining = tokens;
            let mut values = Vec::new();
            while !remaining.is_empty() {
                if let Ok((rest, _)) = terminator.parse(remaining) {
                    remaining = rest;
                    break;
                }
                let (rest, value) = parser.parse(remaining)?;
                values.push(value);
                remaining = rest;
            }
            Ok((remaining, values))
        })
    }

    /// At least `count` matches drawn from `parsers`, in any order.
    pub fn alternative_many(count: usize, parsers: Vec<Parser<A>>) -> Parser<Vec<A>> {
        Parser::many_count(count, Parser::alternative(parsers))
    }

    /// Require that nothing remains after this parser.
    pub fn exhaustive(self) -> Parser<A> {
        self.then_ignore(Parser::no_remaining())
    }
}

impl Parser<()> {
    /// Consume nothing and succeed; the empty sequence.
    pub fn passthrough() -> Parser<()> {
        Parser::new(Description::sequence(Vec::new()), |tokens| Ok((tokens, ())))
    }

    /// Succeed only when no tokens remain.
    pub fn no_remaining() -> Parser<()> {
        Parser::new(Description::sequence(Vec::new()), |tokens| {
            if tokens.is_empty() {
                Ok((tokens, ()))
            } else {
                Err(ParseError::custom(format!(
                    "There were remaining tokens {tokens:?}"
                )))
            }
        })
    }
}

impl Parser<bool> {
    /// `--name` as `true`, absent as `false`; never fails.
    pub fn of_flag_bool(name: &str, doc: &str) -> Parser<bool> {
        Parser::of_flag(name, true, doc).fallback(false)
    }
}

/// Types that publish their own grammar.
pub trait Parsable: Sized {
    fn parser() -> Parser<Self>;
}
