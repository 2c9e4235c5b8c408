//! Parse failure taxonomy.

/// Why a parser rejected its input.
///
/// Errors are plain data; combinators either propagate them unchanged or
/// recover from them wholesale (`optional`, `fallback`, `alternative`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token list ended before the grammar was satisfied.
    #[error("End of Input")]
    EndOfInput,

    /// A token failed to match a literal or any branch of a choice.
    #[error("'{actual}' does not match '{expected}'")]
    DoesNotMatch { expected: String, actual: String },

    /// A token was not convertible to the requested value type.
    #[error("{token} could not be interpreted as {type_name}")]
    CouldNotInterpret { type_name: String, token: String },

    #[error("{0}")]
    Custom(String),
}

impl ParseError {
    pub fn does_not_match(expected: impl Into<String>, actual: impl Into<String>) -> ParseError {
        ParseError::DoesNotMatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn could_not_interpret(
        type_name: impl Into<String>,
        token: impl Into<String>,
    ) -> ParseError {
        ParseError::CouldNotInterpret {
            type_name: type_name.into(),
            token: token.into(),
        }
    }

    pub fn custom(message: impl Into<String>) -> ParseError {
        ParseError::Custom(message.into())
    }
}
