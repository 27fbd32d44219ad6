use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning a line of text into tokens: overlong lexemes and
/// characters the language does not know.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree: unexpected tokens, unbalanced
/// parentheses, leftover input and arena exhaustion.
pub mod parse_error;
/// Evaluation errors.
///
/// Only structural failures live here. Arithmetic edge cases such as division
/// by zero or undefined variables are not errors; they evaluate to NaN.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of one tokenize, parse and evaluate cycle.
///
/// Each variant aborts the current line only. Variables assigned by earlier
/// lines stay valid.
#[derive(Debug, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a statement.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation hit an internal inconsistency.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The line does not fit the input buffer.
    #[error("Input line is too long: {length} bytes, at most {limit} are accepted.")]
    InputTooLong {
        /// Length of the rejected line in bytes.
        length: usize,
        /// The largest accepted length.
        limit:  usize,
    },
}

impl Error {
    /// Returns `true` for failures that point at an interpreter bug rather
    /// than at the user's input.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self,
                 Self::Eval(_) | Self::Parse(ParseError::NodeBufferOverflow { .. }))
    }
}
