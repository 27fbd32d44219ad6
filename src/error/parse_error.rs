use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// What a grammar rule was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The start of an operand: a number, a variable, `(` or `sqrt`.
    Operand,
    /// One specific token kind.
    Token(TokenKind),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand => write!(f, "a number, a variable, '(' or 'sqrt'"),
            Self::Token(kind) => write!(f, "{kind}"),
        }
    }
}

/// The parenthesized construct that was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A plain `( expression )` group.
    Group,
    /// The argument list of `sqrt( expression )`.
    SquareRoot,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "parenthesized expression"),
            Self::SquareRoot => write!(f, "sqrt"),
        }
    }
}

#[allow(clippy::ref_option)]
fn describe(found: &Option<TokenKind>) -> String {
    found.map_or_else(|| "end of input".to_string(), |kind| kind.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a statement.
pub enum ParseError {
    /// A grammar rule met a token (or the end of input) it has no rule for.
    #[error("Expected {expected}, found {}.", describe(.found))]
    UnexpectedToken {
        /// What the rule was looking for.
        expected: Expected,
        /// The token kind found instead; `None` at end of input.
        found:    Option<TokenKind>,
    },
    /// A `(` was never closed.
    #[error("Missing closing parenthesis for {construct}, found {}.", describe(.found))]
    MissingCloseParen {
        /// The construct that was left open.
        construct: Construct,
        /// The token kind found instead; `None` at end of input.
        found:     Option<TokenKind>,
    },
    /// A complete statement was followed by more tokens.
    #[error("Extra tokens after the statement, starting at '{lexeme}'.")]
    TrailingToken {
        /// Kind of the first leftover token.
        kind:   TokenKind,
        /// Text of the first leftover token.
        lexeme: String,
    },
    /// The node arena was too small for the statement.
    #[error("AST node buffer overflow (limit: {limit} nodes).")]
    NodeBufferOverflow {
        /// The arena limit in force during the parse.
        limit: usize,
    },
}

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;
