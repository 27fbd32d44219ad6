use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// A number or a name exceeded the lexeme length limit.
    #[error("Error at column {column}: Lexeme is too long ({length} characters, at most {limit}).")]
    TooLong {
        /// Length of the offending lexeme.
        length: usize,
        /// The largest accepted length.
        limit:  usize,
        /// One-based column where the lexeme starts.
        column: usize,
    },
    /// A character that starts no token.
    #[error("Error at column {column}: Unrecognized character '{ch}'.")]
    UnrecognizedChar {
        /// The character.
        ch:     char,
        /// One-based column of the character.
        column: usize,
    },
}
