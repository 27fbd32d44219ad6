use std::{borrow::Cow, fmt};

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Longest accepted number or name, in bytes.
pub const TOKEN_LEXEME_LEN_LIMIT: usize = 255;

/// The kind of a lexical token.
///
/// Every kind except [`TokenKind::Number`] and [`TokenKind::Variable`] has a
/// fixed lexeme. Brackets are recognized but no grammar rule accepts them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum TokenKind {
    /// Numeric literal such as `42`, `3.5`, `3,5` or `7.`.
    #[regex(r"[0-9]+([.,][0-9]*)?")]
    Number,
    /// Variable name made of ASCII letters and underscores, such as `x_max`.
    #[regex(r"[A-Za-z_]+")]
    Variable,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `*`
    #[token("*")]
    Multiply,
    /// `^`
    #[token("^")]
    Power,
    /// `sqrt`
    #[token("sqrt")]
    SquareRoot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
}

impl TokenKind {
    /// Returns `true` if a `-` following this kind is a binary subtraction.
    ///
    /// After anything else (or at the start of a line) `-` is a sign fused
    /// into the next numeric literal.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::Variable | Self::RParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Assign => "'='",
            Self::Add => "'+'",
            Self::Sub => "'-'",
            Self::Divide => "'/'",
            Self::Modulo => "'%'",
            Self::Multiply => "'*'",
            Self::Power => "'^'",
            Self::SquareRoot => "'sqrt'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
        };
        f.write_str(name)
    }
}

/// A token borrowed from the line it was read from.
///
/// `text` is a slice of the input, never a copy, so a token cannot outlive
/// its line. For a fused unary-minus literal `text` holds the digits only and
/// `negative` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token kind.
    pub kind:     TokenKind,
    /// The lexeme as it appears in the input.
    pub text:     &'src str,
    /// Set only on a numeric literal preceded by a unary minus.
    pub negative: bool,
}

impl<'src> Token<'src> {
    /// Creates a token with a positive sign.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind,
               text,
               negative: false }
    }

    /// Length of the lexeme in bytes, without the fused sign.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for the empty literal produced by a dangling `-`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the lexeme with the fused sign applied.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::lexer::tokenize_line;
    ///
    /// let tokens = tokenize_line("-12").unwrap();
    /// assert_eq!(tokens[0].text, "12");
    /// assert_eq!(tokens[0].lexeme(), "-12");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> Cow<'src, str> {
        if self.negative {
            Cow::Owned(format!("-{}", self.text))
        } else {
            Cow::Borrowed(self.text)
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.lexeme())
    }
}

/// Splits one line of input into tokens.
///
/// `tokens` is cleared first and then filled in source order, so its
/// allocation can be reused from line to line. ASCII whitespace separates
/// tokens and is otherwise ignored.
///
/// A `-` at the start of the line, or after anything but a number, a variable
/// or `)`, is a sign: spaces after it are skipped and the following digits
/// (with at most one `.` or `,`) become a single negative number token. When
/// no digits follow, that token is empty and evaluates to NaN.
///
/// # Parameters
/// - `line`: The input line, without its trailing newline.
/// - `tokens`: Output buffer, borrowed for the lifetime of `line`.
///
/// # Errors
/// - [`LexError::TooLong`] if a number or name exceeds
///   [`TOKEN_LEXEME_LEN_LIMIT`].
/// - [`LexError::UnrecognizedChar`] for a character that starts no token.
///
/// On error `tokens` holds the tokens read so far and must not be parsed.
pub fn tokenize<'src>(line: &'src str, tokens: &mut Vec<Token<'src>>) -> Result<(), LexError> {
    tokens.clear();
    let mut lexer = TokenKind::lexer(line);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(kind) = result else {
            let ch = lexer.slice().chars().next().unwrap_or('\u{FFFD}');
            return Err(LexError::UnrecognizedChar { ch,
                                                    column: span.start + 1 });
        };

        let token = if kind == TokenKind::Sub
                       && tokens.last().is_none_or(|previous| !previous.kind.ends_operand())
        {
            let remainder = lexer.remainder();
            let spaces = remainder.bytes().take_while(|&b| b == b' ').count();
            let digits = signed_literal_len(&remainder[spaces..]);
            lexer.bump(spaces + digits);

            let start = span.end + spaces;
            Token { kind:     TokenKind::Number,
                    text:     &line[start..start + digits],
                    negative: true, }
        } else {
            Token::new(kind, lexer.slice())
        };

        if matches!(token.kind, TokenKind::Number | TokenKind::Variable)
           && token.len() > TOKEN_LEXEME_LEN_LIMIT
        {
            return Err(LexError::TooLong { length: token.len(),
                                           limit:  TOKEN_LEXEME_LEN_LIMIT,
                                           column: span.start + 1, });
        }

        trace!(token = %token, "token");
        tokens.push(token);
    }

    trace!(count = tokens.len(), "tokenization completed");
    Ok(())
}

/// Tokenizes a line into a freshly allocated vector.
///
/// Convenience wrapper around [`tokenize`] for callers that do not recycle a
/// buffer.
///
/// # Errors
/// Same as [`tokenize`].
///
/// # Example
/// ```
/// use arbcalc::interpreter::lexer::{TokenKind, tokenize_line};
///
/// let kinds: Vec<_> = tokenize_line("x = sqrt(2) ^ 3")
///     .unwrap()
///     .iter()
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Variable,
///             TokenKind::Assign,
///             TokenKind::SquareRoot,
///             TokenKind::LParen,
///             TokenKind::Number,
///             TokenKind::RParen,
///             TokenKind::Power,
///             TokenKind::Number]);
/// ```
pub fn tokenize_line(line: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    tokenize(line, &mut tokens)?;
    Ok(tokens)
}

/// Length of the digit run (with at most one decimal separator after at
/// least one digit) at the start of `text`.
fn signed_literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if len > 0 && matches!(bytes.get(len), Some(b'.' | b',')) {
        len += 1;
        len += bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    len
}
