use tracing::{debug, trace};

use crate::{
    ast::{Ast, NodeId},
    error::{ParseError, parse_error::Expected},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub use crate::error::parse_error::ParseResult;

/// Lookahead cursor over the tokens of one statement.
///
/// Grammar rules never index the token slice themselves; they peek, consume
/// and receive the index of the consumed token, which is what AST nodes
/// store.
#[derive(Debug, Clone)]
pub struct TokenStream<'t, 'src> {
    tokens:   &'t [Token<'src>],
    position: usize,
}

impl<'t, 'src> TokenStream<'t, 'src> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Token<'src>]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.position)
    }

    /// Kind of the next token.
    #[must_use]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Kind of the token after the next one.
    #[must_use]
    pub fn peek_second_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.position + 1).map(|token| token.kind)
    }

    /// Returns `true` if the next token has kind `kind`.
    #[must_use]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consumes the next token and returns its index.
    pub fn advance(&mut self) -> Option<usize> {
        let token = self.peek()?;
        trace!(%token, "consumed");
        let index = self.position;
        self.position += 1;
        Some(index)
    }

    /// Consumes the next token if it has kind `kind`.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedToken`] naming `kind` and what was found.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<usize> {
        if self.at(kind) {
            return self.advance()
                       .ok_or(ParseError::UnexpectedToken { expected: Expected::Token(kind),
                                                            found:    None, });
        }
        Err(ParseError::UnexpectedToken { expected: Expected::Token(kind),
                                          found:    self.peek_kind(), })
    }

    /// Index of the next token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing below statement level.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// The root of the parsed expression.
pub fn parse_expression(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    parse_additive(tokens, ast)
}

/// Parses one statement into `ast` and returns its root.
///
/// The arena is reset and sized for `tokens` before parsing starts, so every
/// node of the previous statement is discarded. The whole token sequence
/// must form exactly one statement.
///
/// # Parameters
/// - `tokens`: Tokens of one line, as produced by the lexer.
/// - `ast`: Arena receiving the nodes.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] when a rule meets a token it cannot use,
///   or the end of input.
/// - [`ParseError::MissingCloseParen`] for an unbalanced `(`.
/// - [`ParseError::TrailingToken`] when tokens remain after the statement.
/// - [`ParseError::NodeBufferOverflow`] if the arena is too small; this is a
///   sizing bug, not an input error.
///
/// # Example
/// ```
/// use arbcalc::{
///     ast::Ast,
///     interpreter::{lexer::tokenize_line, parser::parse},
/// };
///
/// let tokens = tokenize_line("2 ^ 3 ^ 2").unwrap();
/// let mut ast = Ast::new();
/// let root = parse(&tokens, &mut ast).unwrap();
///
/// // The root is the first `^`; its right child is the second one.
/// let node = ast.get(root).unwrap();
/// assert_eq!(node.token, 1);
/// assert_eq!(ast.get(node.right.unwrap()).unwrap().token, 3);
/// ```
pub fn parse(tokens: &[Token<'_>], ast: &mut Ast) -> ParseResult<NodeId> {
    ast.prepare(tokens.len());
    let mut stream = TokenStream::new(tokens);

    let root = parse_statement(&mut stream, ast)?;

    if let Some(token) = stream.peek() {
        return Err(ParseError::TrailingToken { kind:   token.kind,
                                               lexeme: token.lexeme().into_owned(), });
    }

    debug!(tokens = tokens.len(), nodes = ast.len(), root = %root, "statement parsed");
    Ok(root)
}
