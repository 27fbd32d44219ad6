use crate::{
    ast::{Ast, NodeId},
    error::{
        ParseError,
        parse_error::{Construct, Expected},
    },
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals, including fused negative literals
/// - variables
/// - parenthesized expressions
/// - `sqrt(...)`
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT
///              | "(" expression ")"
///              | "sqrt" "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of a primary expression.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// The parsed node or a `ParseError` naming what was found instead.
pub fn parse_primary(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    match tokens.peek_kind() {
        Some(kind @ (TokenKind::Number | TokenKind::Variable)) => {
            let index = tokens.expect(kind)?;
            ast.leaf(index)
        },
        Some(TokenKind::LParen) => parse_grouping(tokens, ast),
        Some(TokenKind::SquareRoot) => parse_square_root(tokens, ast),
        found => Err(ParseError::UnexpectedToken { expected: Expected::Operand,
                                                   found }),
    }
}

/// Parses `"(" expression ")"`.
///
/// Groups create no node of their own; the inner expression is returned.
fn parse_grouping(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    tokens.expect(TokenKind::LParen)?;
    let inner = parse_expression(tokens, ast)?;
    close_paren(tokens, Construct::Group)?;
    Ok(inner)
}

/// Parses `"sqrt" "(" expression ")"` into a node whose left child is the
/// argument.
fn parse_square_root(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    let op = tokens.expect(TokenKind::SquareRoot)?;
    tokens.expect(TokenKind::LParen)?;
    let argument = parse_expression(tokens, ast)?;
    close_paren(tokens, Construct::SquareRoot)?;
    ast.unary(op, argument)
}

fn close_paren(tokens: &mut TokenStream<'_, '_>, construct: Construct) -> ParseResult<usize> {
    if tokens.at(TokenKind::RParen) {
        return tokens.expect(TokenKind::RParen);
    }
    Err(ParseError::MissingCloseParen { construct,
                                        found: tokens.peek_kind() })
}
