use crate::{
    ast::{Ast, NodeId},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
/// is `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// The root of the additive expression.
pub fn parse_additive(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    let mut left = parse_multiplicative(tokens, ast)?;
    while let Some(TokenKind::Add | TokenKind::Sub) = tokens.peek_kind() {
        let Some(op) = tokens.advance() else { break };
        let right = parse_multiplicative(tokens, ast)?;
        left = ast.binary(op, left, right)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_, '_>,
                            ast: &mut Ast)
                            -> ParseResult<NodeId> {
    let mut left = parse_exponent(tokens, ast)?;
    while let Some(TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo) =
        tokens.peek_kind()
    {
        let Some(op) = tokens.advance() else { break };
        let right = parse_exponent(tokens, ast)?;
        left = ast.binary(op, left, right)?;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`, which falls
/// out of parsing the right operand with this same rule.
///
/// The rule is: `exponent := primary ("^" exponent)?`
///
/// # Parameters
/// - `tokens`: Token cursor.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    let base = parse_primary(tokens, ast)?;
    if tokens.at(TokenKind::Power)
       && let Some(op) = tokens.advance()
    {
        let exponent = parse_exponent(tokens, ast)?;
        return ast.binary(op, base, exponent);
    }
    Ok(base)
}
