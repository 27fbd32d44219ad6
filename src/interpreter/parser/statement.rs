use crate::{
    ast::{Ast, NodeId},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment or an expression. Assignment is
/// recognized by two-token lookahead, a variable immediately followed by `=`,
/// and only here: it cannot appear inside an expression, so `a = (b = 3)`
/// fails at the inner `=`, where the group expects its `)`.
///
/// Grammar:
/// ```text
///     statement := IDENT "=" expression
///                | expression
/// ```
///
/// The assignment node has the `=` token, the variable leaf on the left and
/// the value expression on the right.
///
/// # Parameters
/// - `tokens`: Token cursor at the start of the line.
/// - `ast`: Arena receiving the nodes.
///
/// # Returns
/// The root node of the statement.
pub fn parse_statement(tokens: &mut TokenStream<'_, '_>, ast: &mut Ast) -> ParseResult<NodeId> {
    if tokens.peek_kind() == Some(TokenKind::Variable)
       && tokens.peek_second_kind() == Some(TokenKind::Assign)
    {
        let name = tokens.expect(TokenKind::Variable)?;
        let target = ast.leaf(name)?;
        let assign = tokens.expect(TokenKind::Assign)?;
        let value = parse_expression(tokens, ast)?;
        return ast.binary(assign, target, value);
    }

    parse_expression(tokens, ast)
}
