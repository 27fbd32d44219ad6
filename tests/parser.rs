use arbcalc::{
    ast::{Ast, Node, NodeId},
    error::{ParseError, parse_error::Expected},
    interpreter::{
        lexer::{Token, TokenKind, tokenize_line},
        parser::parse,
    },
};
use pretty_assertions::assert_eq;

/// Renders the tree of `line` as an S-expression of lexemes.
fn render(line: &str) -> String {
    let tokens = tokenize_line(line).unwrap();
    let mut ast = Ast::new();
    let root = parse(&tokens, &mut ast).unwrap();
    walk(&ast, &tokens, root)
}

fn walk(ast: &Ast, tokens: &[Token<'_>], id: NodeId) -> String {
    let node = ast.get(id).unwrap();
    let lexeme = tokens[node.token].lexeme();
    match (node.left, node.right) {
        (None, None) => lexeme.into_owned(),
        (Some(left), None) => format!("({lexeme} {})", walk(ast, tokens, left)),
        (Some(left), Some(right)) => {
            format!("({lexeme} {} {})", walk(ast, tokens, left), walk(ast, tokens, right))
        },
        (None, Some(_)) => panic!("node {id} has a right child only"),
    }
}

fn error(line: &str) -> ParseError {
    let tokens = tokenize_line(line).unwrap();
    parse(&tokens, &mut Ast::new()).unwrap_err()
}

#[test]
fn precedence_levels() {
    assert_eq!(render("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(render("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(render("2 * 3 ^ 2"), "(* 2 (^ 3 2))");
    assert_eq!(render("8 % 3 / 2"), "(/ (% 8 3) 2)");
}

#[test]
fn associativity() {
    assert_eq!(render("8 - 3 - 2"), "(- (- 8 3) 2)");
    assert_eq!(render("2 ^ 3 ^ 2"), "(^ 2 (^ 3 2))");
}

#[test]
fn groups_and_square_roots() {
    assert_eq!(render("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(render("((4))"), "4");
    assert_eq!(render("sqrt(x + 1) ^ 2"), "(^ (sqrt (+ x 1)) 2)");
}

#[test]
fn assignment_is_statement_level() {
    assert_eq!(render("x = 1 + 2"), "(= x (+ 1 2))");
    assert_eq!(render("x"), "x");
    assert_eq!(render("x + 1"), "(+ x 1)");
    assert_eq!(render("y = -3"), "(= y -3)");
}

#[test]
fn nodes_are_allocated_children_first() {
    let tokens = tokenize_line("1 + 2").unwrap();
    let mut ast = Ast::new();
    let root = parse(&tokens, &mut ast).unwrap();

    assert_eq!(root.index(), 2);
    let nodes = ast.nodes();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], Node::leaf(0));
    assert_eq!(nodes[1], Node::leaf(2));
    assert_eq!(nodes[2].token, 1);
    assert_eq!(nodes[2].left.map(NodeId::index), Some(0));
    assert_eq!(nodes[2].right.map(NodeId::index), Some(1));
    assert_eq!(ast.limit(), 4);
}

#[test]
fn arena_is_reset_between_statements() {
    let mut ast = Ast::new();

    let long = tokenize_line("1 + 2 + 3 + 4").unwrap();
    parse(&long, &mut ast).unwrap();
    assert_eq!(ast.len(), 7);
    assert_eq!(ast.limit(), 8);

    let short = tokenize_line("5").unwrap();
    parse(&short, &mut ast).unwrap();
    assert_eq!(ast.len(), 1);
    assert_eq!(ast.limit(), 8);
}

#[test]
fn arena_limit_is_enforced() {
    let mut ast = Ast::new();
    ast.prepare(0);
    ast.leaf(0).unwrap();
    assert_eq!(ast.leaf(1), Err(ParseError::NodeBufferOverflow { limit: 1 }));
}

#[test]
fn incomplete_input() {
    assert_eq!(error("1 +"),
               ParseError::UnexpectedToken { expected: Expected::Operand,
                                             found:    None, });
    assert_eq!(error("x ="),
               ParseError::UnexpectedToken { expected: Expected::Operand,
                                             found:    None, });
    assert_eq!(error("* 2"),
               ParseError::UnexpectedToken { expected: Expected::Operand,
                                             found:    Some(TokenKind::Multiply), });
    assert_eq!(error("sqrt"),
               ParseError::UnexpectedToken { expected: Expected::Token(TokenKind::LParen),
                                             found:    None, });
}

#[test]
fn error_messages() {
    assert_eq!(error("(1").to_string(),
               "Missing closing parenthesis for parenthesized expression, found end of input.");
    assert_eq!(error("1 +").to_string(),
               "Expected a number, a variable, '(' or 'sqrt', found end of input.");
    assert_eq!(error("sqrt 2").to_string(), "Expected '(', found number.");
    assert_eq!(error("2 )").to_string(), "Extra tokens after the statement, starting at ')'.");
}
