use arbcalc::{
    ast::Ast,
    error::{
        Error, EvalError, LexError, ParseError,
        parse_error::{Construct, Expected},
    },
    evaluate,
    interpreter::{
        evaluator::core::Context,
        lexer::{TokenKind, tokenize_line},
        value::core::Number,
    },
};
use pretty_assertions::assert_eq;

fn run(src: &str) -> Result<Number, Error> {
    let mut context = Context::new().unwrap();
    let mut result = None;
    for line in src.split('\n') {
        result = Some(context.eval_line(line));
    }
    result.unwrap()
}

fn assert_value(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_nan(src: &str) {
    match run(src) {
        Ok(value) => assert!(value.is_nan(), "expected NaN from {src}, got {value}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match run(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error from {src}, got {other:?}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("x = 1 + 2\nx", "3.000000000");
    assert_value("7 * 9", "63.00000000");
    assert_value("8 - 5", "3.000000000");
    assert_value("10 / 4", "2.500000000");
    assert_value("y = 4", "4.000000000");
}

#[test]
fn assignment_updates_in_place() {
    assert_value("a = 5\na", "5.000000000");
    assert_value("a = 5\na = a + 1\na", "6.000000000");

    let mut context = Context::new().unwrap();
    context.eval_line("a = 5").unwrap();
    context.eval_line("a = a + 1").unwrap();
    assert_eq!(context.symbols().len(), 1);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", "14.00000000");
    assert_value("(2+3)*4", "20.00000000");
    assert_value("8 - 3 - 2", "3.000000000");
    assert_value("100 / 10 / 5", "2.000000000");
    assert_value("2^3^2", "512.0000000");
    assert_value("sqrt(16) + 2", "6.000000000");
}

#[test]
fn negative_and_comma_literals() {
    assert_value("-3.5", "-3.500000000");
    assert_value("2 * -3", "-6.000000000");
    assert_value("- 4 + 1", "-3.000000000");
    assert_value("4 - -2", "6.000000000");
    assert_value("3,5", "3.500000000");
    assert_value("7.", "7.000000000");
}

#[test]
fn truncated_remainder() {
    assert_value("7 % 3", "1.000000000");
    assert_value("-7 % 3", "-1.000000000");
    assert_value("7.5 % 2", "1.500000000");
}

#[test]
fn powers_of_negative_bases() {
    assert_value("(-2) ^ 3", "-8.000000000");
    assert_value("(-2) ^ 2", "4.000000000");
    assert_nan("(-2) ^ 0.5");
}

#[test]
fn soft_failures_give_nan() {
    assert_nan("1/0");
    assert_nan("1%0");
    assert_nan("0 / 0");
    assert_nan("sqrt(-1)");
    assert_nan("1 + (1/0)");
    assert_nan("never_defined");
    assert_nan("never_defined * 0");
    assert_nan("-");
    assert_value("1/0", "NaN");
}

#[test]
fn nan_can_be_stored() {
    assert_nan("broken = 1 / 0\nbroken + 1");
}

#[test]
fn fractional_power_matches_square_root() {
    let mut context = Context::new().unwrap();
    let epsilon = context.eval_line("10 ^ -60").unwrap();
    let power = context.eval_line("2 ^ 0.5").unwrap();
    let root = context.eval_line("sqrt(2)").unwrap();
    assert!(power.is_close(&root, &epsilon), "{power} vs {root}");
}

#[test]
fn large_and_small_values_use_scientific_notation() {
    assert_value("12345678.9", "1.2345678900e+07");
    assert_value("1 / 80000", "1.2500000000e-05");
    assert_value("0.00125", "0.0012500000");
}

#[test]
fn lex_errors() {
    assert_eq!(run("2 $ 3").unwrap_err().to_string(),
               "Error at column 3: Unrecognized character '$'.");

    let long_name = "a".repeat(256);
    assert!(matches!(run(&long_name),
                     Err(Error::Lex(LexError::TooLong { length: 256,
                                                        limit: 255,
                                                        column: 1 }))));
}

#[test]
fn parse_errors() {
    assert_eq!(parse_error("(1 + 2"),
               ParseError::MissingCloseParen { construct: Construct::Group,
                                               found:     None, });
    assert_eq!(parse_error("sqrt(4"),
               ParseError::MissingCloseParen { construct: Construct::SquareRoot,
                                               found:     None, });
    assert_eq!(parse_error("sqrt 4"),
               ParseError::UnexpectedToken { expected: Expected::Token(TokenKind::LParen),
                                             found:    Some(TokenKind::Number), });
    assert_eq!(parse_error(""),
               ParseError::UnexpectedToken { expected: Expected::Operand,
                                             found:    None, });
    assert_eq!(parse_error("[1]"),
               ParseError::UnexpectedToken { expected: Expected::Operand,
                                             found:    Some(TokenKind::LBracket), });
    assert_eq!(parse_error("a = (b = 3)"),
               ParseError::MissingCloseParen { construct: Construct::Group,
                                               found:     Some(TokenKind::Assign), });
    assert_eq!(parse_error("a = b = 3"),
               ParseError::TrailingToken { kind:   TokenKind::Assign,
                                           lexeme: "=".to_string(), });
    assert_eq!(parse_error("1 2"),
               ParseError::TrailingToken { kind:   TokenKind::Number,
                                           lexeme: "2".to_string(), });
    assert_eq!(parse_error("a1"),
               ParseError::TrailingToken { kind:   TokenKind::Number,
                                           lexeme: "1".to_string(), });
    assert_eq!(parse_error("-x"),
               ParseError::TrailingToken { kind:   TokenKind::Variable,
                                           lexeme: "x".to_string(), });
}

#[test]
fn failed_lines_keep_variables() {
    let mut context = Context::new().unwrap();
    context.eval_line("x = 5").unwrap();

    assert!(context.eval_line("x = (1").is_err());
    assert!(context.eval_line("x = 2 $").is_err());

    assert_eq!(context.eval_line("x").unwrap().to_string(), "5.000000000");
}

#[test]
fn unsupported_node_is_structural() {
    let tokens = tokenize_line(",").unwrap();
    let mut ast = Ast::new();
    ast.prepare(tokens.len());
    let root = ast.leaf(0).unwrap();

    let mut context = Context::new().unwrap();
    assert_eq!(context.evaluate(&tokens, &ast, root),
               Err(EvalError::UnsupportedNode { kind: TokenKind::Comma }));

    let error = Error::from(EvalError::UnsupportedNode { kind: TokenKind::Comma });
    assert!(error.is_structural());
}

#[test]
fn operator_without_operands_is_structural() {
    let tokens = tokenize_line("+").unwrap();
    let mut ast = Ast::new();
    ast.prepare(tokens.len());
    let root = ast.leaf(0).unwrap();

    let mut context = Context::new().unwrap();
    assert_eq!(context.evaluate(&tokens, &ast, root),
               Err(EvalError::MissingOperand { kind: TokenKind::Add }));
    assert_eq!(context.eval_line("2 + 2").unwrap().to_string(), "4.000000000");
}

#[test]
fn deep_expressions_grow_the_scratch_pool() {
    let source = vec!["1"; 200].join(" + ");
    let mut context = Context::new().unwrap();

    assert_eq!(context.eval_line(&source).unwrap().to_string(), "200.0000000");
    assert_eq!(context.pool().in_use(), 399);
    assert!(context.pool().capacity() >= 399);
}

#[test]
fn one_off_evaluation() {
    assert_eq!(evaluate("(1 + 2) * 4").unwrap().to_string(), "12.00000000");
    assert!(evaluate("x").unwrap().is_nan());
}
