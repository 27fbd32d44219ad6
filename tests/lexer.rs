use arbcalc::{
    error::LexError,
    interpreter::lexer::{TOKEN_LEXEME_LEN_LIMIT, Token, TokenKind, tokenize, tokenize_line},
};
use pretty_assertions::assert_eq;

fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize_line(line).unwrap().iter().map(|token| token.kind).collect()
}

fn lexemes(line: &str) -> Vec<String> {
    tokenize_line(line).unwrap()
                       .iter()
                       .map(|token| token.lexeme().into_owned())
                       .collect()
}

#[test]
fn operators_and_brackets() {
    use TokenKind::{
        Add, Assign, Comma, Divide, LBracket, LParen, Modulo, Multiply, Power, RBracket, RParen,
        SquareRoot, Variable,
    };

    assert_eq!(kinds("= + / % * ^ sqrt ( ) , [ ] x"),
               [Assign, Add, Divide, Modulo, Multiply, Power, SquareRoot, LParen, RParen, Comma,
                LBracket, RBracket, Variable]);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(lexemes(" \t1\t+\x0B2 \x0C"), ["1", "+", "2"]);
    assert!(tokenize_line("   ").unwrap().is_empty());
}

#[test]
fn numbers_take_one_separator() {
    assert_eq!(lexemes("3.25"), ["3.25"]);
    assert_eq!(lexemes("3,25"), ["3,25"]);
    assert_eq!(lexemes("7."), ["7."]);
    assert_eq!(tokenize_line("1.2.3").unwrap_err(),
               LexError::UnrecognizedChar { ch:     '.',
                                            column: 4, });
}

#[test]
fn names_stop_at_digits() {
    assert_eq!(kinds("a1"), [TokenKind::Variable, TokenKind::Number]);
    assert_eq!(kinds("x_max"), [TokenKind::Variable]);
    assert_eq!(kinds("sqrtx"), [TokenKind::Variable]);
    assert_eq!(kinds("sqrt"), [TokenKind::SquareRoot]);
}

#[test]
fn unary_minus_fuses_into_the_literal() {
    let tokens = tokenize_line("-3.5").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0],
               Token { kind:     TokenKind::Number,
                       text:     "3.5",
                       negative: true, });
    assert_eq!(tokens[0].lexeme(), "-3.5");

    assert_eq!(lexemes("- 4"), ["-4"]);
    assert_eq!(lexemes("2 * -3"), ["2", "*", "-3"]);
    assert_eq!(lexemes("(-3)"), ["(", "-3", ")"]);
    assert_eq!(lexemes("x = -1"), ["x", "=", "-1"]);
}

#[test]
fn minus_after_an_operand_is_subtraction() {
    assert_eq!(kinds("4 - 2"), [TokenKind::Number, TokenKind::Sub, TokenKind::Number]);
    assert_eq!(kinds("x-2"), [TokenKind::Variable, TokenKind::Sub, TokenKind::Number]);
    assert_eq!(kinds("(1)-2"),
               [TokenKind::LParen,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Sub,
                TokenKind::Number]);
    assert_eq!(lexemes("4 - -2"), ["4", "-", "-2"]);
}

#[test]
fn dangling_minus_gives_an_empty_literal() {
    let tokens = tokenize_line("-x").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_empty());
    assert!(tokens[0].negative);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Variable);
}

#[test]
fn lexeme_length_limit() {
    let longest = "9".repeat(TOKEN_LEXEME_LEN_LIMIT);
    assert_eq!(tokenize_line(&longest).unwrap().len(), 1);

    let too_long = format!("1 + {}", "9".repeat(TOKEN_LEXEME_LEN_LIMIT + 1));
    assert_eq!(tokenize_line(&too_long).unwrap_err(),
               LexError::TooLong { length: TOKEN_LEXEME_LEN_LIMIT + 1,
                                   limit:  TOKEN_LEXEME_LEN_LIMIT,
                                   column: 5, });
}

#[test]
fn unknown_characters_report_their_column() {
    assert_eq!(tokenize_line("1 + 2 # 3").unwrap_err(),
               LexError::UnrecognizedChar { ch:     '#',
                                            column: 7, });
}

#[test]
fn buffer_is_reused_between_lines() {
    let mut tokens = Vec::new();
    tokenize("1 + 2 + 3", &mut tokens).unwrap();
    assert_eq!(tokens.len(), 5);

    tokenize("4", &mut tokens).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "4");
}
