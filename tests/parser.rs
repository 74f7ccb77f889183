use pretty_assertions::assert_eq;
use scicalc::{
    error::ErrorKind,
    interpreter::{
        lexer::{NumberLiteral, Token, tokenize},
        parser::core::{MAX_DEPTH, parse_tokens},
    },
};

fn tree(src: &str) -> String {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    parse_tokens(&tokens).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"))
                         .to_string()
}

fn number(text: &str) -> Token {
    Token::Number(NumberLiteral::parse(text).unwrap())
}

fn syntax_error_at(src: &str) -> usize {
    let tokens = tokenize(src).unwrap();
    let err = parse_tokens(&tokens).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax, "'{src}' failed with '{err}'");
    err.position().unwrap()
}

#[test]
fn tokens_carry_character_positions() {
    assert_eq!(tokenize("12+sin(3.5e2)").unwrap(),
               vec![(number("12"), 0),
                    (Token::Plus, 2),
                    (Token::Identifier("sin".to_string()), 3),
                    (Token::LParen, 6),
                    (number("3.5e2"), 7),
                    (Token::RParen, 12),]);
}

#[test]
fn precedence_is_reflected_in_the_tree() {
    assert_eq!(tree("1+2*3"), "(1 + (2 * 3))");
    assert_eq!(tree("1*2+3"), "((1 * 2) + 3)");
    assert_eq!(tree("1-2-3"), "((1 - 2) - 3)");
    assert_eq!(tree("2^3^2"), "(2 ^ (3 ^ 2))");
    assert_eq!(tree("-2^2"), "(-(2 ^ 2))");
    assert_eq!(tree("2^-1"), "(2 ^ (-1))");
    assert_eq!(tree("-+2"), "(-(+2))");
}

#[test]
fn calls_and_groups() {
    assert_eq!(tree("atan2(1,2*pi)"), "atan2(1, (2 * pi))");
    assert_eq!(tree("(1+2)*3"), "((1 + 2) * 3)");
    assert_eq!(tree("max(1)"), "max(1)");
    assert_eq!(tree("sin()"), "sin()");
}

#[test]
fn syntax_errors_point_at_the_problem() {
    assert_eq!(syntax_error_at("(1+2"), 4);
    assert_eq!(syntax_error_at("1+2)"), 3);
    assert_eq!(syntax_error_at("1.2.3"), 3);
    assert_eq!(syntax_error_at("sin+1"), 3);
    assert_eq!(syntax_error_at("max(1(2)"), 5);
    assert_eq!(syntax_error_at("*2"), 0);
}

#[test]
fn numbers_are_reported_as_written() {
    let tokens = tokenize("1..2").unwrap();
    assert_eq!(tokens[1], (number(".2"), 2));
    let err = parse_tokens(&tokens).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 2: Syntax error: unexpected token '.2' after expression.");

    let tokens = tokenize("2.50e1").unwrap();
    assert_eq!(tokens[0].0.to_string(), "2.50e1");
}

#[test]
fn long_operator_chains_stop_at_the_depth_limit() {
    let within = format!("{}1", "1+".repeat(MAX_DEPTH - 2));
    assert!(tree(&within).starts_with('('));

    let sum = format!("{}1", "1+".repeat(10_000));
    assert_eq!(syntax_error_at(&sum), 2 * MAX_DEPTH - 1);

    let product = format!("{}2", "2*".repeat(10_000));
    assert_eq!(syntax_error_at(&product), 2 * MAX_DEPTH - 1);

    let mixed = format!("{}1", "1*1-".repeat(5_000));
    assert_eq!(parse_tokens(&tokenize(&mixed).unwrap()).unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn empty_input_is_a_syntax_error() {
    let err = parse_tokens(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}
