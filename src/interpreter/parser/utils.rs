use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenStream, parse_expression},
    },
};

/// Parses a comma-separated argument list up to the closing `)`.
///
/// The opening `(` must already be consumed. Each argument is a full
/// expression, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list; the registry then
/// reports the wrong argument count.
///
/// Grammar (simplified): `arguments := (expression ("," expression)*)? ")"`
///
/// # Errors
/// Returns a syntax error if an argument fails to parse, an unexpected token
/// is encountered, or the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments(tokens: &mut TokenStream<'_>,
                                                      depth: usize)
                                                      -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();
    if tokens.next_if_eq(&Token::RParen).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, depth)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(EvalError::syntax(format!("expected ',' or ')', found '{tok}'"),
                                             *position));
            },
            None => return Err(tokens.unexpected_end()),
        }
    }
    Ok(items)
}
