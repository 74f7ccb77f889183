use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Maximum nesting of recursive rules before parsing gives up.
///
/// Parentheses, function calls, signs, exponents and every chained binary
/// operator each add a level, which also bounds the depth of the tree the
/// evaluator walks.
pub const MAX_DEPTH: usize = 512;

/// A peekable stream of `(Token, position)` pairs.
///
/// Besides the tokens the stream knows where the input ends, so running out
/// of tokens can be reported at a meaningful position.
pub struct TokenStream<'a> {
    tokens: Peekable<Iter<'a, (Token, usize)>>,
    end:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`. The end position is one past the
    /// position of the last token.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        let end = tokens.last().map_or(0, |(_, position)| position + 1);
        Self { tokens: tokens.iter().peekable(),
               end }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a (Token, usize)> {
        self.tokens.peek().copied()
    }

    /// Consumes the next token if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: &Token) -> Option<&'a (Token, usize)> {
        self.tokens.next_if(|(tok, _)| tok == expected)
    }

    /// Position reported when the input ends unexpectedly.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Builds the error for running out of tokens.
    #[must_use]
    pub fn unexpected_end(&self) -> EvalError {
        EvalError::syntax("unexpected end of input", self.end)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = &'a (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses a complete token sequence into an expression tree.
///
/// The whole sequence must form one expression: leftover tokens, such as an
/// unmatched `)` or a number directly followed by a function name, are a
/// syntax error.
///
/// # Errors
/// Returns a syntax error for empty input, malformed grammar, trailing tokens
/// or nesting deeper than [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use scicalc::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("2*(3+4)").unwrap();
/// assert_eq!(parse_tokens(&tokens).unwrap().to_string(), "(2 * (3 + 4))");
///
/// let tokens = tokenize("(3+4))").unwrap();
/// assert!(parse_tokens(&tokens).is_err());
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut stream = TokenStream::new(tokens);
    if stream.peek().is_none() {
        return Err(EvalError::syntax("empty expression", 0));
    }

    let expr = parse_expression(&mut stream, 0)?;

    match stream.next() {
        None => Ok(expr),
        Some((Token::RParen, position)) => Err(EvalError::syntax("unmatched ')'", *position)),
        Some((tok, position)) => {
            Err(EvalError::syntax(format!("unexpected token '{tok}' after expression"), *position))
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
pub fn parse_expression(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let depth = descend(tokens, depth)?;
    parse_additive(tokens, depth)
}

/// Enters one more level of nesting, failing past [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn descend(tokens: &mut TokenStream<'_>,
                                              depth: usize)
                                              -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        let position = tokens.peek().map_or(tokens.end(), |(_, position)| *position);
        return Err(EvalError::syntax(format!("expression nested deeper than {MAX_DEPTH} levels"),
                                     position));
    }
    Ok(depth + 1)
}
