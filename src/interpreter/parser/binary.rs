use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, descend},
            unary::{parse_atom, parse_unary},
        },
    },
};

/// Parses a sum or difference, the lowest precedence level.
///
/// `+` and `-` associate to the left, so `10-4-3` is `(10-4)-3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Every operator in the chain deepens the tree by one node, so each one
/// counts as a nesting level.
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A left-leaning chain of `Expr::BinaryOp` nodes, or the single operand.
pub fn parse_additive(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let mut depth = depth;
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            depth = descend(tokens, depth)?;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a product or quotient.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// Like sums, each operator counts as a nesting level.
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let mut depth = depth;
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            depth = descend(tokens, depth)?;
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an optional `^` after an atom.
///
/// The exponent is parsed as a unary expression, which makes `^`
/// right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`, and a signed
/// exponent such as `2 ^ -1` needs no parentheses.
///
/// The rule is: `power := atom ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree, or the atom itself.
pub fn parse_power(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let base = parse_atom(tokens, depth)?;
    match tokens.next_if_eq(&Token::Caret) {
        Some((_, position)) => {
            let exponent = parse_unary(tokens, depth)?;
            Ok(Expr::BinaryOp { left:     Box::new(base),
                                op:       BinaryOperator::Pow,
                                right:    Box::new(exponent),
                                position: *position, })
        },
        None => Ok(base),
    }
}

/// Returns the arithmetic operator a token stands for.
///
/// Returns `Some(BinaryOperator)` when the token represents `+`, `-`, `*`,
/// `/` or `^`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use scicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
