use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        evaluator::{constant::is_constant, function::core::is_function},
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, TokenStream, descend, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators `-` (negation) and `+` (identity). Signs may
/// repeat, so `--2` is `2`. A sign binds looser than `^`: `-2^2` is
/// `-(2^2)`.
///
/// If no sign is present, the function delegates to [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let depth = descend(tokens, depth)?;

    let op = match tokens.peek() {
        Some((Token::Minus, position)) => Some((UnaryOperator::Negate, *position)),
        Some((Token::Plus, position)) => Some((UnaryOperator::Plus, *position)),
        _ => None,
    };

    match op {
        Some((op, position)) => {
            tokens.next();
            let expr = parse_unary(tokens, depth)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               position })
        },
        None => parse_power(tokens, depth),
    }
}

/// Parses an atom, the operand of every operator.
///
/// Atoms are:
/// - numeric literals
/// - constants
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | CONSTANT
///           | FUNCTION "(" arguments ")"
///           | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an atom.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// The parsed atom or an error on failure.
pub(crate) fn parse_atom(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let (tok, position) = tokens.peek().ok_or_else(|| tokens.unexpected_end())?;

    match tok {
        Token::Number(literal) => {
            tokens.next();
            Ok(Expr::Literal { value:    literal.value,
                               position: *position, })
        },
        Token::LParen => parse_grouping(tokens, depth),
        Token::Identifier(_) => parse_identifier_or_function(tokens, depth),
        Token::RParen => Err(EvalError::syntax("expected an operand before ')'", *position)),
        tok => Err(EvalError::syntax(format!("expected an operand, found '{tok}'"), *position)),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let open = tokens.next().map_or(tokens.end(), |(_, position)| *position);
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, position)) => {
            Err(EvalError::syntax(format!("expected ')' to close '(' at position {open}, found '{tok}'"),
                                  *position))
        },
        None => Err(EvalError::syntax(format!("missing ')' to close '(' at position {open}"),
                                      tokens.end())),
    }
}

/// Parses a constant or a function call.
///
/// Supported forms:
///
/// - constant
/// - function(arg1, arg2, ...)
///
/// A function name without an argument list is a syntax error. An
/// identifier that is neither a constant nor a function never passes the
/// validator; if one reaches the parser anyway it is rejected as invalid
/// input.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Constant`] otherwise.
fn parse_identifier_or_function(tokens: &mut TokenStream<'_>, depth: usize) -> ParseResult<Expr> {
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.clone(), *position),
        Some((tok, position)) => {
            return Err(EvalError::syntax(format!("expected a name, found '{tok}'"), *position));
        },
        None => return Err(tokens.unexpected_end()),
    };

    if is_function(&name) {
        if tokens.next_if_eq(&Token::LParen).is_none() {
            let found = tokens.peek().map_or(tokens.end(), |(_, p)| *p);
            return Err(EvalError::syntax(format!("function '{name}' must be followed by '('"),
                                         found));
        }
        let arguments = parse_arguments(tokens, depth)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       position });
    }

    if is_constant(&name) {
        return Ok(Expr::Constant { name, position });
    }

    Err(EvalError::InvalidInput { token: name,
                                  position })
}
