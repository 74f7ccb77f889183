/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the AST, applies arithmetic and function calls on
/// `f64` values and reports undefined operations. It also owns the constant
/// table, the function registry and the angle mode.
///
/// # Responsibilities
/// - Evaluates AST nodes with the arithmetic operators and builtins.
/// - Applies degree/radian conversion around trigonometric functions.
/// - Reports domain errors, arity errors and division by zero.
pub mod evaluator;
/// The lexer module tokenizes normalized expressions.
///
/// The lexer reads normalized text and produces `(Token, position)` pairs for
/// numbers, names, operators, parentheses and commas. Text outside that
/// vocabulary is an error.
pub mod lexer;
/// The normalizer module rewrites raw user input into explicit form.
///
/// Whitespace is removed, display symbols (`×`, `÷`, `π`, `√`) are replaced
/// by their textual spelling and implicit multiplication is made explicit.
pub mod normalizer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the token stream produced
/// by the lexer, following the usual precedence of arithmetic with a
/// right-associative `^`.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Reports grammar errors with the position of the offending token.
/// - Bounds recursion depth so hostile input cannot exhaust the stack.
pub mod parser;
/// The validator module rejects anything outside the calculator vocabulary.
pub mod validator;
