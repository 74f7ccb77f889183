use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node records the character position of the token that produced it
/// in the normalized expression, so evaluation errors can point back at the
/// input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Position in the normalized expression.
        position: usize,
    },
    /// Reference to a named constant such as `pi`.
    Constant {
        /// Name of the constant.
        name:     String,
        /// Position in the normalized expression.
        position: usize,
    },
    /// A unary operation, such as negation.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Position in the normalized expression.
        position: usize,
    },
    /// A binary operation such as `a + b` or `a ^ b`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the normalized expression.
        position: usize,
    },
    /// Call to a registered function: `name(arg1, arg2, ...)`.
    FunctionCall {
        /// Function name.
        name:      String,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Position in the normalized expression.
        position:  usize,
    },
}

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Plus,
}

/// Operators that take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        f.write_str(s)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Plus => f.write_str("+"),
        }
    }
}

/// Renders the tree fully parenthesized, which makes precedence and
/// associativity visible.
///
/// # Example
/// ```
/// use scicalc::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("2^3^2-1").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ (3 ^ 2)) - 1)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Constant { name, .. } => f.write_str(name),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                let args = arguments.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{name}({})", args.join(", "))
            },
        }
    }
}
