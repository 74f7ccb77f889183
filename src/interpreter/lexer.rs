use logos::Logos;

use crate::error::InvalidInputError;

/// Represents a lexical token in a normalized expression.
///
/// This is the complete mathematical vocabulary: anything the lexer cannot
/// match is reported as an error, and identifiers are checked against the
/// constant table and function registry by the validator.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(NumberLiteral),
    /// Identifier tokens; constant or function names such as `pi` or `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A numeric literal together with the text it was written as.
///
/// Error messages quote the text, so `.2` is reported as `.2` and not as the
/// value it parses to.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: f64,
    pub text:  String,
}

impl NumberLiteral {
    /// Parses `text`, returning `None` unless it is a finite number.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse()
            .ok()
            .filter(|n: &f64| n.is_finite())
            .map(|value| Self { value,
                                text: text.to_string() })
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(NumberLiteral)`: The parsed literal if the slice is a finite
///   number.
/// - `None`: If the slice does not parse or overflows to infinity.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<NumberLiteral> {
    NumberLiteral::parse(lex.slice())
}

/// Splits a normalized expression into `(Token, position)` pairs.
///
/// Positions are character offsets, so they stay meaningful for input that
/// still contains non-ASCII text.
///
/// # Errors
/// Returns an [`InvalidInputError`] carrying the first slice that is not part
/// of the token vocabulary.
///
/// # Example
/// ```
/// use scicalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*pi").unwrap();
/// assert!(matches!(&tokens[0], (Token::Number(n), 0) if n.value == 2.0));
/// assert_eq!(tokens[2], (Token::Identifier("pi".to_string()), 2));
///
/// assert!(tokenize("2;3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, InvalidInputError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut offsets = CharOffsets::default();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = offsets.advance_to(source, span.start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let offending = source.get(span.clone())
                                      .filter(|s| !s.is_empty())
                                      .or_else(|| {
                                          let rest = source.get(span.start..)?;
                                          rest.chars().next().map(|c| &rest[..c.len_utf8()])
                                      })
                                      .unwrap_or_default();
                return Err(InvalidInputError::new(offending, position));
            },
        }
    }

    Ok(tokens)
}

/// Converts increasing byte offsets into character offsets, counting each
/// character of the source once.
#[derive(Default)]
struct CharOffsets {
    byte:  usize,
    chars: usize,
}

impl CharOffsets {
    fn advance_to(&mut self, source: &str, byte: usize) -> usize {
        if let Some(skipped) = source.get(self.byte..byte) {
            self.chars += skipped.chars().count();
            self.byte = byte;
        }
        self.chars
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => f.write_str(&literal.text),
            Self::Identifier(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}
