use crate::interpreter::evaluator::{
    constant::{CONSTANT_NAMES, is_constant},
    function::core::is_function,
};

/// Classification of the last piece written to the output.
///
/// Implicit multiplication depends only on the kinds of two neighbouring
/// pieces, so the normalizer keeps the kind of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    /// Start of input.
    Start,
    /// A numeric literal, possibly in scientific notation.
    Number,
    /// A registered constant name.
    Constant,
    /// A registered function name.
    Function,
    /// Any identifier that is not registered.
    Unknown,
    /// `(`
    Open,
    /// `)`
    Close,
    /// Operators, commas and unrecognized characters.
    Other,
}

impl Piece {
    /// Pieces after which a value has just ended.
    const fn ends_value(self) -> bool {
        matches!(self, Self::Number | Self::Constant | Self::Close)
    }

    /// Pieces that begin a new value.
    const fn starts_value(self) -> bool {
        matches!(self, Self::Number | Self::Constant | Self::Open)
    }

    /// Whether a `*` belongs between `self` and `next`.
    ///
    /// Two numbers are never joined: `1.2.3` stays malformed instead of
    /// becoming `1.2*.3`.
    fn needs_star_before(self, next: Self) -> bool {
        self.ends_value()
        && next.starts_value()
        && !(self == Self::Number && next == Self::Number)
    }
}

/// Rewrites raw input into explicit, token-ready text.
///
/// The rewrite:
/// - removes all whitespace,
/// - replaces `×` and `÷` with `*` and `/`,
/// - replaces `π` with `pi`,
/// - expands `√` into a `sqrt(...)` call, wrapping a bare operand in
///   parentheses (`√9` becomes `sqrt(9)`),
/// - inserts `*` between adjacent values: a number, constant or `)` followed
///   by a number, constant or `(`.
///
/// Scientific-notation literals such as `1e-3` or `2.5E+4` are copied as one
/// number. A number followed by a function name (`2sin(30)`) is left alone
/// and rejected later, as are unknown identifiers and characters outside the
/// vocabulary. Normalization never fails, and normalizing its own output
/// changes nothing.
///
/// `√` is expanded while implicit multiplication is inserted, in a single
/// left-to-right pass, so a value before `√` gets its `*` even though a
/// number before a function name never does. A word made only of constant
/// names is split into them, so `pi e` reads as `pi*e`.
///
/// The pass runs in linear time without recursion, so arbitrarily long or
/// deeply stacked input never exhausts the stack here; the parser bounds
/// nesting later.
///
/// # Example
/// ```
/// use scicalc::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("2(3 + 4)"), "2*(3+4)");
/// assert_eq!(normalize("2π"), "2*pi");
/// assert_eq!(normalize("2√9"), "2*sqrt(9)");
/// assert_eq!(normalize("1e-3"), "1e-3");
/// assert_eq!(normalize("(2)(3)"), "(2)*(3)");
/// assert_eq!(normalize("√√16"), "sqrt(sqrt(16))");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let chars = raw.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
    let mut normalizer = Normalizer { group_ends: group_ends(&chars),
                                      chars:      &chars,
                                      pos:        0,
                                      out:        String::with_capacity(chars.len() + 8),
                                      last:       Piece::Start,
                                      pending:    Vec::new(), };

    normalizer.run();
    normalizer.out
}

/// Single-pass rewriter over the whitespace-free input.
struct Normalizer<'a> {
    chars:      &'a [char],
    /// For each `(`, the index just past its matching `)`.
    group_ends: Vec<usize>,
    pos:        usize,
    out:        String,
    last:       Piece,
    /// End positions of open `√` operands, innermost last.
    pending:    Vec<usize>,
}

impl Normalizer<'_> {
    /// Processes the whole input.
    fn run(&mut self) {
        while self.pos < self.chars.len() {
            self.close_operands();
            self.step();
        }
        self.close_operands();
    }

    /// Writes the `)` of every `√` operand that ends at the cursor.
    fn close_operands(&mut self) {
        while self.pending.last().is_some_and(|end| *end <= self.pos) {
            self.pending.pop();
            self.emit(Piece::Close, ")");
        }
    }

    /// Processes the piece at the cursor.
    fn step(&mut self) {
        let c = self.chars[self.pos];
        match c {
            '√' => self.square_roots(),
            '×' => self.advance(1, Piece::Other, "*"),
            '÷' => self.advance(1, Piece::Other, "/"),
            'π' => self.advance(1, Piece::Constant, "pi"),
            '(' => self.advance(1, Piece::Open, "("),
            ')' => self.advance(1, Piece::Close, ")"),
            _ if self.starts_number(self.pos) => {
                let end = self.number_end(self.pos);
                self.copy_until(end, Piece::Number);
            },
            _ if is_letter(c) => self.identifier(),
            _ => {
                let mut buf = [0; 4];
                self.advance(1, Piece::Other, c.encode_utf8(&mut buf));
            },
        }
    }

    /// Writes `text` as a piece of kind `kind` and moves the cursor by `len`
    /// characters.
    fn advance(&mut self, len: usize, kind: Piece, text: &str) {
        self.emit(kind, text);
        self.pos += len;
    }

    /// Copies the input from the cursor up to `end` as one piece.
    fn copy_until(&mut self, end: usize, kind: Piece) {
        let text = self.chars[self.pos..end].iter().collect::<String>();
        self.emit(kind, &text);
        self.pos = end;
    }

    /// Writes a piece, preceded by `*` when it continues a value.
    fn emit(&mut self, kind: Piece, text: &str) {
        if self.last.needs_star_before(kind) {
            self.out.push('*');
        }
        self.out.push_str(text);
        self.last = kind;
    }

    /// Expands the run of `√` at the cursor.
    ///
    /// `√(` becomes `sqrt(` and the group is processed normally. Any other
    /// operand (a number, constant or function call) is wrapped in
    /// parentheses, and every outer `√` of a run wraps everything up to the
    /// end of the innermost operand: `√√9` becomes `sqrt(sqrt(9))`. With no
    /// operand the innermost `sqrt` stays bare, which the parser rejects.
    fn square_roots(&mut self) {
        let run = self.chars[self.pos..].iter().take_while(|c| **c == '√').count();
        let after = self.pos + run;

        let (end, inner_wrapped) = if self.chars.get(after) == Some(&'(') {
            (self.group_ends[after], false)
        } else {
            let end = self.operand_end(after);
            if end > after { (end, true) } else { (after, false) }
        };

        if self.last.ends_value() {
            self.out.push('*');
            self.last = Piece::Other;
        }
        for _ in 1..run {
            self.emit(Piece::Function, "sqrt");
            self.emit(Piece::Open, "(");
            self.pending.push(end);
        }
        self.emit(Piece::Function, "sqrt");
        if inner_wrapped {
            self.emit(Piece::Open, "(");
            self.pending.push(end);
        }
        self.pos = after;
    }

    /// Returns where a bare `√` operand starting at `start` ends, or `start`
    /// when there is none.
    fn operand_end(&self, start: usize) -> usize {
        match self.chars.get(start) {
            Some('π') => start + 1,
            Some(_) if self.starts_number(start) => self.number_end(start),
            Some(&c) if is_letter(c) => {
                let (end, kind) = self.identifier_end(start);
                if kind == Piece::Function && self.chars.get(end) == Some(&'(') {
                    self.group_ends[end]
                } else {
                    end
                }
            },
            _ => start,
        }
    }

    /// A number starts with a digit, or with `.` followed by a digit.
    fn starts_number(&self, at: usize) -> bool {
        match self.chars.get(at) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.chars.get(at + 1).is_some_and(char::is_ascii_digit),
            _ => false,
        }
    }

    /// Scans `<digits>[.<digits>][(e|E)[+|-]<digits>]` starting at `start`.
    ///
    /// The exponent is only taken when digits follow the `e`, so `2e` ends
    /// after `2` and the `e` is read as the constant.
    fn number_end(&self, start: usize) -> usize {
        let digits_from = |mut i: usize| {
            while self.chars.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            i
        };

        let mut end = digits_from(start);
        if self.chars.get(end) == Some(&'.') {
            end = digits_from(end + 1);
        }

        if matches!(self.chars.get(end), Some('e' | 'E')) {
            let mut exp = end + 1;
            if matches!(self.chars.get(exp), Some('+' | '-')) {
                exp += 1;
            }
            if self.chars.get(exp).is_some_and(char::is_ascii_digit) {
                end = digits_from(exp);
            }
        }
        end
    }

    /// Writes the identifier at the cursor.
    ///
    /// An unregistered run of letters that is made entirely of constant
    /// names is written as those constants, with `*` between them.
    fn identifier(&mut self) {
        let (end, kind) = self.identifier_end(self.pos);
        if kind == Piece::Unknown {
            let letters_end = self.letters_end(self.pos);
            let letters = self.chars[self.pos..letters_end].iter().collect::<String>();
            if let Some(names) = split_constants(&letters) {
                for name in names {
                    self.emit(Piece::Constant, name);
                }
                self.pos = letters_end;
                return;
            }
        }
        self.copy_until(end, kind);
    }

    /// End of the run of letters and underscores starting at `start`.
    fn letters_end(&self, start: usize) -> usize {
        start + self.chars[start..].iter().take_while(|c| is_letter(**c)).count()
    }

    /// Scans an identifier starting at `start` and classifies it.
    ///
    /// A name may carry trailing digits only when the whole word is
    /// registered (`atan2`, `log2`). Otherwise a registered letter prefix is
    /// split from the digits after it, so `pi2` reads as `pi` then `2`. An
    /// unregistered word is taken whole so it can be reported as is.
    fn identifier_end(&self, start: usize) -> (usize, Piece) {
        let letters_end = self.letters_end(start);
        let word_end = letters_end
                       + self.chars[letters_end..].iter()
                                                  .take_while(|c| is_letter(**c) || c.is_ascii_digit())
                                                  .count();

        let word = self.chars[start..word_end].iter().collect::<String>();
        if let Some(kind) = classify(&word) {
            return (word_end, kind);
        }

        let letters = self.chars[start..letters_end].iter().collect::<String>();
        match classify(&letters) {
            Some(kind) => (letters_end, kind),
            None => (word_end, Piece::Unknown),
        }
    }
}

/// Letters and underscores start and continue identifiers.
const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Maps each `(` to the index just past its matching `)`, or to the end of
/// input when the group is never closed.
fn group_ends(chars: &[char]) -> Vec<usize> {
    let mut ends = vec![chars.len(); chars.len()];
    let mut open = Vec::new();
    for (i, c) in chars.iter().enumerate() {
        match c {
            '(' => open.push(i),
            ')' => {
                if let Some(start) = open.pop() {
                    ends[start] = i + 1;
                }
            },
            _ => {},
        }
    }
    ends
}

/// Splits `word` into constant names, longest name first at each step.
///
/// Returns `None` unless the whole word is covered.
fn split_constants(word: &str) -> Option<Vec<&'static str>> {
    let mut names = Vec::new();
    let mut rest = word;
    while !rest.is_empty() {
        let name = CONSTANT_NAMES.iter()
                                 .filter(|name| rest.starts_with(**name))
                                 .max_by_key(|name| name.len())?;
        names.push(*name);
        rest = &rest[name.len()..];
    }
    Some(names)
}

/// Classifies a registered name.
fn classify(name: &str) -> Option<Piece> {
    if is_constant(name) {
        Some(Piece::Constant)
    } else if is_function(name) {
        Some(Piece::Function)
    } else {
        None
    }
}
