use std::fmt;

/// Alias for [`Result`] with [`SyntaxError`].
pub type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Error returned when attempting to compile an invalid regular expression.
/// All malformed-pattern conditions are reported at compile time; a pattern
/// that compiles cannot fail to match.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct SyntaxError {
    kind: ErrorKind,
    position: Option<Position>,
}

impl SyntaxError {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    #[inline]
    pub fn with_position(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The position the error was reported at, if any. Reserved for
    /// embedding in a larger error-reporting context; this crate does not
    /// populate it.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl From<ErrorKind> for SyntaxError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The kinds of syntax errors detected during compilation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("empty regular expression")]
    EmptyExpression,

    /// Only the reserved operator characters may be escaped.
    #[error("can't escape '{0}'")]
    IllegalEscape(char),
    #[error("no operand for escape operator")]
    DanglingEscape,

    /// There are one or more unmatched opening or closing parentheses.
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,

    /// An operator had fewer operands available than it requires.
    #[error("insufficient operands for operator")]
    InsufficientOperands,
    /// More than one operand was left over after evaluation.
    #[error("unbalanced operators")]
    UnbalancedOperators,
}

/// A 1-based line and column pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
