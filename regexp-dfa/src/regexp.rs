use crate::error::ParseResult;
use crate::parser;

use std::fmt;

use automata::Dfa;

/// A compiled regular expression for whole-string matching. The pattern is
/// compiled to a DFA once; the DFA is immutable afterwards, so a `RegExp`
/// may be queried repeatedly and concurrently.
#[derive(Clone, Debug)]
pub struct RegExp {
    /// The regular expression represented by this structure.
    expr: String,
    /// The DFA used to evaluate input strings.
    dfa: Dfa<char>,
}

impl RegExp {
    /// Compile a regular expression. All syntax errors are reported here;
    /// matching with a successfully compiled pattern cannot fail.
    #[inline]
    pub fn new(expr: &str) -> ParseResult<Self> {
        let dfa = parser::compile(expr)?;
        Ok(RegExp {
            expr: expr.to_owned(),
            dfa,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Determine if the whole input string is within the language described
    /// by the regular expression.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.dfa.is_match(input.chars())
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

/// Compile a regular expression. Convenience for [`RegExp::new`].
#[inline]
pub fn compile(pattern: &str) -> ParseResult<RegExp> {
    RegExp::new(pattern)
}
