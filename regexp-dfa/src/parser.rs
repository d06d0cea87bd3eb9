//! The compilation pipeline: a pattern string is normalized, explicit
//! concatenation operators are inserted, the result is converted to postfix
//! by the shunting-yard algorithm, and the postfix form is evaluated into an
//! NFA by Thompson's construction. Subset construction then collapses the
//! NFA into the DFA used for matching.

use crate::error::{ErrorKind, ParseResult, SyntaxError};

use automata::{Dfa, Nfa, StateArena};

/// The alternation operator.
const OP_OR: char = '|';
/// The Kleene star operator.
const OP_CLOSURE: char = '*';
/// The positive closure operator.
const OP_POS_CLOSURE: char = '+';
/// The escape operator, consumed during normalization.
const OP_ESCAPE: char = '\\';
const OP_OPEN_PARENTHESIS: char = '(';
const OP_CLOSE_PARENTHESIS: char = ')';

/// The implicit concatenation operator. There is no user-visible symbol for
/// concatenation; this sentinel is inserted between adjacent operands during
/// compilation.
const OP_CONCAT: char = '\u{1}';

/// Start of the Unicode private use area, where escaped operators are
/// temporarily remapped so that later stages treat them as plain symbols.
/// They are mapped back just before NFA construction.
const ESCAPE_AREA: u32 = 0xE000;

/// Compile a pattern into a DFA over characters. All malformed-pattern
/// conditions surface here; the returned DFA cannot fail at match time.
pub fn compile(expr: &str) -> ParseResult<Dfa<char>> {
    let normalized = normalize(expr)?;
    let concatenated = insert_concat(&normalized);
    let postfix = to_postfix(&concatenated)?;

    let mut states = StateArena::new();
    let nfa = build_nfa(&postfix, &mut states)?;
    Ok(nfa.into())
}

fn is_operator(c: char) -> bool {
    c == OP_ESCAPE
        || c == OP_CLOSURE
        || c == OP_POS_CLOSURE
        || c == OP_OR
        || c == OP_CONCAT
        || c == OP_OPEN_PARENTHESIS
        || c == OP_CLOSE_PARENTHESIS
}

fn is_symbol(c: char) -> bool {
    !is_operator(c)
}

fn is_postfix_operator(c: char) -> bool {
    c == OP_CLOSURE || c == OP_POS_CLOSURE
}

/// Operator precedence for the shunting-yard conversion. Parentheses sit at
/// zero so that an open parenthesis on the stack is never popped by an
/// incoming infix operator.
fn precedence(op: char) -> i8 {
    match op {
        OP_OR => 5,
        OP_CONCAT => 10,
        OP_CLOSURE | OP_POS_CLOSURE => 15,
        OP_OPEN_PARENTHESIS | OP_CLOSE_PARENTHESIS => 0,
        _ => -1,
    }
}

/// Shift an escaped operator into the reserved remap range.
fn remap(op: char) -> char {
    // Operators are all below the private use area, so the shift always
    // lands on a valid scalar value.
    match char::from_u32(op as u32 + ESCAPE_AREA) {
        Some(c) => c,
        None => op,
    }
}

/// Restore a remapped character to the operator it escapes. Characters
/// outside the remap range pass through unchanged.
fn unremap(c: char) -> char {
    match char::from_u32((c as u32).wrapping_sub(ESCAPE_AREA)) {
        Some(op) if is_operator(op) => op,
        _ => c,
    }
}

/// Normalize the pattern: escaped operators are replaced with a single
/// remapped character, and empty groups `()` are removed. Escaping a
/// non-operator, a trailing escape, and an opening parenthesis in final
/// position are rejected here.
fn normalize(expr: &str) -> ParseResult<Vec<char>> {
    if expr.is_empty() {
        return Err(ErrorKind::EmptyExpression.into());
    }

    let mut exp: Vec<char> = expr.chars().collect();
    let mut i = 0;
    while i < exp.len() {
        let c = exp[i];
        if c == OP_ESCAPE {
            if i + 1 < exp.len() {
                let esc = exp[i + 1];
                if is_symbol(esc) {
                    return Err(ErrorKind::IllegalEscape(esc).into());
                }
                exp[i] = remap(esc);
                exp.remove(i + 1);
                i += 1;
            } else {
                return Err(ErrorKind::DanglingEscape.into());
            }
        } else if c == OP_OPEN_PARENTHESIS {
            if i + 1 < exp.len() {
                if exp[i + 1] == OP_CLOSE_PARENTHESIS {
                    exp.drain(i..i + 2);
                    // Step back one position so that a group emptied by this
                    // removal is itself removed.
                    i = i.saturating_sub(1);
                } else {
                    i += 1;
                }
            } else {
                return Err(ErrorKind::UnmatchedParenthesis.into());
            }
        } else {
            i += 1;
        }
    }

    Ok(exp)
}

/// Insert the concatenation sentinel wherever concatenation is implied:
/// between two symbols, a symbol and `(`, `)` and a symbol, `)` and `(`, and
/// a postfix operator followed by a symbol or `(`.
fn insert_concat(exp: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(exp.len() * 2);
    for (i, &c) in exp.iter().enumerate() {
        if i > 0 {
            let last = exp[i - 1];
            let implied = (is_symbol(last) && is_symbol(c))
                || (is_symbol(last) && c == OP_OPEN_PARENTHESIS)
                || (last == OP_CLOSE_PARENTHESIS && is_symbol(c))
                || (last == OP_CLOSE_PARENTHESIS && c == OP_OPEN_PARENTHESIS)
                || (is_postfix_operator(last) && is_symbol(c))
                || (is_postfix_operator(last) && c == OP_OPEN_PARENTHESIS);
            if implied {
                out.push(OP_CONCAT);
            }
        }
        out.push(c);
    }
    out
}

/// Convert the normalized pattern to postfix (reverse Polish) notation with
/// the shunting-yard algorithm. Symbols and postfix operators are emitted
/// directly; infix operators pop higher-or-equal-precedence operators off
/// the stack before being pushed; parentheses group.
fn to_postfix(exp: &[char]) -> ParseResult<Vec<char>> {
    let mut postfix = Vec::with_capacity(exp.len());
    let mut stack: Vec<char> = Vec::with_capacity(exp.len());

    for &c in exp {
        if is_symbol(c) {
            postfix.push(c);
        } else if c == OP_OPEN_PARENTHESIS {
            stack.push(c);
        } else if c == OP_CLOSE_PARENTHESIS {
            loop {
                match stack.pop() {
                    Some(OP_OPEN_PARENTHESIS) => break,
                    Some(op) => postfix.push(op),
                    None => return Err(ErrorKind::UnmatchedParenthesis.into()),
                }
            }
        } else if is_postfix_operator(c) {
            postfix.push(c);
        } else {
            let prec = precedence(c);
            while let Some(&top) = stack.last() {
                if precedence(top) < prec {
                    break;
                }
                stack.pop();
                postfix.push(top);
            }
            stack.push(c);
        }
    }

    while let Some(op) = stack.pop() {
        if op == OP_OPEN_PARENTHESIS {
            return Err(ErrorKind::UnmatchedParenthesis.into());
        }
        postfix.push(op);
    }

    Ok(postfix)
}

/// Evaluate the postfix form into an NFA with an operand stack of fragments.
/// Exactly one operand must remain once the input is exhausted.
fn build_nfa(postfix: &[char], states: &mut StateArena) -> ParseResult<Nfa<char>> {
    let mut stack: Vec<Nfa<char>> = Vec::new();

    for &c in postfix {
        if is_symbol(c) {
            stack.push(Nfa::literal(states, unremap(c)));
        } else {
            match c {
                OP_CLOSURE => {
                    let operand = pop_operand(&mut stack)?;
                    stack.push(operand.closure(states));
                }
                OP_POS_CLOSURE => {
                    let operand = pop_operand(&mut stack)?;
                    stack.push(operand.positive_closure(states));
                }
                OP_CONCAT => {
                    let right = pop_operand(&mut stack)?;
                    let left = pop_operand(&mut stack)?;
                    stack.push(left.concat(right, states));
                }
                OP_OR => {
                    let right = pop_operand(&mut stack)?;
                    let left = pop_operand(&mut stack)?;
                    stack.push(left.union(right, states));
                }
                // Escapes and parentheses were consumed by earlier stages.
                _ => unreachable!("operator {:?} in postfix form", c),
            }
        }
    }

    let nfa = match stack.pop() {
        Some(nfa) => nfa,
        // Everything reduced away, e.g. a pattern of empty groups.
        None => return Err(ErrorKind::EmptyExpression.into()),
    };
    if !stack.is_empty() {
        return Err(ErrorKind::UnbalancedOperators.into());
    }

    Ok(nfa)
}

fn pop_operand(stack: &mut Vec<Nfa<char>>) -> ParseResult<Nfa<char>> {
    stack
        .pop()
        .ok_or_else(|| SyntaxError::new(ErrorKind::InsufficientOperands))
}
