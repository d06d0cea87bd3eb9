use regexp_dfa::{compile, RegExp};

#[test]
fn test_compile_deterministic() {
    let inputs = [
        "", "a", "b", "ab", "ba", "aab", "abb", "abab", "*", "a*", " ", "\u{1}", "\u{e000}",
    ];

    for expr in ["a|b", "abc*", "(ab)+", "(a|b)*c"] {
        let first = RegExp::new(expr).unwrap();
        let second = RegExp::new(expr).unwrap();
        for s in inputs {
            assert_eq!(
                first.is_match(s),
                second.is_match(s),
                "compiling {:?} twice diverged on {:?}",
                expr,
                s
            );
        }
    }
}

#[test]
fn test_match_is_total() {
    let re = compile("(a|b)+c*").unwrap();

    // Arbitrary inputs, including operator characters and codepoints from
    // the internal remap range, must never panic.
    for s in ["", "a", "abc", "((((", "\\", "|*+", "\u{1}\u{0}", "\u{e02a}", "日本語"] {
        let _ = re.is_match(s);
    }
}

#[test]
fn test_display() {
    let re = RegExp::new("(ab)+").unwrap();
    assert_eq!("(ab)+", re.as_str());
    assert_eq!("(ab)+", re.to_string());
}
