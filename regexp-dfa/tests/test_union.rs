use regexp_dfa::RegExp;

include!("macros.rs");

#[test]
fn test_union() {
    let exprs = ["a|b", "(a|b)", "(a)|b", "a|(b)", "((a)|b)"];
    let valids = ["a", "b"];
    let invalids = ["", " ", "c", "a ", " a", "ab"];
    run_tests!(&exprs, &valids, &invalids);

    let exprs = ["a|b|c", "(a|b)|c", "(a)|b|(c)", "a|(b)|c", "a|(b|c)"];
    let valids = ["a", "b", "c"];
    let invalids = ["", " ", "d", "a ", " a", "ab", "bc"];
    run_tests!(&exprs, &valids, &invalids);

    let exprs = [r"\*|a", r"\*|(a)"];
    let valids = ["*", "a"];
    let invalids = ["", " ", "*a", r"\*"];
    run_tests!(&exprs, &valids, &invalids);
}

#[test]
fn test_alternation_law() {
    // match(P|Q, s) == match(P, s) || match(Q, s)
    let patterns = ["a", "ab", "a*", "(ab)+", "a|b"];
    let inputs = ["", "a", "b", "ab", "aa", "abab", "ba", "c"];

    for p in patterns {
        for q in patterns {
            let combined = RegExp::new(&format!("({})|({})", p, q)).unwrap();
            let left = RegExp::new(p).unwrap();
            let right = RegExp::new(q).unwrap();

            for s in inputs {
                assert_eq!(
                    combined.is_match(s),
                    left.is_match(s) || right.is_match(s),
                    r#"alternation law broken for "{}" | "{}" on "{}""#,
                    p,
                    q,
                    s
                );
            }
        }
    }
}
