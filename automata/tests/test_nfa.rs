use automata::{Nfa, StateArena};

#[test]
fn test_literal() {
    let mut states = StateArena::new();
    let n = Nfa::literal(&mut states, 'a');

    assert_eq!(2, states.len());
    assert_eq!(1, n.graph.len());
    assert_ne!(n.start, n.end);
    assert!(states.is_accepting(n.end));
    assert!(!states.is_accepting(n.start));
}

#[test]
fn test_closure() {
    let mut states = StateArena::new();
    let n = Nfa::literal(&mut states, 'a');
    let old_end = n.end;
    let star = n.closure(&mut states);

    assert_eq!(4, states.len());
    // The literal edge plus four epsilon edges.
    assert_eq!(5, star.graph.len());

    // The consumed operand's end state is demoted; exactly one accepting
    // state remains.
    assert!(!states.is_accepting(old_end));
    assert!(states.is_accepting(star.end));
    assert_eq!(1, states.accepting_states().count());
}

#[test]
fn test_positive_closure() {
    let mut states = StateArena::new();
    let n = Nfa::literal(&mut states, 'a');
    let plus = n.positive_closure(&mut states);

    // The starred copy shares state identities with the original, so only
    // the two closure states are new.
    assert_eq!(4, states.len());
    // literal + four closure epsilons + the concatenation epsilon; the
    // cloned literal edge coalesces away.
    assert_eq!(6, plus.graph.len());
    assert_eq!(1, states.accepting_states().count());
}

#[test]
fn test_concat() {
    let mut states = StateArena::new();
    let n1 = Nfa::literal(&mut states, 'a');
    let n2 = Nfa::literal(&mut states, 'b');
    let (s1, e1, e2) = (n1.start, n1.end, n2.end);
    let concat = n1.concat(n2, &mut states);

    assert_eq!(4, states.len());
    assert_eq!(3, concat.graph.len());
    assert_eq!(s1, concat.start);
    assert_eq!(e2, concat.end);
    assert!(!states.is_accepting(e1));
    assert_eq!(1, states.accepting_states().count());
}

#[test]
fn test_union() {
    let mut states = StateArena::new();
    let n1 = Nfa::literal(&mut states, 'a');
    let n2 = Nfa::literal(&mut states, 'b');
    let (e1, e2) = (n1.end, n2.end);
    let union = n1.union(n2, &mut states);

    assert_eq!(6, states.len());
    assert_eq!(6, union.graph.len());
    assert!(!states.is_accepting(e1));
    assert!(!states.is_accepting(e2));
    assert!(states.is_accepting(union.end));
    assert_eq!(1, states.accepting_states().count());
}

#[test]
fn test_symbols() {
    let mut states = StateArena::new();
    let n1 = Nfa::literal(&mut states, 'a');
    let n2 = Nfa::literal(&mut states, 'b');
    let n3 = Nfa::literal(&mut states, 'a');
    let union = n1.union(n2, &mut states).concat(n3, &mut states);

    let symbols = union.symbols();
    assert_eq!(2, symbols.len());
    assert!(symbols.contains(&'a'));
    assert!(symbols.contains(&'b'));
}

#[test]
fn test_epsilon_closure() {
    let mut states = StateArena::new();
    let n = Nfa::literal(&mut states, 'a');
    let (inner_start, inner_end) = (n.start, n.end);
    // Closure construction leaves an epsilon cycle between the inner states.
    let star = n.closure(&mut states);

    let from_start = star.epsilon_closure(star.start);
    assert!(from_start.contains(&star.start));
    assert!(from_start.contains(&inner_start));
    assert!(from_start.contains(&star.end));
    assert!(!from_start.contains(&inner_end));

    let from_inner_end = star.epsilon_closure(inner_end);
    assert!(from_inner_end.contains(&inner_end));
    assert!(from_inner_end.contains(&inner_start));
    assert!(from_inner_end.contains(&star.end));

    // A state with no outgoing epsilon edges closes over itself only.
    let from_end = star.epsilon_closure(star.end);
    assert_eq!(1, from_end.len());
}

#[test]
fn test_reach() {
    let mut states = StateArena::new();
    let n = Nfa::literal(&mut states, 'a');
    let (start, end) = (n.start, n.end);

    let set = n.epsilon_closure(start);
    let reached = n.reach(&set, &'a');
    assert_eq!(1, reached.len());
    assert!(reached.contains(&end));

    assert!(n.reach(&set, &'b').is_empty());
}
