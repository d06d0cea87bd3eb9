use crate::dfa::Dfa;
use crate::graph::DiGraph;
use crate::nfa::Nfa;
use crate::state::{StateArena, StateId};

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use im::OrdSet;

impl<T> From<Nfa<T>> for Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Create an equivalent DFA from an NFA using the subset construction of
    /// Algorithm 3.20 from [Aho, Ullman]. Each DFA state stands for a set of
    /// NFA states, keyed exactly by that set; it is accepting iff the set
    /// contains the NFA's single accepting state.
    ///
    /// Transitions are added for every symbol of the NFA's alphabet, so an
    /// unreachable target set (including the empty set) becomes an ordinary
    /// dead state that can never accept. The construction terminates because
    /// the distinct reachable subsets are finite and each is enqueued once.
    fn from(nfa: Nfa<T>) -> Self {
        let mut states = StateArena::new();
        let mut graph = DiGraph::new();

        let symbols: Vec<T> = nfa.symbols().into_iter().collect();

        // Maps a set of NFA states to its DFA state.
        let mut state_map: HashMap<OrdSet<StateId>, StateId> = HashMap::new();
        let mut unmarked: VecDeque<(OrdSet<StateId>, StateId)> = VecDeque::new();

        // The DFA start state is the epsilon-closure of the NFA start state.
        let start_set = nfa.epsilon_closure(nfa.start);
        let start = states.add_state(start_set.contains(&nfa.end));
        state_map.insert(start_set.clone(), start);
        unmarked.push_back((start_set, start));

        while let Some((set, x)) = unmarked.pop_front() {
            for symbol in &symbols {
                let target = nfa.epsilon_closure_set(&nfa.reach(&set, symbol));

                let y = match state_map.get(&target) {
                    Some(&existing) => existing,
                    None => {
                        let y = states.add_state(target.contains(&nfa.end));
                        state_map.insert(target.clone(), y);
                        unmarked.push_back((target, y));
                        y
                    }
                };

                graph.add_edge(x, symbol.clone(), y);
            }
        }

        Dfa {
            states,
            graph,
            start,
        }
    }
}
