use crate::graph::DiGraph;
use crate::state::{StateArena, StateId};

use std::hash::Hash;

/// A deterministic finite automaton, or DFA. Each state has at most one
/// outgoing edge per symbol, a property guaranteed by subset construction
/// (see [`crate::convert`]). A DFA owns its own state arena and is never
/// mutated after construction, so matching is stateless and may run from
/// any number of threads.
#[derive(Clone, Debug)]
pub struct Dfa<T>
where
    T: Clone + Eq + Hash,
{
    /// The states of the DFA and their accepting flags.
    pub states: StateArena,
    /// The edge set of the automaton.
    pub graph: DiGraph<StateId, T>,
    /// A DFA has a single start state.
    pub start: StateId,
}

impl<T> Dfa<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states.is_accepting(state)
    }

    /// Determine if the given input is accepted by the DFA.
    ///
    /// The walk is a deterministic transition chase: each input item must
    /// have a uniquely labeled outgoing edge from the current state, and the
    /// absence of one rejects immediately. Acceptance is checked only after
    /// the final item has been consumed; an empty input always rejects, even
    /// when the start state is itself accepting.
    #[inline]
    pub fn is_match<I>(&self, input: I) -> bool
    where
        T: PartialEq<I::Item>,
        I: IntoIterator,
    {
        let mut state = self.start;
        let mut consumed = false;

        for is in input {
            consumed = true;
            match self.graph.outgoing(state).find(|e| e.weight == is) {
                Some(edge) => state = edge.to,
                None => return false,
            }
        }

        consumed && self.is_accepting(state)
    }
}
