use crate::graph::DiGraph;
use crate::state::{StateArena, StateId};

use std::collections::HashSet;
use std::hash::Hash;

use im::OrdSet;

/// A transition between states in an NFA.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Transition<T> {
    /// A transition on some input symbol.
    Some(T),
    /// An epsilon transition allows the NFA to change its state spontaneously
    /// without consuming an input symbol.
    Epsilon,
}

/// A non-deterministic finite automaton, or NFA, built by Thompson's
/// construction. Every NFA produced by the operators below has exactly one
/// accepting state, `end`; the operators demote the end states of consumed
/// operands to keep it that way.
///
/// The states referenced by the edges live in a [`StateArena`] scoped to one
/// compilation, which every operator takes by mutable reference.
#[derive(Clone, Debug)]
pub struct Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// The edge set of the automaton.
    pub graph: DiGraph<StateId, Transition<T>>,
    /// An NFA has a single start state.
    pub start: StateId,
    /// The single accepting state.
    pub end: StateId,
}

impl<T> Nfa<T>
where
    T: Clone + Eq + Hash,
{
    /// Build an NFA with two states and a transition on the given symbol
    /// between them.
    #[inline]
    pub fn literal(states: &mut StateArena, symbol: T) -> Self {
        let start = states.add_state(false);
        let end = states.add_state(true);

        let mut graph = DiGraph::new();
        graph.add_edge(start, Transition::Some(symbol), end);

        Nfa { graph, start, end }
    }

    /// The Kleene star of this NFA: zero or more repetitions.
    ///
    /// ```text
    ///      +----------->--------------+
    ///    /                             \
    ///   a -> nfa(s) -> NFA -> nfa(e) -> b
    ///          \               /
    ///           +------<------+
    /// ```
    #[inline]
    pub fn closure(self, states: &mut StateArena) -> Self {
        let a = states.add_state(false);
        let b = states.add_state(true);

        let mut graph = self.graph;
        graph.add_edge(a, Transition::Epsilon, self.start);
        graph.add_edge(a, Transition::Epsilon, b);
        graph.add_edge(self.end, Transition::Epsilon, b);
        graph.add_edge(self.end, Transition::Epsilon, self.start);

        states.set_accepting(self.end, false);
        Nfa {
            graph,
            start: a,
            end: b,
        }
    }

    /// The positive closure of this NFA: one or more repetitions, which is
    /// the NFA concatenated with its own Kleene star. The starred copy shares
    /// state identities with the original, as the edge sets coalesce.
    #[inline]
    pub fn positive_closure(self, states: &mut StateArena) -> Self {
        let star = self.clone().closure(states);
        self.concat(star, states)
    }

    /// The concatenation of this NFA and another:
    ///
    /// ```text
    ///  s1 --> NFA1 --> e1 --> s2 --> NFA2 --> e2
    /// ```
    #[inline]
    pub fn concat(self, other: Self, states: &mut StateArena) -> Self {
        let mut graph = self.graph.union(other.graph);
        graph.add_edge(self.end, Transition::Epsilon, other.start);

        states.set_accepting(self.end, false);
        Nfa {
            graph,
            start: self.start,
            end: other.end,
        }
    }

    /// The alternation of this NFA and another, with epsilon transitions
    /// from a new start state to both operand starts and from both operand
    /// ends to a new accepting state.
    #[inline]
    pub fn union(self, other: Self, states: &mut StateArena) -> Self {
        let a = states.add_state(false);
        let b = states.add_state(true);

        let mut graph = self.graph.union(other.graph);
        graph.add_edge(a, Transition::Epsilon, self.start);
        graph.add_edge(a, Transition::Epsilon, other.start);
        graph.add_edge(self.end, Transition::Epsilon, b);
        graph.add_edge(other.end, Transition::Epsilon, b);

        states.set_accepting(self.end, false);
        states.set_accepting(other.end, false);
        Nfa {
            graph,
            start: a,
            end: b,
        }
    }

    /// All distinct non-epsilon symbols appearing as edge weights.
    #[inline]
    pub fn symbols(&self) -> HashSet<T> {
        self.graph
            .edges()
            .filter_map(|e| match &e.weight {
                Transition::Some(t) => Some(t.clone()),
                Transition::Epsilon => None,
            })
            .collect()
    }

    /// The epsilon-closure of a state: the state itself plus every state
    /// transitively reachable through epsilon transitions only. Closure
    /// construction leaves epsilon cycles in the graph, so this walks a
    /// worklist with the closure set itself as the visited guard.
    #[inline]
    pub fn epsilon_closure(&self, state: StateId) -> OrdSet<StateId> {
        let mut closure = OrdSet::new();
        let mut worklist = vec![state];

        while let Some(s) = worklist.pop() {
            if closure.insert(s).is_some() {
                continue;
            }
            for edge in self.graph.outgoing(s) {
                if let Transition::Epsilon = edge.weight {
                    if !closure.contains(&edge.to) {
                        worklist.push(edge.to);
                    }
                }
            }
        }

        closure
    }

    /// The union of epsilon-closures of each state in the given set.
    #[inline]
    pub fn epsilon_closure_set(&self, states: &OrdSet<StateId>) -> OrdSet<StateId> {
        states
            .iter()
            .map(|&s| self.epsilon_closure(s))
            .fold(OrdSet::new(), OrdSet::union)
    }

    /// The set of states reachable from the given set through non-epsilon
    /// transitions on exactly the given symbol.
    #[inline]
    pub fn reach(&self, states: &OrdSet<StateId>, symbol: &T) -> OrdSet<StateId> {
        let mut reachable = OrdSet::new();
        for &s in states.iter() {
            for edge in self.graph.outgoing(s) {
                if let Transition::Some(t) = &edge.weight {
                    if t == symbol {
                        reachable.insert(edge.to);
                    }
                }
            }
        }
        reachable
    }
}
