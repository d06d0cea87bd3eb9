/// A handle to a state held in a [`StateArena`]. Two ids are equal only when
/// they refer to the same arena slot; the accepting flag never participates
/// in equality or hashing.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An arena of automaton states, scoped to a single compilation. States are
/// addressed by stable [`StateId`] indices and carry a single mutable
/// attribute: whether the state is accepting.
#[derive(Clone, Debug, Default)]
pub struct StateArena {
    accepting: Vec<bool>,
}

impl StateArena {
    /// Create an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh state and return its id.
    #[inline]
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let id = StateId(self.accepting.len());
        self.accepting.push(accepting);
        id
    }

    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state.0]
    }

    /// Flip the accepting flag of an existing state. Automaton combination
    /// demotes the end state of a consumed operand through this.
    #[inline]
    pub fn set_accepting(&mut self, state: StateId, accepting: bool) {
        self.accepting[state.0] = accepting;
    }

    /// The number of states minted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.accepting.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accepting.is_empty()
    }

    /// Iterator over the ids of all accepting states.
    #[inline]
    pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting
            .iter()
            .enumerate()
            .filter(|(_, &accepting)| accepting)
            .map(|(i, _)| StateId(i))
    }
}
