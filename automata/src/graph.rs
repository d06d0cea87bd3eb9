use std::collections::HashSet;
use std::hash::Hash;

/// A weighted directed edge. An edge is an immutable value triple; equality
/// and hashing are structural on (from, weight, to).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge<V, W> {
    pub from: V,
    pub weight: W,
    pub to: V,
}

impl<V, W> Edge<V, W> {
    #[inline]
    pub fn new(from: V, weight: W, to: V) -> Self {
        Self { from, weight, to }
    }
}

/// A weighted directed multigraph with set semantics: multiple edges between
/// the same pair of vertices are permitted as long as their weights differ,
/// and duplicate triples coalesce.
#[derive(Clone, Debug)]
pub struct DiGraph<V, W>
where
    V: Copy + Eq + Hash,
    W: Clone + Eq + Hash,
{
    edges: HashSet<Edge<V, W>>,
}

impl<V, W> DiGraph<V, W>
where
    V: Copy + Eq + Hash,
    W: Clone + Eq + Hash,
{
    /// Create an empty graph.
    #[inline]
    pub fn new() -> Self {
        Self {
            edges: HashSet::new(),
        }
    }

    /// Insert an edge. Returns false if an identical edge was already
    /// present.
    #[inline]
    pub fn add_edge(&mut self, from: V, weight: W, to: V) -> bool {
        self.edges.insert(Edge::new(from, weight, to))
    }

    /// The full edge set.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.edges.iter()
    }

    /// The outgoing edges of a vertex, in no particular order.
    #[inline]
    pub fn outgoing(&self, from: V) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.edges.iter().filter(move |e| e.from == from)
    }

    /// The union of two edge sets.
    #[inline]
    pub fn union(mut self, other: Self) -> Self {
        self.edges.extend(other.edges);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<V, W> Default for DiGraph<V, W>
where
    V: Copy + Eq + Hash,
    W: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
