//! Maximum bipartite matching over the feasibility graph.
//!
//! Each trip appears twice: once as a potential predecessor (left side) and
//! once as a potential successor (right side). A matched pair `(i, j)` means
//! trip `j` runs right after trip `i` on the same vehicle, so every matched
//! pair saves one vehicle.
//!
//! - [`AugmentingPath`]: Kuhn's augmenting-path algorithm, O(V·E). Used by
//!   the solver.
//! - [`UnitFlow`]: Edmonds-Karp max flow on the unit-capacity network
//!   `source → L(i) → R(j) → sink`. Same cardinality; kept for cross-checks.

mod augmenting;
mod flow;

pub use augmenting::AugmentingPath;
pub use flow::UnitFlow;

use crate::graph::FeasibilityGraph;

/// An algorithm that computes a maximum-cardinality matching.
///
/// Implementations allocate all working state per call, so a single value
/// can be shared across threads.
pub trait MaximumMatching {
    /// Computes a maximum matching of `graph`.
    fn maximum_matching(&self, graph: &FeasibilityGraph) -> Matching;
}

/// A set of (predecessor, successor) pairs over graph nodes, with each node
/// used at most once on each side.
///
/// # Examples
///
/// ```
/// use u_blocking::matching::Matching;
///
/// let m = Matching::from_pairs(3, [(0, 2), (2, 1)]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.successor(0), Some(2));
/// assert_eq!(m.predecessor(1), Some(2));
/// assert_eq!(m.predecessor(0), None);
///
/// // Node 0 cannot precede two trips.
/// assert!(Matching::from_pairs(3, [(0, 1), (0, 2)]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    predecessor: Vec<Option<usize>>,
    successor: Vec<Option<usize>>,
    size: usize,
}

impl Matching {
    /// Creates an empty matching over `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            predecessor: vec![None; num_nodes],
            successor: vec![None; num_nodes],
            size: 0,
        }
    }

    /// Creates a matching from explicit `(predecessor, successor)` pairs.
    ///
    /// Returns `None` if a node is out of bounds or used twice on the same
    /// side. Whether the pairs are graph edges is checked by
    /// [`Matching::is_valid`].
    pub fn from_pairs(
        num_nodes: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Option<Self> {
        let mut m = Self::new(num_nodes);
        for (pred, succ) in pairs {
            if pred >= num_nodes || succ >= num_nodes {
                return None;
            }
            if m.successor[pred].is_some() || m.predecessor[succ].is_some() {
                return None;
            }
            m.successor[pred] = Some(succ);
            m.predecessor[succ] = Some(pred);
            m.size += 1;
        }
        Some(m)
    }

    /// Creates a matching from raw link tables without checking that they
    /// agree with each other.
    #[cfg(test)]
    pub(crate) fn from_links(
        predecessor: Vec<Option<usize>>,
        successor: Vec<Option<usize>>,
    ) -> Self {
        let size = successor.iter().filter(|s| s.is_some()).count();
        Self {
            predecessor,
            successor,
            size,
        }
    }

    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of nodes on each side.
    pub fn num_nodes(&self) -> usize {
        self.successor.len()
    }

    /// The node matched as predecessor of `node`, if any.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessor.get(node).copied().flatten()
    }

    /// The node matched as successor of `node`, if any.
    pub fn successor(&self, node: usize) -> Option<usize> {
        self.successor.get(node).copied().flatten()
    }

    /// Matched `(predecessor, successor)` pairs, by ascending predecessor.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successor
            .iter()
            .enumerate()
            .filter_map(|(pred, succ)| succ.map(|s| (pred, s)))
    }

    /// Applies an augmenting path given as `(predecessor, successor)` pairs.
    ///
    /// The first predecessor must be free and the last successor unmatched;
    /// every intermediate successor is handed to the previous predecessor.
    pub(crate) fn augment(&mut self, path: &[(usize, usize)]) {
        for &(pred, succ) in path {
            self.successor[pred] = Some(succ);
            self.predecessor[succ] = Some(pred);
        }
        self.size += 1;
    }

    /// Returns `true` if both directions agree, no node is paired with
    /// itself, and every pair is an edge of `graph`.
    pub fn is_valid(&self, graph: &FeasibilityGraph) -> bool {
        if self.num_nodes() != graph.num_nodes() {
            return false;
        }
        let mut count = 0;
        for (pred, succ) in self.pairs() {
            if pred == succ || self.predecessor(succ) != Some(pred) || !graph.has_edge(pred, succ) {
                return false;
            }
            count += 1;
        }
        let back = self.predecessor.iter().filter(|p| p.is_some()).count();
        count == self.size && back == self.size
    }

    /// Returns `true` if no augmenting path exists in `graph`.
    ///
    /// Searches from every free predecessor with one shared visited set.
    pub fn is_maximum(&self, graph: &FeasibilityGraph) -> bool {
        let n = graph.num_nodes();
        let mut visited = vec![false; n];
        let mut stack = Vec::new();
        (0..n)
            .filter(|&u| self.successor(u).is_none())
            .all(|u| augmenting::find_path(graph, self, u, &mut visited, &mut stack).is_none())
    }
}
