//! Unit-capacity maximum flow matching (Edmonds-Karp).
//!
//! Network layout, all capacities 1:
//!
//! ```text
//! source → L(i)        for every trip i
//! L(i)   → R(j)        for every feasibility edge i → j
//! R(j)   → sink        for every trip j
//! ```
//!
//! Each augmentation is a shortest path found by breadth-first search over
//! residual capacities. The flow value equals the maximum matching size, and
//! the matching is read from the saturated `L(i) → R(j)` arcs.
//!
//! # Complexity
//!
//! O(V·E): at most V augmentations, each one BFS over the network.
//!
//! # Reference
//!
//! Edmonds & Karp (1972), "Theoretical improvements in algorithmic
//! efficiency for network flow problems".

use super::{Matching, MaximumMatching};
use crate::graph::FeasibilityGraph;
use log::trace;
use std::collections::VecDeque;

/// Max-flow formulation of the maximum matching.
///
/// Produces a matching of the same size as [`super::AugmentingPath`],
/// although not necessarily the same pairs.
///
/// # Examples
///
/// ```
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::graph::FeasibilityGraph;
/// use u_blocking::matching::{AugmentingPath, MaximumMatching, UnitFlow};
/// use u_blocking::models::Trip;
///
/// let trips = vec![
///     Trip::new(1, "a", 0, "b", 10),
///     Trip::new(2, "b", 20, "a", 30),
///     Trip::new(3, "b", 25, "a", 35),
/// ];
/// let mut dh = DeadheadMatrix::new();
/// for from in ["a", "b"] {
///     for to in ["a", "b"] {
///         dh.insert(from, to, 0);
///     }
/// }
///
/// let graph = FeasibilityGraph::build(&trips, &dh).unwrap();
/// let flow = UnitFlow.maximum_matching(&graph);
/// assert_eq!(flow.size(), AugmentingPath.maximum_matching(&graph).size());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitFlow;

impl MaximumMatching for UnitFlow {
    fn maximum_matching(&self, graph: &FeasibilityGraph) -> Matching {
        let n = graph.num_nodes();
        let mut network = Network::bipartite(graph);
        let mut flow = 0;
        while network.augment() {
            flow += 1;
        }
        trace!("Unit flow value {} over {} trips", flow, n);

        let mut matching = Matching::new(n);
        for pred in 0..n {
            let left = network.left(pred);
            let saturated = network.arcs[left]
                .iter()
                .filter(|arc| arc.capacity == 0 && network.is_right(arc.to))
                .map(|arc| arc.to - network.right(0));
            for succ in saturated {
                matching.augment(&[(pred, succ)]);
            }
        }
        matching
    }
}

#[derive(Debug, Clone, Copy)]
struct Arc {
    to: usize,
    capacity: u32,
    rev: usize,
}

/// Residual network over `2n + 2` nodes: source, `L(0..n)`, `R(0..n)`, sink.
#[derive(Debug)]
struct Network {
    arcs: Vec<Vec<Arc>>,
    n: usize,
}

impl Network {
    fn bipartite(graph: &FeasibilityGraph) -> Self {
        let n = graph.num_nodes();
        let mut network = Self {
            arcs: vec![Vec::new(); 2 * n + 2],
            n,
        };
        for i in 0..n {
            network.add_arc(network.source(), network.left(i), 1);
        }
        for i in 0..n {
            for &j in graph.successors(i) {
                network.add_arc(network.left(i), network.right(j), 1);
            }
        }
        for j in 0..n {
            network.add_arc(network.right(j), network.sink(), 1);
        }
        network
    }

    fn source(&self) -> usize {
        0
    }

    fn left(&self, i: usize) -> usize {
        1 + i
    }

    fn right(&self, j: usize) -> usize {
        1 + self.n + j
    }

    fn sink(&self) -> usize {
        1 + 2 * self.n
    }

    fn is_right(&self, node: usize) -> bool {
        node >= self.right(0) && node < self.sink()
    }

    fn add_arc(&mut self, from: usize, to: usize, capacity: u32) {
        let rev_from = self.arcs[to].len();
        let rev_to = self.arcs[from].len();
        self.arcs[from].push(Arc {
            to,
            capacity,
            rev: rev_from,
        });
        self.arcs[to].push(Arc {
            to: from,
            capacity: 0,
            rev: rev_to,
        });
    }

    /// Pushes one unit along a shortest residual path. Returns `false` when
    /// the sink is unreachable.
    fn augment(&mut self) -> bool {
        let source = self.source();
        let sink = self.sink();
        // parent[v] = (node, arc index) used to reach v
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; self.arcs.len()];
        let mut reached = vec![false; self.arcs.len()];
        reached[source] = true;

        let mut queue = VecDeque::from([source]);
        'search: while let Some(u) = queue.pop_front() {
            for (k, arc) in self.arcs[u].iter().enumerate() {
                if arc.capacity > 0 && !reached[arc.to] {
                    reached[arc.to] = true;
                    parent[arc.to] = Some((u, k));
                    if arc.to == sink {
                        break 'search;
                    }
                    queue.push_back(arc.to);
                }
            }
        }

        if !reached[sink] {
            return false;
        }

        let mut v = sink;
        while let Some((u, k)) = parent[v] {
            let rev = self.arcs[u][k].rev;
            self.arcs[u][k].capacity -= 1;
            self.arcs[v][rev].capacity += 1;
            v = u;
        }
        true
    }
}
