//! Kuhn's augmenting-path matching.
//!
//! For each predecessor in ascending trip ID order, a depth-first search
//! looks for an alternating path to an unmatched successor. Successors are
//! explored in adjacency order and each attempt starts with a fresh visited
//! set, so the result is fully determined by the graph.
//!
//! The search runs on an explicit stack. It explores nodes in exactly the
//! order a recursive implementation would, without being bounded by the call
//! stack on long chains.
//!
//! # Complexity
//!
//! O(V·E) where V = number of trips and E = number of feasibility edges.
//!
//! # Reference
//!
//! Kuhn (1955), "The Hungarian method for the assignment problem".

use super::{Matching, MaximumMatching};
use crate::graph::FeasibilityGraph;
use log::trace;

/// Augmenting-path (Kuhn) maximum matching.
///
/// # Examples
///
/// ```
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::graph::FeasibilityGraph;
/// use u_blocking::matching::{AugmentingPath, MaximumMatching};
/// use u_blocking::models::Trip;
///
/// let trips = vec![
///     Trip::new(1, "a", 0, "a", 10),
///     Trip::new(2, "a", 20, "a", 30),
///     Trip::new(3, "a", 40, "a", 50),
/// ];
/// let mut dh = DeadheadMatrix::new();
/// dh.insert("a", "a", 0);
///
/// let graph = FeasibilityGraph::build(&trips, &dh).unwrap();
/// let matching = AugmentingPath.maximum_matching(&graph);
/// assert_eq!(matching.size(), 2);
/// assert!(matching.is_maximum(&graph));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AugmentingPath;

impl MaximumMatching for AugmentingPath {
    fn maximum_matching(&self, graph: &FeasibilityGraph) -> Matching {
        let n = graph.num_nodes();
        let mut matching = Matching::new(n);
        let mut visited = vec![false; n];
        let mut stack = Vec::new();

        for root in 0..n {
            visited.iter_mut().for_each(|v| *v = false);
            if let Some(path) = find_path(graph, &matching, root, &mut visited, &mut stack) {
                trace!(
                    "Trip {} augments along {} edge(s)",
                    graph.trip(root).id(),
                    path.len()
                );
                matching.augment(&path);
            }
        }

        matching
    }
}

/// A predecessor on the search stack and the index of the next successor to
/// try.
#[derive(Debug, Clone, Copy)]
pub(super) struct Frame {
    node: usize,
    next: usize,
}

/// Depth-first search for an augmenting path starting at the free
/// predecessor `root`.
///
/// Marks every successor it examines in `visited`. On success returns the
/// path as `(predecessor, successor)` pairs from `root` outward; the last
/// successor is unmatched.
pub(super) fn find_path(
    graph: &FeasibilityGraph,
    matching: &Matching,
    root: usize,
    visited: &mut [bool],
    stack: &mut Vec<Frame>,
) -> Option<Vec<(usize, usize)>> {
    stack.clear();
    stack.push(Frame {
        node: root,
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let successors = graph.successors(frame.node);
        let Some(&succ) = successors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if visited[succ] {
            continue;
        }
        visited[succ] = true;

        match matching.predecessor(succ) {
            None => {
                let path = stack
                    .iter()
                    .map(|f| (f.node, graph.successors(f.node)[f.next - 1]))
                    .collect();
                return Some(path);
            }
            Some(pred) => stack.push(Frame {
                node: pred,
                next: 0,
            }),
        }
    }

    None
}
