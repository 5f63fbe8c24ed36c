//! Block reconstruction from a matching.

use crate::error::ConsistencyViolation;
use crate::graph::FeasibilityGraph;
use crate::matching::Matching;
use crate::models::Block;
use log::trace;

/// Partitions the trips of `graph` into blocks by following matched
/// successor links.
///
/// Blocks start at every trip without a matched predecessor, taken in
/// ascending (departure time, trip ID) order, and are returned in that
/// order. Each block follows successor links until a trip has no successor.
///
/// # Errors
///
/// - [`ConsistencyViolation::ChainCycle`] if a chain reaches a trip that was
///   already placed.
/// - [`ConsistencyViolation::TripNotCovered`] if a trip is never reached,
///   which happens when the matching links trips in a cycle.
///
/// Neither can happen for a matching of a [`FeasibilityGraph`], which is
/// acyclic. `ChainCycle` additionally needs successor links that disagree
/// with predecessor links, which [`Matching`] never produces; the check keeps
/// a corrupted matching from looping forever.
///
/// # Examples
///
/// ```
/// use u_blocking::chain::reconstruct_blocks;
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::graph::FeasibilityGraph;
/// use u_blocking::matching::{AugmentingPath, MaximumMatching};
/// use u_blocking::models::Trip;
///
/// let trips = vec![
///     Trip::new(1, "a", 0, "a", 10),
///     Trip::new(2, "a", 5, "a", 15),
///     Trip::new(3, "a", 20, "a", 30),
/// ];
/// let mut dh = DeadheadMatrix::new();
/// dh.insert("a", "a", 0);
///
/// let graph = FeasibilityGraph::build(&trips, &dh).unwrap();
/// let matching = AugmentingPath.maximum_matching(&graph);
/// let blocks = reconstruct_blocks(&graph, &matching).unwrap();
/// let ids: Vec<Vec<u64>> = blocks.iter().map(|b| b.trip_ids()).collect();
/// assert_eq!(ids, vec![vec![1, 3], vec![2]]);
/// ```
pub fn reconstruct_blocks(
    graph: &FeasibilityGraph,
    matching: &Matching,
) -> Result<Vec<Block>, ConsistencyViolation> {
    let n = graph.num_nodes();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&node| {
        let trip = graph.trip(node);
        (trip.departure_time(), trip.id())
    });

    let mut placed = vec![false; n];
    let mut blocks = Vec::new();

    for &head in &order {
        if placed[head] || matching.predecessor(head).is_some() {
            continue;
        }

        let mut block = Block::new();
        let mut current = Some(head);
        while let Some(node) = current {
            if placed[node] {
                return Err(ConsistencyViolation::ChainCycle {
                    trip_id: graph.trip(node).id(),
                });
            }
            placed[node] = true;
            block.push_trip(graph.trip(node).clone());
            current = matching.successor(node);
        }

        trace!("Block {}: {:?}", blocks.len(), block.trip_ids());
        blocks.push(block);
    }

    if let Some(node) = order.iter().copied().find(|&node| !placed[node]) {
        return Err(ConsistencyViolation::TripNotCovered {
            trip_id: graph.trip(node).id(),
        });
    }

    Ok(blocks)
}
