//! Trip feasibility graph.

use crate::deadhead::DeadheadMatrix;
use crate::error::ScheduleError;
use crate::models::{Trip, TripId};
use log::debug;

/// Directed "can-follow" graph over trips.
///
/// Nodes are the trips sorted by ascending ID; node `k` is `trips()[k]`.
/// An edge `i → j` means one vehicle can operate trip `j` right after trip
/// `i`:
///
/// - `arrival(i) + deadhead(arrival_terminal(i), departure_terminal(j)) <= departure(j)`
/// - `i` precedes `j` in the (departure, arrival, id) order
///
/// The second condition only matters for simultaneous zero-duration trips
/// joined by zero deadheads; it keeps the graph acyclic. Successor lists are
/// sorted by node index, i.e. by ascending trip ID.
///
/// # Examples
///
/// ```
/// use u_blocking::deadhead::DeadheadMatrix;
/// use u_blocking::graph::FeasibilityGraph;
/// use u_blocking::models::Trip;
///
/// let trips = vec![
///     Trip::new(2, "b", 480, "a", 510),
///     Trip::new(1, "a", 420, "b", 445),
/// ];
/// let mut dh = DeadheadMatrix::new();
/// dh.insert("a", "a", 0);
/// dh.insert("a", "b", 15);
/// dh.insert("b", "a", 20);
/// dh.insert("b", "b", 0);
///
/// let graph = FeasibilityGraph::build(&trips, &dh).unwrap();
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph.trip(0).id(), 1);
/// assert_eq!(graph.successors(0), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct FeasibilityGraph {
    trips: Vec<Trip>,
    successors: Vec<Vec<usize>>,
    num_edges: usize,
}

impl FeasibilityGraph {
    /// Builds the graph by checking every ordered trip pair, O(n²).
    ///
    /// Every pair `(arrival_terminal(i), departure_terminal(j))` with `i != j`
    /// must be in `deadheads`; the first missing pair in scan order fails with
    /// [`ScheduleError::MissingDeadheadEntry`]. Trip IDs are assumed unique
    /// (see [`crate::validation::validate_trips`]).
    pub fn build(trips: &[Trip], deadheads: &DeadheadMatrix) -> Result<Self, ScheduleError> {
        let mut trips = trips.to_vec();
        trips.sort_by_key(Trip::id);

        let n = trips.len();
        let mut successors = vec![Vec::new(); n];
        let mut num_edges = 0;

        // Terminal positions, resolved once per trip.
        let arrivals: Vec<Option<usize>> = trips
            .iter()
            .map(|t| deadheads.index_of(t.arrival_terminal()))
            .collect();
        let departures: Vec<Option<usize>> = trips
            .iter()
            .map(|t| deadheads.index_of(t.departure_terminal()))
            .collect();

        for (i, from) in trips.iter().enumerate() {
            for (j, to) in trips.iter().enumerate() {
                if i == j {
                    continue;
                }
                let deadhead = arrivals[i]
                    .zip(departures[j])
                    .and_then(|(a, d)| deadheads.get_by_index(a, d))
                    .ok_or_else(|| ScheduleError::MissingDeadheadEntry {
                        from: from.arrival_terminal().clone(),
                        to: to.departure_terminal().clone(),
                    })?;
                if from.can_reach(to, deadhead) && from.precedes(to) {
                    successors[i].push(j);
                    num_edges += 1;
                }
            }
        }

        debug!("Built feasibility graph: {} trips, {} edges", n, num_edges);

        Ok(Self {
            trips,
            successors,
            num_edges,
        })
    }

    /// Creates a graph from explicit successor lists.
    ///
    /// `trips` must be sorted by ID and `successors[i]` sorted ascending.
    #[cfg(test)]
    pub(crate) fn from_successors(trips: Vec<Trip>, successors: Vec<Vec<usize>>) -> Self {
        let num_edges = successors.iter().map(Vec::len).sum();
        Self {
            trips,
            successors,
            num_edges,
        }
    }

    /// Number of trips (nodes).
    pub fn num_nodes(&self) -> usize {
        self.trips.len()
    }

    /// Number of feasibility edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Trips in node order (ascending ID).
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Trip at the given node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn trip(&self, node: usize) -> &Trip {
        &self.trips[node]
    }

    /// Feasible successors of `node`, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    /// Node index of the trip with the given ID.
    pub fn node_of(&self, id: TripId) -> Option<usize> {
        self.trips.binary_search_by_key(&id, Trip::id).ok()
    }

    /// Returns `true` if `to` may directly follow `from`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors
            .get(from)
            .is_some_and(|s| s.binary_search(&to).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Terminal;
    use crate::test_utils::{reference_deadheads, reference_trips};

    fn successor_ids(graph: &FeasibilityGraph, id: TripId) -> Vec<TripId> {
        let node = graph.node_of(id).expect("known trip");
        graph
            .successors(node)
            .iter()
            .map(|&s| graph.trip(s).id())
            .collect()
    }

    #[test]
    fn test_reference_edges() {
        let graph = FeasibilityGraph::build(&reference_trips(), &reference_deadheads())
            .expect("complete matrix");
        assert_eq!(graph.num_nodes(), 8);
        assert_eq!(successor_ids(&graph, 1), vec![6, 7, 8]);
        assert_eq!(successor_ids(&graph, 2), vec![5, 6, 7, 8]);
        assert_eq!(successor_ids(&graph, 3), vec![8]);
        assert!(successor_ids(&graph, 4).is_empty());
        assert_eq!(successor_ids(&graph, 5), vec![6, 7, 8]);
        assert_eq!(successor_ids(&graph, 6), vec![7, 8]);
        assert!(successor_ids(&graph, 7).is_empty());
        assert!(successor_ids(&graph, 8).is_empty());
        assert_eq!(graph.num_edges(), 13);
    }

    #[test]
    fn test_edges_independent_of_terminal_registration() {
        let mut reversed = DeadheadMatrix::new();
        for (from, row) in reference_deadheads().to_nested().into_iter().rev() {
            for (to, minutes) in row.into_iter().rev() {
                reversed.insert(from.clone(), to, minutes);
            }
        }
        assert_eq!(reversed.terminals()[0], Terminal::from("d"));

        let expected = FeasibilityGraph::build(&reference_trips(), &reference_deadheads())
            .expect("complete matrix");
        let graph = FeasibilityGraph::build(&reference_trips(), &reversed).expect("complete matrix");
        assert_eq!(graph.num_edges(), expected.num_edges());
        for node in 0..graph.num_nodes() {
            assert_eq!(graph.successors(node), expected.successors(node));
        }
    }

    #[test]
    fn test_registered_terminal_without_pair() {
        // Both terminals are known to the matrix, only the pair is absent.
        let mut dh = DeadheadMatrix::new();
        dh.insert("a", "a", 0);
        dh.insert("b", "b", 0);
        let trips = vec![
            Trip::new(1, "a", 0, "a", 10),
            Trip::new(2, "b", 20, "b", 30),
        ];
        let err = FeasibilityGraph::build(&trips, &dh).expect_err("missing");
        assert_eq!(
            err,
            ScheduleError::MissingDeadheadEntry {
                from: Terminal::from("a"),
                to: Terminal::from("b"),
            }
        );
    }

    #[test]
    fn test_isolated_trip_has_no_predecessor() {
        let graph = FeasibilityGraph::build(&reference_trips(), &reference_deadheads())
            .expect("complete matrix");
        let four = graph.node_of(4).expect("known trip");
        for node in 0..graph.num_nodes() {
            assert!(!graph.has_edge(node, four));
        }
    }

    #[test]
    fn test_nodes_sorted_by_id() {
        let mut trips = reference_trips();
        trips.reverse();
        let graph = FeasibilityGraph::build(&trips, &reference_deadheads()).expect("valid");
        let ids: Vec<TripId> = graph.trips().iter().map(Trip::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(successor_ids(&graph, 2), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let trips = vec![
            Trip::new(1, "a", 420, "b", 445),
            Trip::new(2, "z", 500, "a", 530),
        ];
        let err = FeasibilityGraph::build(&trips, &reference_deadheads()).expect_err("missing");
        assert_eq!(
            err,
            ScheduleError::MissingDeadheadEntry {
                from: Terminal::from("b"),
                to: Terminal::from("z"),
            }
        );
    }

    #[test]
    fn test_missing_entry_even_when_unreachable() {
        // Trip 2 departs long before trip 1 arrives; the pair is still required.
        let mut dh = DeadheadMatrix::new();
        dh.insert("b", "c", 10);
        let trips = vec![
            Trip::new(1, "a", 600, "b", 700),
            Trip::new(2, "c", 100, "a", 200),
        ];
        let err = FeasibilityGraph::build(&trips, &dh).expect_err("missing");
        assert_eq!(
            err,
            ScheduleError::MissingDeadheadEntry {
                from: Terminal::from("a"),
                to: Terminal::from("a"),
            }
        );
    }

    #[test]
    fn test_self_pair_not_required() {
        let mut dh = DeadheadMatrix::new();
        dh.insert("x", "y", 5);
        let trips = vec![Trip::new(1, "y", 0, "x", 10)];
        let graph = FeasibilityGraph::build(&trips, &dh).expect("single trip needs no pair");
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_zero_duration_trips_stay_acyclic() {
        let mut dh = DeadheadMatrix::new();
        dh.insert("a", "a", 0);
        let trips = vec![
            Trip::new(2, "a", 500, "a", 500),
            Trip::new(1, "a", 500, "a", 500),
        ];
        let graph = FeasibilityGraph::build(&trips, &dh).expect("valid");
        assert_eq!(graph.num_edges(), 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn test_zero_duration_then_real_trip() {
        let mut dh = DeadheadMatrix::new();
        dh.insert("a", "a", 0);
        let trips = vec![
            Trip::new(1, "a", 500, "a", 530),
            Trip::new(2, "a", 500, "a", 500),
        ];
        let graph = FeasibilityGraph::build(&trips, &dh).expect("valid");
        // 2 (zero duration) can hand over to 1 at the same minute.
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn test_empty() {
        let graph = FeasibilityGraph::build(&[], &DeadheadMatrix::new()).expect("valid");
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.has_edge(0, 0));
    }
}
