use proptest::prelude::*;
use std::collections::HashMap;
use u_blocking::config::SolverConfig;
use u_blocking::deadhead::DeadheadMatrix;
use u_blocking::evaluation::ScheduleEvaluator;
use u_blocking::graph::FeasibilityGraph;
use u_blocking::matching::{AugmentingPath, MaximumMatching, UnitFlow};
use u_blocking::models::{Trip, TripId};
use u_blocking::BlockScheduler;

const TERMINALS: [&str; 3] = ["a", "b", "c"];

prop_compose! {
    fn generate_trips(max_trips: usize)
    (
     specs in prop::collection::vec((0..TERMINALS.len(), 0i64..300, 0i64..60, 0..TERMINALS.len()), 0..max_trips)
    ) -> Vec<Trip> {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (from, departure, duration, to))| {
                Trip::new(idx as TripId * 7 + 3, TERMINALS[from], departure, TERMINALS[to], departure + duration)
            })
            .collect()
    }
}

prop_compose! {
    fn generate_deadheads()
    (
     minutes in prop::collection::vec(0u32..40, TERMINALS.len() * TERMINALS.len())
    ) -> DeadheadMatrix {
        let mut dh = DeadheadMatrix::new();
        for (i, from) in TERMINALS.iter().enumerate() {
            for (j, to) in TERMINALS.iter().enumerate() {
                dh.insert(*from, *to, if i == j { 0 } else { minutes[i * TERMINALS.len() + j] });
            }
        }
        dh
    }
}

/// Largest number of trips in service at the same instant.
fn peak_concurrency(trips: &[Trip]) -> usize {
    let mut events: Vec<(i64, i32)> = trips
        .iter()
        .filter(|t| t.arrival_time() > t.departure_time())
        .flat_map(|t| [(t.departure_time(), 1), (t.arrival_time(), -1)])
        .collect();
    // Arrivals before departures at the same minute.
    events.sort();
    let mut current = 0i32;
    let mut peak = 0i32;
    for (_, delta) in events {
        current += delta;
        peak = peak.max(current);
    }
    peak as usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn schedule_partitions_trips(trips in generate_trips(40), dh in generate_deadheads()) {
        let schedule = BlockScheduler::default().solve(&trips, &dh).unwrap();

        let mut counts: HashMap<TripId, usize> = HashMap::new();
        for id in schedule.block_ids().into_iter().flatten() {
            *counts.entry(id).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), trips.len());
        prop_assert!(counts.values().all(|&c| c == 1));
        prop_assert!(schedule.blocks().iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn vehicle_count_matches_blocks(trips in generate_trips(40), dh in generate_deadheads()) {
        let schedule = BlockScheduler::default().solve(&trips, &dh).unwrap();
        prop_assert_eq!(schedule.min_vehicles(), schedule.num_blocks());
        prop_assert_eq!(schedule.min_vehicles(), trips.len() - schedule.matching_size());
        prop_assert!(schedule.min_vehicles() >= peak_concurrency(&trips));
    }

    #[test]
    fn blocks_are_feasible(trips in generate_trips(40), dh in generate_deadheads()) {
        // Solve without internal checks and evaluate independently.
        let scheduler = BlockScheduler::new(SolverConfig::default().with_verify(false));
        let schedule = scheduler.solve(&trips, &dh).unwrap();
        let violations = ScheduleEvaluator::new(&trips, &dh).evaluate(&schedule);
        prop_assert!(violations.is_empty(), "{:?}", violations);

        for block in schedule.blocks() {
            for (prev, next) in block.links() {
                let deadhead = dh.get(prev.arrival_terminal(), next.departure_terminal()).unwrap();
                prop_assert!(prev.arrival_time() + i64::from(deadhead) <= next.departure_time());
            }
        }
    }

    #[test]
    fn matchers_agree_on_size(trips in generate_trips(40), dh in generate_deadheads()) {
        let graph = FeasibilityGraph::build(&trips, &dh).unwrap();
        let kuhn = AugmentingPath.maximum_matching(&graph);
        let flow = UnitFlow.maximum_matching(&graph);

        prop_assert_eq!(kuhn.size(), flow.size());
        prop_assert!(kuhn.is_valid(&graph));
        prop_assert!(flow.is_valid(&graph));
        prop_assert!(kuhn.is_maximum(&graph));
        prop_assert!(flow.is_maximum(&graph));
    }

    #[test]
    fn input_order_is_irrelevant(trips in generate_trips(40), dh in generate_deadheads()) {
        let scheduler = BlockScheduler::default();
        let forward = scheduler.solve(&trips, &dh).unwrap();

        let mut reversed = trips.clone();
        reversed.reverse();
        let backward = scheduler.solve(&reversed, &dh).unwrap();

        prop_assert_eq!(forward, backward);
    }
}
