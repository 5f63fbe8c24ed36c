//! Shared fixtures for unit tests.

use crate::deadhead::DeadheadMatrix;
use crate::models::Trip;

/// The eight-trip, four-terminal morning schedule.
pub(crate) fn reference_trips() -> Vec<Trip> {
    vec![
        Trip::new(1, "a", 420, "b", 445),
        Trip::new(2, "d", 420, "a", 455),
        Trip::new(3, "b", 435, "c", 495),
        Trip::new(4, "c", 450, "d", 515),
        Trip::new(5, "a", 455, "d", 480),
        Trip::new(6, "d", 480, "a", 510),
        Trip::new(7, "a", 515, "d", 545),
        Trip::new(8, "c", 545, "d", 600),
    ]
}

/// Complete deadhead matrix over terminals `a`..`d`.
pub(crate) fn reference_deadheads() -> DeadheadMatrix {
    let rows: [(&str, [u32; 4]); 4] = [
        ("a", [0, 15, 30, 25]),
        ("b", [20, 0, 40, 30]),
        ("c", [25, 35, 0, 45]),
        ("d", [20, 25, 35, 0]),
    ];
    let cols = ["a", "b", "c", "d"];
    let mut dh = DeadheadMatrix::new();
    for (from, row) in rows {
        for (&to, minutes) in cols.iter().zip(row) {
            dh.insert(from, to, minutes);
        }
    }
    dh
}

/// Placeholder trips with IDs `0..n`, for graphs given by explicit edges.
pub(crate) fn numbered_trips(n: usize) -> Vec<Trip> {
    (0..n as u64).map(|id| Trip::new(id, "x", 0, "x", 0)).collect()
}
