use crate::grid::{Grid, Snapshot};

/// Advance the grid by exactly one generation.
///
/// Next states are computed from an independent snapshot of the previous
/// generation, so a step never reads a neighbor that was already rewritten
/// during the same step.
pub fn step(grid: &mut Grid) {
    let snapshot = grid.snapshot();
    let columns = grid.columns();
    for (idx, cell) in grid.cells_mut().iter_mut().enumerate() {
        let row = idx / columns;
        let column = idx % columns;
        let live_neighbors = count_live_neighbors(&snapshot, row, column);
        *cell = snapshot.get(row, column).next_state(live_neighbors);
    }
}

/// Number of live cells at Chebyshev distance 1 from `(row, column)`.
/// Offsets leaving the grid are skipped before any read, so border cells see
/// fewer neighbors: at most 3 in a corner, at most 5 along an edge.
pub fn count_live_neighbors(snapshot: &Snapshot, row: usize, column: usize) -> u8 {
    let rows = snapshot.rows() as isize;
    let columns = snapshot.columns() as isize;
    let mut count = 0;
    for dr in -1..=1_isize {
        for dc in -1..=1_isize {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row as isize + dr;
            let c = column as isize + dc;
            if !(0..rows).contains(&r) || !(0..columns).contains(&c) {
                continue;
            }
            if snapshot.get(r as usize, c as usize).is_alive() {
                count += 1;
            }
        }
    }
    count
}
