//! Randomized depth-first maze generation.
//!
//! This module walks the cell lattice with an explicit backtrace stack, carving a connector into
//! the board every time it advances into an unvisited cell. The result is a spanning tree of the
//! cell lattice, which is to say a perfect maze.

use log::{debug, trace};
use rand::Rng;

use crate::grid::{Board, CellIndex, CellLattice};

/// Traversal state after a single step.
///
/// This enumeration drives the generation loop. Each step either moves forward into a new cell,
/// falls back to the previous cell on the backtrace, or finishes the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Traversal {
    /// The walk moved into the given unvisited cell and carved a connector to it.
    Advancing(CellIndex),
    /// The walk ran out of options and returned to the given cell from the backtrace.
    Backtracking(CellIndex),
    /// Every cell has been visited and the backtrace is empty.
    Done,
}

/// Summary of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Generation {
    /// Cell the traversal started from.
    pub start: CellIndex,
    /// Number of connectors carved into the board.
    pub carved: usize,
    /// Number of steps taken, forward and backward.
    pub steps: usize,
}

/// Carves a perfect maze into `board` by walking `cells` from a random start.
///
/// The backtrace stack lives only for the duration of this call. Every cell ends up visited
/// exactly once and exactly `cells.len() - 1` connectors are cleared.
pub(crate) fn carve<R: Rng>(
    cells: &mut CellLattice,
    board: &mut Board,
    rng: &mut R,
) -> Generation {
    let start = CellIndex::new(
        rng.gen_range(0..cells.height()),
        rng.gen_range(0..cells.width()),
    );

    let mut backtrace = Vec::with_capacity(cells.len());
    let mut current = start;
    let mut carved = 0;
    let mut steps = 0;

    loop {
        let state = step(current, &mut backtrace, cells, board, rng);
        trace!("{state:?}");
        steps += 1;

        match state {
            Traversal::Advancing(next) => {
                carved += 1;
                current = next;
            }
            Traversal::Backtracking(previous) => current = previous,
            Traversal::Done => break,
        }
    }

    debug_assert!(
        cells.all_visited(),
        "traversal finished with unvisited cells"
    );
    debug!(
        "carved {carved} passages over {} cells from ({}, {}) in {steps} steps",
        cells.len(),
        start.row,
        start.column
    );

    Generation {
        start,
        carved,
        steps,
    }
}

/// Performs a single traversal step from `current`.
///
/// The current cell is marked visited first. If it has unvisited neighbours, one is picked
/// uniformly at random, `current` is pushed onto the backtrace and the connector between the two
/// is cleared. Otherwise the backtrace is popped, and an empty backtrace ends the walk.
pub(crate) fn step<R: Rng>(
    current: CellIndex,
    backtrace: &mut Vec<CellIndex>,
    cells: &mut CellLattice,
    board: &mut Board,
    rng: &mut R,
) -> Traversal {
    cells.mark_visited(current);

    let neighbours = cells.unvisited_neighbours(current);
    if let Some(next) = pick(&neighbours, rng) {
        backtrace.push(current);
        let (row, column) = current.connector(next);
        let carved = board.clear(row, column);
        debug_assert!(carved, "connector ({row}, {column}) was already open");
        return Traversal::Advancing(next);
    }

    backtrace
        .pop()
        .map_or(Traversal::Done, Traversal::Backtracking)
}

/// Picks one element of `candidates` uniformly at random.
fn pick<R: Rng>(candidates: &[CellIndex], rng: &mut R) -> Option<CellIndex> {
    if candidates.is_empty() {
        return None;
    }

    candidates.get(rng.gen_range(0..candidates.len())).copied()
}
