//! Post-processing that adds cycles to a finished maze.
//!
//! A perfect maze has exactly one route between any two cells. Loosening opens some walls that
//! separate two passages running along the same line, which adds loops, and can then remove
//! single-tile wall fragments that ended up with passages on all four sides.

use log::debug;
use rand::Rng;

use crate::grid::Board;

/// Counts of walls removed by one loosening run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Loosening {
    /// Walls opened by the probabilistic pass.
    pub extra_paths: usize,
    /// Isolated walls removed by the cleanup pass.
    pub isolated: usize,
}

/// Opens extra paths in `board` and optionally removes isolated walls.
///
/// Every interior tile is scanned in row-major order; the outer border ring is never touched. A
/// wall with passages on both sides along one axis and walls on both sides along the other axis
/// is opened with a `probability` percent chance. Each axis gets its own independent roll. Values
/// of `probability` at or below zero never open anything and values at or above one hundred
/// always do.
///
/// When `remove_isolated` is set, a second full pass runs after the first one has finished and
/// clears every wall whose four neighbours are all passages.
pub(crate) fn add_extra_paths<R: Rng>(
    board: &mut Board,
    probability: i32,
    remove_isolated: bool,
    rng: &mut R,
) -> Loosening {
    let mut loosening = Loosening {
        extra_paths: open_extra_paths(board, probability, rng),
        ..Loosening::default()
    };

    if remove_isolated {
        loosening.isolated = remove_isolated_walls(board);
    }

    debug!(
        "opened {} extra paths and removed {} isolated walls",
        loosening.extra_paths, loosening.isolated
    );

    loosening
}

/// Runs the probabilistic pass and returns the number of walls it opened.
fn open_extra_paths<R: Rng>(board: &mut Board, probability: i32, rng: &mut R) -> usize {
    let mut opened = 0;

    for row in 1..board.height().saturating_sub(1) {
        for column in 1..board.width().saturating_sub(1) {
            if !board.is_wall(row, column) {
                continue;
            }

            let vertical_path = vertical_passage(board, row, column);
            let horizontal_path = horizontal_passage(board, row, column);
            let vertical_walls = vertical_wall(board, row, column);
            let horizontal_walls = horizontal_wall(board, row, column);

            let mut open = vertical_path && horizontal_walls && roll(rng, probability);
            open |= horizontal_path && vertical_walls && roll(rng, probability);

            if open && board.clear(row, column) {
                opened += 1;
            }
        }
    }

    opened
}

/// Runs the cleanup pass and returns the number of isolated walls it removed.
fn remove_isolated_walls(board: &mut Board) -> usize {
    let mut removed = 0;

    for row in 1..board.height().saturating_sub(1) {
        for column in 1..board.width().saturating_sub(1) {
            if is_isolated(board, row, column) && board.clear(row, column) {
                removed += 1;
            }
        }
    }

    removed
}

/// Returns whether the wall at the given position has passages on all four sides.
pub(crate) fn is_isolated(board: &Board, row: usize, column: usize) -> bool {
    board.is_wall(row, column)
        && vertical_passage(board, row, column)
        && horizontal_passage(board, row, column)
}

/// Rolls a percent chance.
fn roll<R: Rng>(rng: &mut R, probability: i32) -> bool {
    rng.gen_range(0..100) < probability
}

/// Tiles above and below are both passages.
fn vertical_passage(board: &Board, row: usize, column: usize) -> bool {
    !board.is_wall(row - 1, column) && !board.is_wall(row + 1, column)
}

/// Tiles left and right are both passages.
fn horizontal_passage(board: &Board, row: usize, column: usize) -> bool {
    !board.is_wall(row, column - 1) && !board.is_wall(row, column + 1)
}

/// Tiles above and below are both walls.
fn vertical_wall(board: &Board, row: usize, column: usize) -> bool {
    board.is_wall(row - 1, column) && board.is_wall(row + 1, column)
}

/// Tiles left and right are both walls.
fn horizontal_wall(board: &Board, row: usize, column: usize) -> bool {
    board.is_wall(row, column - 1) && board.is_wall(row, column + 1)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::{generator, grid::CellLattice};

    fn maze(cell_height: usize, cell_width: usize, seed: u64) -> Board {
        let mut cells = CellLattice::new(cell_height, cell_width);
        let mut board = Board::new(2 * cell_height + 1, 2 * cell_width + 1);
        let mut rng = StdRng::seed_from_u64(seed);
        let _ = generator::carve(&mut cells, &mut board, &mut rng);
        board
    }

    fn walls(board: &Board) -> Vec<(usize, usize)> {
        let mut walls = Vec::new();
        for row in 0..board.height() {
            for column in 0..board.width() {
                if board.is_wall(row, column) {
                    walls.push((row, column));
                }
            }
        }
        walls
    }

    fn count_isolated(board: &Board) -> usize {
        let mut count = 0;
        for row in 1..board.height() - 1 {
            for column in 1..board.width() - 1 {
                if is_isolated(board, row, column) {
                    count += 1;
                }
            }
        }
        count
    }

    fn border_is_closed(board: &Board) -> bool {
        let last_row = board.height() - 1;
        let last_column = board.width() - 1;
        (0..board.width()).all(|column| {
            board.is_wall(0, column) && board.is_wall(last_row, column)
        }) && (0..board.height()).all(|row| {
            board.is_wall(row, 0) && board.is_wall(row, last_column)
        })
    }

    #[test]
    fn test_zero_probability_changes_nothing() {
        let mut board = maze(7, 10, 1);
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(2);

        let loosening = add_extra_paths(&mut board, 0, true, &mut rng);

        assert_eq!(loosening, Loosening::default());
        assert_eq!(board, before);
    }

    #[test]
    fn test_negative_probability_behaves_like_zero() {
        let mut board = maze(7, 10, 3);
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(4);

        let loosening = add_extra_paths(&mut board, -50, false, &mut rng);

        assert_eq!(loosening.extra_paths, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_probability_leaves_no_isolated_walls() {
        let mut board = maze(7, 10, 5);
        let mut rng = StdRng::seed_from_u64(6);

        let loosening = add_extra_paths(&mut board, 100, true, &mut rng);

        assert!(loosening.extra_paths > 0);
        assert_eq!(count_isolated(&board), 0);
        assert!(border_is_closed(&board));
    }

    #[test]
    fn test_probability_above_hundred_behaves_like_hundred() {
        let mut first = maze(7, 10, 9);
        let mut second = first.clone();

        let _ = add_extra_paths(&mut first, 100, false, &mut StdRng::seed_from_u64(1));
        let _ = add_extra_paths(&mut second, 250, false, &mut StdRng::seed_from_u64(2));

        assert_eq!(first, second);
    }

    #[test]
    fn test_loosening_only_removes_walls() {
        for seed in 0..10 {
            let mut board = maze(7, 10, seed);
            let before = walls(&board);
            let mut rng = StdRng::seed_from_u64(seed + 100);

            let _ = add_extra_paths(&mut board, 40, true, &mut rng);

            let after = walls(&board);
            assert!(after.iter().all(|wall| before.contains(wall)));
            assert!(border_is_closed(&board));
        }
    }

    #[test]
    fn test_second_run_with_zero_probability_is_noop() {
        let mut board = maze(7, 10, 11);
        let mut rng = StdRng::seed_from_u64(12);
        let _ = add_extra_paths(&mut board, 60, true, &mut rng);
        let loosened = board.clone();

        let loosening = add_extra_paths(&mut board, 0, true, &mut rng);

        assert_eq!(loosening, Loosening::default());
        assert_eq!(board, loosened);
    }

    #[test]
    fn test_opens_wall_between_corridors() {
        // A 1x3 cell corridor with the middle connector closed: the wall at (1, 4) has passages
        // left and right and walls above and below.
        let mut board = Board::new(3, 7);
        let _ = board.clear(1, 2);
        let mut rng = StdRng::seed_from_u64(0);

        let loosening = add_extra_paths(&mut board, 100, false, &mut rng);

        assert_eq!(loosening.extra_paths, 1);
        assert!(!board.is_wall(1, 4));
        assert!(border_is_closed(&board));
    }

    #[test]
    fn test_opens_wall_between_vertical_corridors() {
        // A 3x1 cell column with the top connector open: the wall at (4, 1) has passages above
        // and below and border walls left and right.
        let mut board = Board::new(7, 3);
        let _ = board.clear(2, 1);
        let mut rng = StdRng::seed_from_u64(0);

        let loosening = add_extra_paths(&mut board, 100, false, &mut rng);

        assert_eq!(loosening.extra_paths, 1);
        assert!(!board.is_wall(4, 1));
        assert!(border_is_closed(&board));
    }

    #[test]
    fn test_keeps_wall_without_walls_across() {
        // With the centre post of a 2x2 cell board open, each connector around it has passages
        // along one axis but a passage on one side of the other axis, so none is a candidate.
        let mut board = Board::new(5, 5);
        let _ = board.clear(2, 2);
        let mut rng = StdRng::seed_from_u64(0);

        let loosening = add_extra_paths(&mut board, 100, false, &mut rng);

        assert_eq!(loosening.extra_paths, 0);
        for (row, column) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            assert!(board.is_wall(row, column), "connector ({row}, {column})");
        }
    }

    #[test]
    fn test_removes_isolated_wall() {
        // Open the four connectors around the centre post of a 2x2 cell maze.
        let mut board = Board::new(5, 5);
        for (row, column) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            let _ = board.clear(row, column);
        }
        assert!(is_isolated(&board, 2, 2));
        let mut rng = StdRng::seed_from_u64(0);

        let loosening = add_extra_paths(&mut board, 0, true, &mut rng);

        assert_eq!(loosening.isolated, 1);
        assert!(!board.is_wall(2, 2));
    }

    #[test]
    fn test_keeps_isolated_wall_when_not_requested() {
        let mut board = Board::new(5, 5);
        for (row, column) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            let _ = board.clear(row, column);
        }
        let mut rng = StdRng::seed_from_u64(0);

        let loosening = add_extra_paths(&mut board, 0, false, &mut rng);

        assert_eq!(loosening.isolated, 0);
        assert!(board.is_wall(2, 2));
    }
}
