//! Public maze handle.
//!
//! This module ties the grid model, the generator and the loosener together behind the three
//! operations callers need: build a maze, loosen it, and read the resulting tiles.

use log::info;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    generator,
    grid::{Board, CellLattice},
    loosen,
    types::{validate_dimensions, MazeError},
};

/// Default percent chance used when opening extra paths.
pub const DEFAULT_EXTRA_PATH_PROBABILITY: i32 = 20;

/// Whether isolated walls are removed by default after opening extra paths.
pub const DEFAULT_REMOVE_ISOLATED: bool = true;

/// Generated maze.
///
/// This structure owns the tile lattice and the random number generator used to build it. It is
/// always fully generated: construction runs the whole traversal before returning, and the
/// generator is kept around so later loosening draws from the same stream.
///
/// # Examples
///
/// ```
/// use mazecarve::Maze;
///
/// let mut maze = Maze::with_seed(15, 21, 7)?;
/// maze.loosen(20, true);
///
/// let tiles = maze.tiles();
/// assert_eq!(tiles.len(), 15);
/// assert!(tiles.iter().all(|row| row.len() == 21));
/// # Ok::<(), mazecarve::MazeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    /// Tile lattice of walls and passages.
    ///
    /// This field holds the board carved by the generator. It is only ever changed by
    /// [`loosen`](Maze::loosen), which can open walls but never closes them, and callers read it
    /// through copies returned by [`tiles`](Maze::tiles).
    board: Board,
    /// Random source for generation and loosening.
    ///
    /// This field holds the generator that picked the start cell and every traversal direction.
    /// It is kept after construction so that loosening continues the same stream, which makes a
    /// seeded maze reproducible from construction through every later loosening call.
    rng: StdRng,
}

impl Maze {
    /// Builds a maze seeded from operating system entropy.
    ///
    /// The dimensions are those of the tile lattice, not cell counts, and both must be odd and at
    /// least five. The cell lattice is `(height - 1) / 2` by `(width - 1) / 2`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is even or below five.
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        Self::with_rng(height, width, StdRng::from_entropy())
    }

    /// Builds a reproducible maze from a fixed seed.
    ///
    /// Two mazes built with the same dimensions and seed, and loosened with the same arguments,
    /// have identical tiles.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is even or below five.
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Result<Self, MazeError> {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }

    /// Validates the dimensions, allocates both lattices and runs generation to completion.
    fn with_rng(height: usize, width: usize, mut rng: StdRng) -> Result<Self, MazeError> {
        validate_dimensions(height, width)?;

        let mut cells = CellLattice::new((height - 1) / 2, (width - 1) / 2);
        let mut board = Board::new(height, width);
        let generation = generator::carve(&mut cells, &mut board, &mut rng);
        info!(
            "generated {height}x{width} maze with {} passages from cell ({}, {}) in {} steps",
            generation.carved, generation.start.row, generation.start.column, generation.steps
        );

        Ok(Self { board, rng })
    }

    /// Opens extra paths to add loops to the maze.
    ///
    /// This function mutates the tiles in place. `probability` is a percent chance applied to each
    /// candidate wall, where candidates are walls with passages on both sides along one axis and
    /// walls along the other. Values at or below zero open nothing and values at or above one
    /// hundred open every candidate. When `remove_isolated` is set, every wall left with passages
    /// on all four sides is then removed. The outer border is never opened, and no wall is ever
    /// added.
    pub fn loosen(&mut self, probability: i32, remove_isolated: bool) {
        let _ = loosen::add_extra_paths(
            &mut self.board,
            probability,
            remove_isolated,
            &mut self.rng,
        );
    }

    /// Returns a copy of the tiles as rows, `true` for walls.
    ///
    /// The result has exactly the dimensions passed at construction, with the origin at the top
    /// left.
    #[must_use]
    pub fn tiles(&self) -> Vec<Vec<bool>> {
        self.board.rows()
    }

    /// Returns the tile lattice.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of tile rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.board.height()
    }

    /// Returns the number of tile columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.board.width()
    }

    /// Returns whether the tile at the given position is a wall.
    ///
    /// Positions outside the maze count as walls.
    #[must_use]
    pub fn is_wall(&self, row: usize, column: usize) -> bool {
        self.board.is_wall(row, column)
    }
}
