//! Perfect maze generation with optional loosening.
//!
//! A maze is built over a grid of cells by a randomized depth-first walk with backtracking, which
//! carves a spanning tree into a doubled-resolution grid of wall and passage tiles. The finished
//! maze can then be loosened, opening extra walls to add loops and clearing isolated wall
//! fragments.
//!
//! The [`Maze`] handle is the entry point, and the [`cli`] module holds the command-line front end
//! used by the binary.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod cli;
mod generator;
mod grid;
mod loosen;
mod maze;
mod types;

pub use grid::Board;
pub use maze::{Maze, DEFAULT_EXTRA_PATH_PROBABILITY, DEFAULT_REMOVE_ISOLATED};
pub use types::{MazeError, MIN_DIMENSION};
