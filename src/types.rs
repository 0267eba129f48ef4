//! Shared types for maze construction.

use thiserror::Error;

/// Smallest accepted tile-lattice dimension.
///
/// Five tiles is the smallest odd size that leaves room for one interior cell between the border
/// walls.
pub const MIN_DIMENSION: usize = 5;

/// Errors raised when building a maze.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Requested board dimensions are unusable.
    ///
    /// Both dimensions must be odd and at least [`MIN_DIMENSION`], and the board they describe
    /// must fit in memory. No partial maze is built when this is returned.
    #[error(
        "invalid maze dimensions {height}x{width}: both must be odd and at least {min}",
        min = MIN_DIMENSION
    )]
    InvalidDimensions {
        /// Requested number of tile rows.
        height: usize,
        /// Requested number of tile columns.
        width: usize,
    },
}

/// Checks that a pair of tile-lattice dimensions can hold a maze.
///
/// # Errors
///
/// Returns [`MazeError::InvalidDimensions`] if either dimension is even or below
/// [`MIN_DIMENSION`], or if the tile count overflows `usize`.
pub(crate) const fn validate_dimensions(height: usize, width: usize) -> Result<(), MazeError> {
    if is_valid_dimension(height)
        && is_valid_dimension(width)
        && height.checked_mul(width).is_some()
    {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { height, width })
    }
}

/// Returns whether a single dimension is odd and large enough.
const fn is_valid_dimension(value: usize) -> bool {
    value >= MIN_DIMENSION && value % 2 == 1
}
