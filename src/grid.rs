//! Cell and tile lattices.
//!
//! This module contains the two grids a maze is made of: the logical cell lattice the generator
//! walks over, and the doubled-resolution tile lattice of walls and passages that callers read.

/// Position of a cell in the cell lattice.
///
/// This structure is the arena index used in place of references to cells. It is a plain
/// row/column pair, so it stays valid regardless of where the lattice storage lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellIndex {
    /// Zero-based row of the cell.
    pub row: usize,
    /// Zero-based column of the cell.
    pub column: usize,
}

impl CellIndex {
    /// Creates a new cell index from a row and a column.
    pub(crate) const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the position of this cell in the tile lattice.
    pub(crate) const fn tile(self) -> (usize, usize) {
        (2 * self.row + 1, 2 * self.column + 1)
    }

    /// Returns the position of the connector tile between this cell and an adjacent one.
    ///
    /// The tile lies at `tile(self) + (other - self)` on each axis. The caller must pass a cell
    /// that is one step away on exactly one axis.
    pub(crate) const fn connector(self, other: Self) -> (usize, usize) {
        let (row, column) = self.tile();
        (row + other.row - self.row, column + other.column - self.column)
    }
}

/// Logical maze cell.
///
/// Cells do not store their neighbours; adjacency is computed from the coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    /// Zero-based row of the cell.
    pub row: usize,
    /// Zero-based column of the cell.
    pub column: usize,
    /// Whether the traversal has reached this cell. Only ever goes from `false` to `true`.
    pub visited: bool,
}

impl Cell {
    /// Returns the index of this cell in its lattice.
    pub(crate) const fn index(&self) -> CellIndex {
        CellIndex::new(self.row, self.column)
    }
}

/// Row-major arena of cells.
#[derive(Clone, Debug)]
pub(crate) struct CellLattice {
    /// Number of cell rows.
    height: usize,
    /// Number of cell columns.
    width: usize,
    /// Cells stored row after row.
    cells: Vec<Cell>,
}

impl CellLattice {
    /// Creates a lattice of `height` by `width` unvisited cells.
    ///
    /// Every cell is initialized with its own coordinates.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for column in 0..width {
                cells.push(Cell {
                    row,
                    column,
                    visited: false,
                });
            }
        }

        Self {
            height,
            width,
            cells,
        }
    }

    /// Returns the number of cell rows.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cell columns.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Returns the total number of cells.
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at the given index, if it is within bounds.
    pub(crate) fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.offset(index).and_then(|offset| self.cells.get(offset))
    }

    /// Marks the cell at the given index as visited.
    ///
    /// Out-of-bounds indices are ignored.
    pub(crate) fn mark_visited(&mut self, index: CellIndex) {
        if let Some(cell) = self
            .offset(index)
            .and_then(|offset| self.cells.get_mut(offset))
        {
            cell.visited = true;
        }
    }

    /// Returns whether every cell in the lattice has been visited.
    pub(crate) fn all_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }

    /// Collects the in-bounds, unvisited cells adjacent to `index`.
    ///
    /// Neighbours are probed in the order below, above, right, left. Diagonals are never
    /// considered.
    pub(crate) fn unvisited_neighbours(&self, index: CellIndex) -> Vec<CellIndex> {
        let candidates = [
            Some(CellIndex::new(index.row + 1, index.column)),
            index
                .row
                .checked_sub(1)
                .map(|row| CellIndex::new(row, index.column)),
            Some(CellIndex::new(index.row, index.column + 1)),
            index
                .column
                .checked_sub(1)
                .map(|column| CellIndex::new(index.row, column)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(|candidate| self.get(candidate))
            .filter(|cell| !cell.visited)
            .map(Cell::index)
            .collect()
    }

    /// Converts a cell index into an offset into the backing vector.
    const fn offset(&self, index: CellIndex) -> Option<usize> {
        if index.row < self.height && index.column < self.width {
            Some(index.row * self.width + index.column)
        } else {
            None
        }
    }
}

/// Tile lattice of walls and passages.
///
/// This structure is the externally visible artifact of the generator. A tile is `true` when it
/// is a wall and `false` when it is a passage. It has `2 * h + 1` rows and `2 * w + 1` columns for
/// a cell lattice of `h` by `w`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Number of tile rows.
    height: usize,
    /// Number of tile columns.
    width: usize,
    /// Tiles stored row after row.
    tiles: Vec<bool>,
}

impl Board {
    /// Creates a board where only the cell tiles are open.
    ///
    /// A tile is a wall when its row or its column is even, so every corner post and every
    /// connector starts closed and every tile with both coordinates odd starts as a passage.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        let mut tiles = Vec::with_capacity(height * width);
        for row in 0..height {
            for column in 0..width {
                tiles.push(row % 2 == 0 || column % 2 == 0);
            }
        }

        Self {
            height,
            width,
            tiles,
        }
    }

    /// Returns the number of tile rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of tile columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns whether the tile at the given position is a wall.
    ///
    /// Positions outside the board count as walls.
    #[must_use]
    pub fn is_wall(&self, row: usize, column: usize) -> bool {
        self.offset(row, column)
            .and_then(|offset| self.tiles.get(offset))
            .copied()
            .unwrap_or(true)
    }

    /// Turns the tile at the given position into a passage.
    ///
    /// Returns `true` if the tile was a wall before the call. Out-of-bounds positions are ignored.
    pub(crate) fn clear(&mut self, row: usize, column: usize) -> bool {
        let Some(tile) = self
            .offset(row, column)
            .and_then(|offset| self.tiles.get_mut(offset))
        else {
            return false;
        };

        let was_wall = *tile;
        *tile = false;
        was_wall
    }

    /// Copies the board out as a vector of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<bool>> {
        if self.width == 0 {
            return Vec::new();
        }

        self.tiles
            .chunks(self.width)
            .map(<[bool]>::to_vec)
            .collect()
    }

    /// Converts a tile position into an offset into the backing vector.
    const fn offset(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.height && column < self.width {
            Some(row * self.width + column)
        } else {
            None
        }
    }
}
