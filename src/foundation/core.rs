use crate::foundation::error::{SnakeError, SnakeResult};

/// Address of one grid cell.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Cell {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Cell {
    /// Cell at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Diagonal rank used by the diagonal traversal policy.
    pub fn diagonal(self) -> usize {
        self.row + self.col
    }
}

/// Grid dimensions, fixed for the lifetime of one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl GridSize {
    /// Validated size; both dimensions must be non-zero.
    pub fn new(cols: usize, rows: usize) -> SnakeResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(SnakeError::validation(format!(
                "grid must have at least one cell, got {cols}x{rows}"
            )));
        }
        Ok(Self { cols, rows })
    }

    /// Number of cells.
    pub fn len(self) -> usize {
        self.cols * self.rows
    }

    /// `true` when the grid has no cells.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Signed bounds check used while stamping glyphs that may hang off the grid.
    pub fn cell_at(self, row: i64, col: i64) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let cell = Cell::new(row, col);
        self.contains(cell).then_some(cell)
    }

    /// All cells in row-major scan order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    pub(crate) fn index(self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

/// One value per cell, stored in scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid<T> {
    size: GridSize,
    values: Vec<T>,
}

impl<T: Clone> CellGrid<T> {
    /// Grid with every cell set to `value`.
    pub fn filled(size: GridSize, value: T) -> Self {
        Self {
            size,
            values: vec![value; size.len()],
        }
    }
}

impl<T> CellGrid<T> {
    /// Grid with each cell computed by `f`.
    pub fn from_fn(size: GridSize, mut f: impl FnMut(Cell) -> T) -> Self {
        Self {
            size,
            values: size.cells().map(&mut f).collect(),
        }
    }

    /// Grid dimensions.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Panics when `cell` is outside the grid; callers iterate `size().cells()`.
    pub fn get(&self, cell: Cell) -> &T {
        &self.values[self.size.index(cell)]
    }

    /// Overwrite the value at `cell`. Panics when `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, value: T) {
        let idx = self.size.index(cell);
        self.values[idx] = value;
    }

    /// `(cell, value)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.size.cells().zip(self.values.iter())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
