use crate::cell::Cell;

/// Fraction of cells brought to life by [`Grid::randomize`].
const INITIAL_FILL: f32 = 0.3;

/// Failures of the grid contract. Construction rejects empty extents; the
/// indexed accessors reject coordinates outside the grid. Out-of-bounds
/// coordinates always come from the caller — the engine filters its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    InvalidDimensions { rows: usize, columns: usize },
    IndexOutOfBounds { row: usize, column: usize, rows: usize, columns: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, columns } => {
                write!(f, "grid dimensions must be positive, got {}x{}", rows, columns)
            }
            GridError::IndexOutOfBounds { row, column, rows, columns } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", row, column, rows, columns)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// One generation of cells on a fixed `rows` x `columns` extent, stored
/// row-major. The shape never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let size = rows
            .checked_mul(columns)
            .ok_or(GridError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::default(); size],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Result<Cell, GridError> {
        let idx = self
            .index(row, column)
            .ok_or_else(|| self.out_of_bounds(row, column))?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, column: usize, alive: bool) -> Result<(), GridError> {
        let idx = self
            .index(row, column)
            .ok_or_else(|| self.out_of_bounds(row, column))?;
        self.cells[idx].set_alive(alive);
        Ok(())
    }

    /// Flips the addressed cell and reports the state it ended up in.
    pub fn toggle(&mut self, row: usize, column: usize) -> Result<bool, GridError> {
        let idx = self
            .index(row, column)
            .ok_or_else(|| self.out_of_bounds(row, column))?;
        self.cells[idx].toggle();
        Ok(self.cells[idx].is_alive())
    }

    /// Independent copy of the current generation. Mutating the grid
    /// afterwards never changes what the snapshot reads back.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.clone(),
        }
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::default();
        }
    }

    pub fn randomize(&mut self, rng: &mut randomize::PCG32) {
        for cell in self.cells.iter_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < INITIAL_FILL;
            *cell = Cell::new(alive);
        }
    }

    /// Row-major view of the live generation, for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> GridError {
        GridError::IndexOutOfBounds {
            row,
            column,
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/// Read-only copy of one generation, the sole read source while the next one
/// is computed.
#[derive(Clone, Debug)]
pub struct Snapshot {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Snapshot {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Callers keep coordinates in bounds; the engine filters neighbor
    /// offsets before reading.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }
}
