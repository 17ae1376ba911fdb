//! Core domain types for Big-Tac-Toe.

use serde::{Deserialize, Serialize};

/// Marker placed by a player in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Marker whose turn it is at the given snapshot index.
    ///
    /// X moves first, so even indices belong to X and odd indices to O.
    /// The turn is always derived from a position in the history, never
    /// stored alongside it.
    pub fn for_turn(index: usize) -> Self {
        if index % 2 == 0 { Marker::X } else { Marker::O }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a marker. Markers are never erased once placed.
    Occupied(Marker),
}

impl Cell {
    /// Returns the occupying marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// A rows-by-columns grid of cells.
///
/// Cells are addressed by `(x, y)` with `x` in `[0, columns)` and `y` in
/// `[0, rows)`. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Cells in row-major order: index `y * columns + x`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.columns && y < self.rows).then(|| y * self.columns + x)
    }

    /// Gets the cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Sets the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), &'static str> {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                Ok(())
            }
            None => Err("Cell out of bounds"),
        }
    }

    /// Checks if the cell at `(x, y)` is empty.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts cells occupied by the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(marker))
            .count()
    }

    /// Formats the grid as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for y in 0..self.rows {
            for x in 0..self.columns {
                match self.get(x, y) {
                    Some(Cell::Occupied(marker)) => result.push_str(&marker.to_string()),
                    _ => result.push('.'),
                }
                if x < self.columns - 1 {
                    result.push('|');
                }
            }
            if y < self.rows - 1 {
                result.push('\n');
                result.push_str(&"-+".repeat(self.columns - 1));
                result.push_str("-\n");
            }
        }
        result
    }
}
