//! Win detection over an arbitrary grid and run length.

use crate::types::{Cell, Grid, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Directions a winning line may run in, anchored at its first cell:
/// right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A completed line: the winning marker and the exact cells forming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    marker: Marker,
    /// Cells in walk order from the anchor; length equals the win
    /// condition.
    cells: Vec<(usize, usize)>,
}

impl WinLine {
    /// The marker that completed the line.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The cells forming the line, in walk order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Checks whether the line passes through `(x, y)`.
    ///
    /// Drives win-cell highlighting in a presentation layer.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.iter().any(|&(cx, cy)| cx == x && cy == y)
    }
}

/// Searches the grid for a completed line of `win_condition` cells.
///
/// Cells are scanned column by column; each non-empty cell anchors a
/// candidate line in the four directions that still fit `win_condition`
/// cells inside the grid, so every line is tested exactly once from its
/// first cell and no walk leaves the grid. The first match in scan order
/// is returned, even when several lines were completed simultaneously.
///
/// `win_condition` must be at least 1; [`crate::GameConfig`] enforces
/// this at game creation.
#[instrument(skip(grid))]
pub fn find_win(grid: &Grid, win_condition: usize) -> Option<WinLine> {
    debug_assert!(win_condition >= 1, "win condition must be positive");

    for x in 0..grid.columns() {
        for y in 0..grid.rows() {
            let marker = match grid.get(x, y) {
                Some(Cell::Occupied(marker)) => marker,
                _ => continue,
            };

            for (dx, dy) in DIRECTIONS {
                if !fits(grid, x, y, dx, dy, win_condition) {
                    continue;
                }
                if let Some(cells) = walk(grid, marker, x, y, dx, dy, win_condition) {
                    return Some(WinLine { marker, cells });
                }
            }
        }
    }

    None
}

/// Checks that `len` cells starting at `(x, y)` stay inside the grid.
fn fits(grid: &Grid, x: usize, y: usize, dx: isize, dy: isize, len: usize) -> bool {
    let fits_x = match dx {
        1 => grid.columns() - x >= len,
        _ => true,
    };
    let fits_y = match dy {
        1 => grid.rows() - y >= len,
        -1 => y >= len - 1,
        _ => true,
    };
    fits_x && fits_y
}

/// Walks `len` cells from `(x, y)` and collects them if all bear `marker`.
fn walk(
    grid: &Grid,
    marker: Marker,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    len: usize,
) -> Option<Vec<(usize, usize)>> {
    let mut cells = Vec::with_capacity(len);
    for step in 0..len {
        let cx = (x as isize + dx * step as isize) as usize;
        let cy = (y as isize + dy * step as isize) as usize;
        if grid.get(cx, cy) != Some(Cell::Occupied(marker)) {
            return None;
        }
        cells.push((cx, cy));
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(grid: &mut Grid, x: usize, y: usize, marker: Marker) {
        grid.set(x, y, Cell::Occupied(marker)).unwrap();
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new(3, 3);
        assert_eq!(find_win(&grid, 3), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            place(&mut grid, x, 0, Marker::X);
        }

        let line = find_win(&grid, 3).expect("winning row");
        assert_eq!(line.marker(), Marker::X);
        assert_eq!(line.cells(), &[(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_winner_column() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            place(&mut grid, 1, y, Marker::O);
        }

        let line = find_win(&grid, 3).expect("winning column");
        assert_eq!(line.marker(), Marker::O);
        assert_eq!(line.cells(), &[(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut grid = Grid::new(3, 3);
        for i in 0..3 {
            place(&mut grid, i, i, Marker::X);
        }

        let line = find_win(&grid, 3).expect("winning diagonal");
        assert_eq!(line.cells(), &[(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 0, 2, Marker::X);
        place(&mut grid, 1, 1, Marker::X);
        place(&mut grid, 2, 0, Marker::X);

        // The anchor is the line's first cell in scan order, so the walk
        // runs up-right from the bottom-left end.
        let line = find_win(&grid, 3).expect("winning anti-diagonal");
        assert_eq!(line.cells(), &[(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 0, 0, Marker::X);
        place(&mut grid, 1, 0, Marker::X);
        assert_eq!(find_win(&grid, 3), None);
    }

    #[test]
    fn test_run_shorter_than_condition_is_not_a_win() {
        let mut grid = Grid::new(5, 5);
        for x in 0..3 {
            place(&mut grid, x, 2, Marker::O);
        }
        assert_eq!(find_win(&grid, 4), None);
    }

    #[test]
    fn test_boundary_line_with_condition_equal_to_columns() {
        let mut grid = Grid::new(3, 5);
        for x in 0..5 {
            place(&mut grid, x, 2, Marker::X);
        }

        let line = find_win(&grid, 5).expect("full-width bottom row");
        assert_eq!(line.cells().len(), 5);
        assert_eq!(line.cells()[0], (0, 2));
        assert_eq!(line.cells()[4], (4, 2));
    }

    #[test]
    fn test_boundary_line_with_condition_equal_to_rows() {
        let mut grid = Grid::new(4, 3);
        for y in 0..4 {
            place(&mut grid, 2, y, Marker::O);
        }

        let line = find_win(&grid, 4).expect("full-height last column");
        assert_eq!(line.cells(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_win_condition_one_matches_single_cell() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 1, 2, Marker::O);

        let line = find_win(&grid, 1).expect("single marker wins");
        assert_eq!(line.marker(), Marker::O);
        assert_eq!(line.cells(), &[(1, 2)]);
    }

    #[test]
    fn test_simultaneous_lines_resolve_to_first_in_scan_order() {
        // X holds both the top row and the left column; the shared anchor
        // (0, 0) tests the horizontal direction first.
        let mut grid = Grid::new(3, 3);
        for i in 0..3 {
            place(&mut grid, i, 0, Marker::X);
            place(&mut grid, 0, i, Marker::X);
        }

        let line = find_win(&grid, 3).expect("two winning lines");
        assert_eq!(line.cells(), &[(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_mixed_markers_break_the_run() {
        let mut grid = Grid::new(3, 3);
        place(&mut grid, 0, 0, Marker::X);
        place(&mut grid, 1, 0, Marker::O);
        place(&mut grid, 2, 0, Marker::X);
        assert_eq!(find_win(&grid, 3), None);
    }

    #[test]
    fn test_win_line_contains_reports_membership() {
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            place(&mut grid, x, 1, Marker::X);
        }

        let line = find_win(&grid, 3).expect("winning middle row");
        assert!(line.contains(1, 1));
        assert!(!line.contains(1, 0));
    }
}
