//! Board geometry and queen coverage tests.
//!
//! A configuration is stored sparsely: one coordinate per placed queen,
//! in insertion order. The order carries no meaning; a set would be
//! equally valid. When the docs below say "the board", they mean the
//! theoretical width x height grid this sparse list describes.

use rustc_hash::FxHashSet;

/// A board coordinate `(x, y)`, 0-indexed.
pub type Coord = (i32, i32);

/// A partial or complete placement: one entry per queen on the board.
///
/// Entries are assumed unique and in bounds. The search driver only
/// applies actions produced by [`possible_actions`], which guarantees
/// both, so nothing here checks defensively.
///
/// [`possible_actions`]: crate::SearchProblem::possible_actions
pub type Configuration = Vec<Coord>;

/// Board dimensions, fixed for the lifetime of a problem instance.
///
/// Dimensions are trusted to be positive; nonpositive values produce
/// empty cell enumerations rather than reported errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Iterates every cell in row-major order: all columns of row 0,
    /// then row 1, and so on.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Whether `(x, y)` shares a row, column, or diagonal with any queen.
    ///
    /// Two cells on distinct rows and columns are diagonal iff the line
    /// through them has gradient 1 or -1, i.e. `|dy| == |dx|`. The row
    /// and column branches short-circuit first, so a shared x never
    /// reaches the gradient comparison.
    pub fn is_covered(&self, (x, y): Coord, queens: &[Coord]) -> bool {
        queens
            .iter()
            .any(|&(qx, qy)| x == qx || y == qy || (y - qy).abs() == (x - qx).abs())
    }

    /// Whether every cell on the board is covered by some queen.
    pub fn all_covered(&self, queens: &[Coord]) -> bool {
        self.cells().all(|cell| self.is_covered(cell, queens))
    }

    /// Renders a configuration as a textual grid.
    ///
    /// Occupied cells show as 'Q', empty cells as '.'. Rows are printed
    /// top to bottom, so y = height-1 comes first.
    pub fn render(&self, queens: &[Coord]) -> String {
        let occupied: FxHashSet<Coord> = queens.iter().copied().collect();
        let mut output = String::new();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                output.push(if occupied.contains(&(x, y)) { 'Q' } else { '.' });
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_enumerate_row_major() {
        let board = Board::new(2, 2);
        let cells: Vec<Coord> = board.cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_cell_count_matches_enumeration() {
        let board = Board::new(3, 4);
        assert_eq!(board.cell_count(), 12);
        assert_eq!(board.cells().count(), 12);
    }

    #[test]
    fn test_row_column_and_diagonal_are_covered() {
        let board = Board::new(5, 5);
        let queens = [(2, 2)];
        assert!(board.is_covered((4, 2), &queens), "same row");
        assert!(board.is_covered((2, 0), &queens), "same column");
        assert!(board.is_covered((4, 4), &queens), "rising diagonal");
        assert!(board.is_covered((0, 4), &queens), "falling diagonal");
        assert!(board.is_covered((2, 2), &queens), "own cell");
    }

    #[test]
    fn test_knight_move_cell_is_not_covered() {
        let board = Board::new(3, 3);
        // (2, 1) vs (0, 0): x differs, y differs, |dy|/|dx| = 1/2
        assert!(!board.is_covered((2, 1), &[(0, 0)]));
        assert!(!board.is_covered((1, 2), &[(0, 0)]));
    }

    #[test]
    fn test_shared_x_distinct_y_uses_column_branch() {
        // would divide by zero under a naive gradient test
        let board = Board::new(1, 8);
        assert!(board.is_covered((0, 7), &[(0, 0)]));
    }

    #[test]
    fn test_no_queens_covers_nothing() {
        let board = Board::new(3, 3);
        assert!(!board.is_covered((0, 0), &[]));
        assert!(!board.all_covered(&[]));
    }

    #[test]
    fn test_render_marks_queens() {
        let board = Board::new(3, 3);
        insta::assert_snapshot!(board.render(&[(1, 1)]), @r"
        ...
        .Q.
        ...
        ");
    }

    #[test]
    fn test_render_row_orientation() {
        // queen at (0, 0) lands in the bottom-left corner
        let board = Board::new(2, 2);
        assert_eq!(board.render(&[(0, 0)]), "..\nQ.\n");
    }
}
