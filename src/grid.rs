use std::fmt;

use thiserror::Error;

/// Glyph used for a live cell when a grid is written out as text
pub const ALIVE: char = '*';

/// Glyph used for a dead cell when a grid is written out as text
pub const DEAD: char = '.';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has length {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular snapshot of one generation.
///
/// Cells are stored row-major. There are no mutators: a new generation is always a new `Grid`, so
/// anyone holding on to an old one keeps a consistent picture of it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major cell buffer, `cells[r * width + c]`
    cells: Vec<bool>,

    width: usize,
    height: usize,
}

impl Grid {
    /// A grid of the given dimensions with every cell dead
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Build a grid out of rows. Every row must be as long as the first one.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    actual: cols.len(),
                });
            }

            cells.extend(cols);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid by asking `f` for the state of every `(row, col)`, in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for r in 0..height {
            for c in 0..width {
                cells.push(f(r, c));
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// # Panics
    /// If `(row, col)` lies outside the grid. Use [`Grid::get`] when that is possible.
    pub fn at(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) is out of range for a {}x{} grid",
            self.height,
            self.width
        );

        self.cells[self.index(row, col)]
    }

    /// Like [`Grid::at`], but `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Signed so that neighbor offsets can be checked before they are turned into indices.
    pub fn is_valid_coordinate(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // `chunks` panics on 0, and a 0-wide grid has no cells to split anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

/// Writes the grid in the pattern file format, so the output can be loaded back.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                let glyph = if alive { ALIVE } else { DEAD };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn from_rows_keeps_layout() {
        let grid = Grid::from_rows(vec![vec![F, T, F], vec![T, T, F]]).unwrap();

        assert_eq!(grid.dimensions(), (3, 2));
        assert!(grid.at(0, 1));
        assert!(grid.at(1, 0));
        assert!(!grid.at(1, 2));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![F, T, F], vec![T, T]]).unwrap_err();

        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn bounds() {
        let grid = Grid::empty(4, 2);

        assert!(grid.is_valid_coordinate(0, 0));
        assert!(grid.is_valid_coordinate(1, 3));
        assert!(!grid.is_valid_coordinate(-1, 0));
        assert!(!grid.is_valid_coordinate(0, -1));
        assert!(!grid.is_valid_coordinate(2, 0));
        assert!(!grid.is_valid_coordinate(0, 4));

        assert_eq!(grid.get(1, 3), Some(false));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_panics_out_of_range() {
        Grid::empty(2, 2).at(2, 0);
    }

    #[test]
    fn zero_sized_grids() {
        let grid = Grid::empty(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.to_string(), "");

        let grid = Grid::from_rows(vec![]).unwrap();
        assert_eq!(grid.dimensions(), (0, 0));
    }

    #[test]
    fn display_uses_pattern_glyphs() {
        let grid = Grid::from_rows(vec![vec![T, F, F, T], vec![F, T, F, T]]).unwrap();

        insta::assert_snapshot!(grid.to_string(), @r"
        *..*
        .*.*
        ");
    }
}
