//! `grid` — the rectangular letter board and its boundary validation.
//!
//! The search core assumes a well-formed rectangular grid, so all shape
//! checking happens here, once, at construction time. A malformed board
//! (no rows, a blank row, ragged rows) is rejected with a [`GridError`]
//! before any search can see it; the search algorithm itself never
//! validates.
//!
//! Two construction paths:
//! - [`Grid::from_rows`] — from already-split rows of characters.
//! - [`Grid::parse`] — from a compact text form (`bear/oull/ncze/eftb`),
//!   the format the CLI accepts. Rows may be separated by `/`, `,`, or
//!   newlines; letters are lowercased to match the word-list normalization.
//!
//! The grid is immutable after construction.

use crate::errors::GridError;

/// A rectangular board of single characters.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of characters, validating rectangularity.
    ///
    /// # Errors
    ///
    /// Returns `GridError::EmptyGrid` if `rows` is empty,
    /// `GridError::EmptyRow` if the first row has no cells, and
    /// `GridError::RaggedRow` if any later row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { rows: rows.len(), cols, cells: rows })
    }

    /// Parse a grid from its compact text form.
    ///
    /// Rows are separated by `/`, `,`, or newlines; surrounding whitespace is
    /// trimmed and blank rows between separators are skipped. Letters are
    /// lowercased so the board agrees with the word-list normal form.
    ///
    /// # Errors
    ///
    /// Same validation as [`Grid::from_rows`].
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = input
            .split(['/', ',', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().flat_map(char::to_lowercase).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Convenience method: read a board from a file, one row per line.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the file cannot be read, or the
    /// (io-converted) `GridError` if its contents do not form a rectangle.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse(&data)?)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count; also the upper bound on search recursion depth,
    /// since no path revisits a cell.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Bounds-checked cell access. Signed coordinates let the search engine
    /// step off the board freely and treat `None` as its base case.
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row][col])
    }
}
