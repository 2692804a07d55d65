//! The path search engine: exhaustive backtracking DFS over the grid,
//! pruned by the prefix store.
//!
//! An independent depth-first exploration starts from every cell, since a
//! word can begin anywhere on the board. At each step the engine appends the
//! cell's letter to the path so far and asks the trie whether any dictionary
//! word still starts with those letters; if not, the whole branch is
//! abandoned. That prefix check is what bounds the 8-way exponential fan-out
//! in practice — without it, every self-avoiding walk of length up to
//! `rows * cols` would be explored.
//!
//! "No repeated cell within one path" is enforced with a single shared
//! visited matrix under strict stack discipline: a cell is marked on entry
//! to its exploration and unmarked before the enclosing call returns, so the
//! matrix is all-false again between sibling branches and between the
//! `rows * cols` top-level start cells.
//!
//! Recursion depth cannot exceed `rows * cols` (no cell repeats within a
//! path), which is comfortably shallow for realistic boards of tens of
//! cells.
//!
//! # Examples
//!
//! ```
//! use wordtrail::grid::Grid;
//! use wordtrail::solver;
//! use wordtrail::trie::Trie;
//!
//! let trie = Trie::from_words(["be", "bear", "bell"]);
//! let grid = Grid::parse("bear/oull/ncze/eftb")?;
//!
//! let result = solver::search(&trie, &grid);
//! assert!(result.words.contains("bear"));
//! assert!(result.words.contains("be"));
//! println!("Found {} words", result.found_count());
//! # Ok::<(), wordtrail::errors::GridError>(())
//! ```

use crate::grid::Grid;
use crate::trie::Trie;
use log::debug;
use std::collections::HashSet;

/// The eight neighbor offsets: four orthogonal, four diagonal.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Outcome of a board search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every dictionary word discoverable on the board, deduplicated.
    /// Iteration order is not significant; the content is deterministic.
    pub words: HashSet<String>,
}

impl SearchResult {
    /// Number of distinct words found, for reporting.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.words.len()
    }

    /// The found words sorted by length then alphabetically, for stable
    /// display.
    #[must_use]
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words
    }
}

impl IntoIterator for SearchResult {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Find every dictionary word discoverable on `grid` by tracing paths of
/// 8-adjacent cells without reusing a cell within one path.
///
/// The trie must be fully built before the call; it is read-only here. The
/// grid is already validated rectangular by construction. There is no
/// failure path: the search either explores a branch or prunes it, and it
/// runs to completion once invoked.
#[must_use]
pub fn search(trie: &Trie, grid: &Grid) -> SearchResult {
    let mut searcher = Searcher {
        trie,
        grid,
        visited: vec![vec![false; grid.cols()]; grid.rows()],
        path: String::new(),
        found: HashSet::new(),
    };

    // A word can start anywhere, so every cell seeds its own DFS tree.
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            searcher.explore(row as isize, col as isize);
        }
    }

    debug!(
        "search complete: {} words found on {}x{} board",
        searcher.found.len(),
        grid.rows(),
        grid.cols()
    );

    SearchResult { words: searcher.found }
}

/// Transient state of one top-level search call. The visited matrix and the
/// path buffer are reused across all start cells; both are restored to their
/// empty state along every return path.
struct Searcher<'a> {
    trie: &'a Trie,
    grid: &'a Grid,
    visited: Vec<Vec<bool>>,
    path: String,
    found: HashSet<String>,
}

impl Searcher<'_> {
    fn explore(&mut self, row: isize, col: isize) {
        // Base case, evaluated before the letter is appended: off the board
        // or already on the current path.
        let Some(letter) = self.grid.get(row, col) else {
            return;
        };
        let (r, c) = (row as usize, col as usize);
        if self.visited[r][c] {
            return;
        }

        self.path.push(letter);

        // Prune: no dictionary word continues with these letters, so no
        // descendant exploration can succeed either.
        if !self.trie.has_prefix(&self.path) {
            self.path.pop();
            return;
        }

        if self.trie.is_word(&self.path) {
            if self.found.insert(self.path.clone()) {
                debug!("found word: {}", self.path);
            }
        }

        self.visited[r][c] = true;
        for (dr, dc) in DIRECTIONS {
            self.explore(row + dr, col + dc);
        }
        self.visited[r][c] = false;

        self.path.pop();
    }
}
