// Reusable library API — shared by the CLI and the bench binary
pub mod errors;
pub mod grid;
pub mod log;
pub mod solver;
pub mod trie;
pub mod word_list;
