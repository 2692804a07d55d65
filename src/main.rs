use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordtrail::errors::GridError;
use wordtrail::grid::Grid;
use wordtrail::solver;
use wordtrail::trie::Trie;
use wordtrail::word_list::WordList;

/// Wordtrail board solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The board, rows separated by '/' or ',' (e.g., "bear/oull/ncze/eftb")
    grid: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,
}

/// Entry point of the wordtrail CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDTRAIL_DEBUG").is_ok();
    wordtrail::log::init_logger(debug_enabled);

    log::debug!("Starting wordtrail (build {})", env!("GIT_HASH"));

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a GridError
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordtrail CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk and build the prefix store.
/// 3. Parse and validate the board.
/// 4. Search the board for dictionary words.
/// 5. Print each found word on stdout; counts and timings on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed board,
/// missing word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk and build the trie
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let trie = Trie::from_words(&word_list.words);
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Parse and validate the board
    let grid = Grid::parse(&cli.grid)?;
    log::debug!("Board is {}x{}", grid.rows(), grid.cols());

    // 3. Search the board
    let t_search = Instant::now();
    let result = solver::search(&trie, &grid);
    let search_secs = t_search.elapsed().as_secs_f64();

    // 4. Print each found word on stdout, shortest first
    for word in result.sorted_words() {
        println!("{word}");
    }

    // 5. Print diagnostics (dictionary size, timings, number of results) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; searched {}x{} board in {:.3}s ({} words found).",
        word_list.words.len(),
        load_secs,
        grid.rows(),
        grid.cols(),
        search_secs,
        result.found_count()
    );

    Ok(())
}
