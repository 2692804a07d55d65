//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of boards on *your* machine.
//! - Loads the word list once, then searches each board several times and
//!   reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print found words:              `cargo run --bin bench_local --release -- -p 10`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Boards live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per board is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordtrail::grid::Grid;
use wordtrail::solver;
use wordtrail::trie::Trie;
use wordtrail::word_list::WordList;

/// Simple local benchmark runner: load the word list once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many found words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a board in compact row form.
#[derive(Clone)]
struct Case {
    board: &'static str,
}

/// Edit/add new boards here. The summary displays the board text as the "name".
fn get_cases() -> Vec<Case> {
    vec![
        Case { board: "bear/oull/ncze/eftb" },
        Case { board: "sers/patg/line/sers" },
        Case { board: "aaaa/aaaa/aaaa/aaaa" },
        Case { board: "qwert/yuiop/asdfg/hjklz/xcvbn" },
        Case { board: "abcdef/ghijkl/mnopqr/stuvwx" },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b)
        .expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_BOARD_LEN: usize = 32;

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-board timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let wl = WordList::load_from_path(&cli.word_list)?;
    let trie = Trie::from_words(&wl.words);
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {:.3}s", wl.words.len(), load_secs);

    let cases = get_cases();
    // Store (board, median_seconds, words_found) for the summary.
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let board = case.board;
        eprintln!("\n[{:02}] {}", idx + 1, board);

        let grid = match Grid::parse(board) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("  ✗ Bad board: {}", e.display_detailed());
                continue;
            }
        };

        // One *warm-up* execution per board to "touch" code paths / caches.
        // We intentionally ignore its timing.
        let _warmup = solver::search(&trie, &grid);

        // Repeat the timed runs and collect durations.
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_count = 0;
        let mut last_words: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_search = Instant::now();
            let result = solver::search(black_box(&trie), black_box(&grid));
            let search_secs = t_search.elapsed().as_secs_f64();

            // Prevent the compiler from proving the result unused and eliding work.
            let _keep = black_box(result.found_count());

            times.push(search_secs);
            last_count = result.found_count();
            last_words = result.sorted_words();

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} words)",
                rep + 1,
                cli.num_repeats,
                search_secs,
                last_count
            );
        }

        // Prefer median for small N--it's less sensitive to noisy outliers.
        let med = median(times);

        // Optionally print a few found words from the *last* run (outside timing).
        if cli.print_limit > 0 {
            for word in last_words.iter().take(cli.print_limit) {
                println!("{word}");
            }
        }

        eprintln!(
            "  → median {:.4}s over {} run(s); last run found {} {}.",
            med,
            cli.num_repeats,
            last_count,
            pluralizer(last_count, "word".into(), None)
        );

        summary.push((board.to_string(), med, last_count));
    }

    // Compact summary at the end for a quick scan across all boards.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_BOARD_LEN$} | {:>10} | {:>8}",
        "board", "median (s)", "# words"
    );
    eprintln!("{:-<MAX_BOARD_LEN$}-+-{:-<10}-+-{:-<8}", "", "", "");
    for (board, med, num_words) in &summary {
        // Trim very long boards for readability in the summary.
        let display = if board.len() > MAX_BOARD_LEN {
            // "- 1" for the "…"
            format!("{}…", board.chars().take(MAX_BOARD_LEN - 1).collect::<String>())
        } else {
            board.clone()
        };
        eprintln!("{display:<MAX_BOARD_LEN$} | {med:>10.4} | {num_words:>8}");
    }

    Ok(())
}

// TODO? put this elsewhere
fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0]), 3.0);
        assert_eq!(median(vec![3.0, 1.0]), 2.0);
        assert_eq!(median(vec![5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "word".into(), None), "words");
        assert_eq!(pluralizer(1, "word".into(), None), "word");
        assert_eq!(pluralizer(2, "word".into(), None), "words");
    }

    #[test]
    fn test_cases_are_valid_boards() {
        for case in get_cases() {
            assert!(Grid::parse(case.board).is_ok(), "bad bench board: {}", case.board);
        }
    }
}
