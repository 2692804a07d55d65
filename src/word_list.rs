//! `word_list` — load and preprocess the dictionary for wordtrail.
//!
//! This module reads a word list (from a file, or from an in-memory string)
//! and produces a `WordList` struct holding a flat `Vec<String>` of
//! lowercase words, ready to feed into [`crate::trie::Trie::from_words`].
//!
//! The parsing logic:
//! - Each line in the input holds one word.
//! - Lines are trimmed; empty lines are skipped silently.
//! - All words are normalized to lowercase. The grid parser lowercases too,
//!   so the store and the board always agree on the alphabet's normal form.
//! - The final list is deduplicated and sorted by length first, then
//!   alphabetically.

/// Struct representing a processed, ready-to-use word list.
///
/// The `words` vector contains all valid words (trimmed, lowercased,
/// deduplicated), already sorted by (length, alphabetical).
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words.
    /// Example: `["be", "cat", "bear", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines.
    /// 2. Trims each line and skips empty ones.
    /// 3. Converts each word to lowercase.
    /// 4. Deduplicates the list (case-insensitive because we lowercase early).
    /// 5. Sorts by length, then alphabetically.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .collect();

        // Deduplicate with sort + dedup: we need a sorted Vec anyway for the
        // final ordering, and dedup() only removes *adjacent* duplicates.
        words.sort();
        words.dedup();

        // Sort by length, then alphabetically. The alphabetical sort above
        // was required for dedup(), so we sort twice.
        words.sort_by(|a, b| {
            match a.len().cmp(&b.len()) {
                std::cmp::Ordering::Equal => a.cmp(b),
                other => other,
            }
        });

        WordList { words }
    }

    /// Convenience method: read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "cat\ndog\nbird";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let input = "cat\ndog\ncat\ncat";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_sorts_by_length_then_alpha() {
        let input = "dog\napple\ncat\nab\nzebra";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["ab", "cat", "dog", "apple", "zebra"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let input = "CAT\nDog\nBIRD";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "cat\n\n\ndog\n\n";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let input = "  cat  \n  dog  ";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let input = "";
        let word_list = WordList::parse_from_str(input);

        assert!(word_list.words.is_empty());
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let input = "Cat\nCAT\ncat";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat"]);
    }
}
