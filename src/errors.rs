//! Error types for board construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G003) for documentation lookup:
//!
//! - G001: `EmptyGrid` (Grid has no rows)
//! - G002: `EmptyRow` (Grid row has no cells)
//! - G003: `RaggedRow` (Grid row length differs from the first row)
//!
//! These errors are surfaced exactly once, at grid construction time. The
//! search core itself has no error taxonomy: trie queries answer with
//! booleans, and the path search either explores a branch or prunes it.
//!
//! # Examples
//!
//! ```
//! use wordtrail::errors::GridError;
//!
//! let err = GridError::RaggedRow { row: 2, expected: 4, actual: 3 };
//! println!("Error: {}", err);
//! println!("Code: {}", err.code());
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::io;

/// Custom error type for grid construction
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::EmptyRow { .. } => "G002",
            GridError::RaggedRow { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "Grid has no rows",
            GridError::EmptyRow { .. } => "Grid row has no cells",
            GridError::RaggedRow { .. } => "Grid row length differs from the first row",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Provide at least one row of letters, e.g. 'bear/oull/ncze/eftb'"),
            GridError::EmptyRow { .. } => Some("Every row must contain at least one letter; remove blank rows"),
            GridError::RaggedRow { .. } => Some("All rows must have the same number of letters (the board is rectangular)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = GridError::EmptyGrid;
        assert_eq!(err.code(), "G001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("G001"));
        assert!(detailed.contains("row of letters"));
    }

    #[test]
    fn test_ragged_row_includes_values() {
        let err = GridError::RaggedRow { row: 2, expected: 4, actual: 3 };
        assert_eq!(err.code(), "G003");
        let detailed = err.display_detailed();
        assert!(detailed.contains('2') && detailed.contains('4') && detailed.contains('3'),
            "Error should include the actual row/length values");
    }

    /// Test that all `GridError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<GridError> = vec![
            GridError::EmptyGrid,
            GridError::EmptyRow { row: 1 },
            GridError::RaggedRow { row: 2, expected: 4, actual: 3 },
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.starts_with("G0"),
                "Error code '{}' should start with 'G0'",
                code
            );
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (G0XX)", code);
            assert!(
                codes.insert(code),
                "Duplicate error code found: {}",
                code
            );
        }

        assert_eq!(codes.len(), 3);
    }

    /// Test that help text provides information beyond the error message
    #[test]
    fn test_help_is_not_the_error_message() {
        let errors: Vec<GridError> = vec![
            GridError::EmptyGrid,
            GridError::EmptyRow { row: 0 },
            GridError::RaggedRow { row: 1, expected: 2, actual: 5 },
        ];

        for err in errors {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string(),
                    "Help text should provide additional information beyond error message");
            }
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let err = GridError::EmptyGrid;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("no rows"));
    }
}
