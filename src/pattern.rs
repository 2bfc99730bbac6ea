use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::grid::Grid;

/// Lines starting with this are comments
const COMMENT: char = '!';

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line} has length {actual}, expected {expected}")]
    Format {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("pattern has no content lines")]
    Empty,
}

/// Read a plaintext pattern file from disk. See [`parse_pattern`] for the format.
pub fn read_pattern(path: impl AsRef<Path>) -> Result<Grid, PatternError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = parse_pattern(&text)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "loaded pattern"
    );

    Ok(grid)
}

/// Parse a plaintext pattern.
///
/// * One row per line. `*` and `1` are live cells, anything else is dead.
/// * Empty lines and lines starting with `!` are skipped and do not count as rows.
/// * The first row fixes the width. Every other row must match it exactly.
///
/// Line numbers in [`PatternError::Format`] are 1-based and count every line of the input,
/// including the skipped ones.
pub fn parse_pattern(text: &str) -> Result<Grid, PatternError> {
    let mut width = None;
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }

        let len = line.chars().count();
        let expected = *width.get_or_insert(len);

        if len != expected {
            return Err(PatternError::Format {
                line: i + 1,
                expected,
                actual: len,
            });
        }

        rows.push(line.chars().map(is_alive).collect::<Vec<_>>());
    }

    if rows.is_empty() {
        return Err(PatternError::Empty);
    }

    let Ok(grid) = Grid::from_rows(rows) else {
        unreachable!("every row was checked against the width above")
    };

    Ok(grid)
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT)
}

fn is_alive(c: char) -> bool {
    matches!(c, '*' | '1')
}
