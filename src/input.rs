//! Reading integer sequences from text.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("can't read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: '{token}' is not an integer")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("input holds more than {max_len} integers")]
    TooLong { max_len: usize },
}

/// Parses whitespace separated integers, usually one per line.
///
/// Blank lines are skipped. `line` in errors is 1-based.
pub fn parse_sequence(text: &str, max_len: usize) -> Result<Vec<i32>, InputError> {
    let mut v = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            if v.len() == max_len {
                return Err(InputError::TooLong { max_len });
            }

            let val = token.parse::<i32>().map_err(|source| InputError::Parse {
                line: line_idx + 1,
                token: token.to_owned(),
                source,
            })?;
            v.push(val);
        }
    }

    Ok(v)
}

/// Reads and parses the file at `path`, see [`parse_sequence`].
pub fn read_sequence(path: &Path, max_len: usize) -> Result<Vec<i32>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })?;

    let v = parse_sequence(&text, max_len)?;
    debug!(path = %path.display(), len = v.len(), "read input");

    Ok(v)
}
