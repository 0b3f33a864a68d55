//! Prior and word-list file loading

use super::parser::{ParsedPrior, PriorParseError, parse_prior};
use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading priors and word lists from disk
#[derive(Debug)]
pub enum PriorLoadError {
    Io(io::Error),
    Parse(PriorParseError),
    InvalidWord { line: usize, source: WordError },
}

impl fmt::Display for PriorLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::InvalidWord { line, source } => write!(f, "Line {line}: {source}"),
        }
    }
}

impl std::error::Error for PriorLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for PriorLoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<PriorParseError> for PriorLoadError {
    fn from(e: PriorParseError) -> Self {
        Self::Parse(e)
    }
}

/// Load a custom or frequency-weighted prior file
///
/// # Errors
/// Fails on I/O errors or any malformed line (see
/// [`parse_prior`](super::parse_prior)).
pub fn load_prior_file<P: AsRef<Path>>(path: P) -> Result<ParsedPrior, PriorLoadError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_prior(&content)?)
}

/// Load a plain word list: one lower-cased 5-letter word per line
///
/// Used for solution lists (uniform priors) and allowed-guess sets. Strict:
/// blank lines are skipped, but any invalid word fails the whole load.
///
/// # Errors
/// Fails on I/O errors or the first invalid word, with its line number.
pub fn load_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, PriorLoadError> {
    let content = fs::read_to_string(path)?;

    let mut words = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed)
            .map_err(|source| PriorLoadError::InvalidWord { line: idx + 1, source })?;
        words.push(word);
    }

    Ok(words)
}
