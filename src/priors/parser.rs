//! Custom prior file parsing
//!
//! A prior file is line-oriented: every line is either `word` (implicit
//! weight 1) or `word weight`. The two forms must not mix within one file,
//! and any malformed line invalidates the whole load; a half-parsed prior is
//! worse than none.

use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for prior file contents
#[derive(Debug, Clone, PartialEq)]
pub enum PriorParseError {
    InvalidWord { line: usize, source: WordError },
    InvalidWeight { line: usize, text: String },
    NegativeWeight { line: usize, value: f64 },
    MixedForms { line: usize },
    WrongFieldCount { line: usize, found: usize },
}

impl fmt::Display for PriorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { line, source } => {
                write!(f, "Line {line}: {source}")
            }
            Self::InvalidWeight { line, text } => {
                write!(f, "Line {line}: '{text}' is not a valid weight")
            }
            Self::NegativeWeight { line, value } => {
                write!(f, "Line {line}: weight {value} is negative")
            }
            Self::MixedForms { line } => {
                write!(
                    f,
                    "Line {line}: mixes bare-word and word-weight forms in one file"
                )
            }
            Self::WrongFieldCount { line, found } => {
                write!(f, "Line {line}: expected 1 or 2 fields, got {found}")
            }
        }
    }
}

impl std::error::Error for PriorParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A successfully parsed prior file
///
/// Weights are raw; `weighted` records which form the file used so the
/// caller can tell a frequency dump from a bare word list.
#[derive(Debug, Clone)]
pub struct ParsedPrior {
    pub weights: FxHashMap<Word, f64>,
    pub weighted: bool,
}

/// Parse prior file contents
///
/// Blank lines are skipped. Repeated words accumulate their weights.
///
/// # Errors
/// Any malformed line fails the whole parse with its 1-based line number.
pub fn parse_prior(text: &str) -> Result<ParsedPrior, PriorParseError> {
    let mut weights: FxHashMap<Word, f64> = FxHashMap::default();
    let mut weighted: Option<bool> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw_line.split_whitespace().collect();

        if fields.is_empty() {
            continue;
        }

        let has_weight = match fields.len() {
            1 => false,
            2 => true,
            found => return Err(PriorParseError::WrongFieldCount { line, found }),
        };

        match weighted {
            None => weighted = Some(has_weight),
            Some(form) if form != has_weight => {
                return Err(PriorParseError::MixedForms { line });
            }
            Some(_) => {}
        }

        let word =
            Word::new(fields[0]).map_err(|source| PriorParseError::InvalidWord { line, source })?;

        let weight = if has_weight {
            let parsed: f64 = fields[1].parse().map_err(|_| PriorParseError::InvalidWeight {
                line,
                text: fields[1].to_string(),
            })?;
            if !parsed.is_finite() {
                return Err(PriorParseError::InvalidWeight {
                    line,
                    text: fields[1].to_string(),
                });
            }
            if parsed < 0.0 {
                return Err(PriorParseError::NegativeWeight {
                    line,
                    value: parsed,
                });
            }
            parsed
        } else {
            1.0
        };

        *weights.entry(word).or_insert(0.0) += weight;
    }

    Ok(ParsedPrior {
        weights,
        weighted: weighted.unwrap_or(false),
    })
}
