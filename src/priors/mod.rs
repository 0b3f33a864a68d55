//! Belief priors and their external sources
//!
//! A session starts from one of three priors: a frequency-weighted word
//! list, a uniform distribution over an explicit solution list, or a custom
//! user-supplied file. The identity matters beyond the weights themselves,
//! since the canonical priors carry precomputed opening guesses.

mod loader;
mod parser;

pub use loader::{PriorLoadError, load_prior_file, load_word_file};
pub use parser::{ParsedPrior, PriorParseError, parse_prior};

/// Which prior seeded the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorKind {
    /// Frequency-weighted English word list
    FrequencyWeighted,
    /// Uniform over an explicit solution list
    UniformSolutions,
    /// User-supplied custom prior
    Custom,
}
