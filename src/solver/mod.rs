//! Guess selection
//!
//! Expected-information-gain scoring, guess ranking, and the session-scoped
//! advisor that ties them to an allowed-guess set and opener configuration.

mod advisor;
mod gain;
mod openers;
mod ranker;

pub use advisor::Advisor;
pub use gain::expected_gain;
pub use openers::OpenerTable;
pub use ranker::{RankOptions, RankedGuess, SHORTLIST_LEN, rank_guesses};
