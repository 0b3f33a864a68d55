//! Wordle Advisor
//!
//! A probabilistic advisor for five-letter word-guessing games: it keeps a
//! belief distribution over candidate secrets, recommends the guess with the
//! highest expected information gain, and conditions the belief on each
//! observed coloring.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::belief::{Belief, PruneStrategy, prune};
//! use wordle_advisor::core::{Coloring, Word};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("slate").unwrap();
//!
//! // What feedback would this guess get?
//! let coloring = Coloring::of(&secret, &guess);
//!
//! // Condition a belief on that observation
//! let belief = Belief::uniform([secret.clone(), Word::new("irate").unwrap()]);
//! let mut rng = StdRng::seed_from_u64(0);
//! let posterior = prune(&belief, &guess, coloring, PruneStrategy::Exact, &mut rng);
//! assert!(posterior.contains(&secret));
//! ```

// Core domain types
pub mod core;

// Belief distributions and Bayesian updates
pub mod belief;

// Guess selection
pub mod solver;

// Prior construction and word-list loading
pub mod priors;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
