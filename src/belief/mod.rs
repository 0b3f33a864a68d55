//! Belief distributions and Bayesian updates
//!
//! The belief over candidate secrets is the single piece of session state.
//! Everything here is pure: operations take a belief and return a new one.

mod compact;
mod distribution;
mod prune;

pub use compact::{DEFAULT_SAMPLE_CAP, compact};
pub use distribution::{Belief, BeliefError};
pub use prune::{PruneStrategy, prune};

pub(crate) use prune::filter_consistent;
