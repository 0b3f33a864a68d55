//! Expected information gain of a candidate guess
//!
//! The score of a guess is the expected reduction in belief entropy from
//! observing its (yet-unknown) coloring, averaged over hypothesized secrets
//! weighted by the current belief. The outer expectation runs over a
//! compacted sample of the belief, and the hypothetical posteriors are
//! computed against that same sample, so one evaluation costs at most
//! `cap²` coloring/prune steps.

use crate::belief::{Belief, compact, filter_consistent};
use crate::core::{Coloring, Word};
use rand::Rng;

/// Estimate the expected entropy reduction from playing `guess`
///
/// Computes `Σ p(secret) · [H(candidates) − H(posterior)]` where the sum
/// ranges over a fresh compacted sample of `candidates` standing in for the
/// true secret. The result is a Monte-Carlo estimate whenever the support
/// exceeds `cap`; callers wanting reproducibility seed the RNG.
#[must_use]
pub fn expected_gain<R: Rng + ?Sized>(
    candidates: &Belief,
    guess: &Word,
    cap: usize,
    rng: &mut R,
) -> f64 {
    let sample = compact(candidates, cap, rng);
    gain_over_sample(candidates.entropy(), &sample, guess)
}

/// Expected gain of `guess` against a pre-drawn sample
///
/// Splitting the sampling out lets the ranker draw one sample and score the
/// whole guess universe against it in parallel.
pub(crate) fn gain_over_sample(current_entropy: f64, sample: &Belief, guess: &Word) -> f64 {
    sample
        .iter()
        .map(|(secret, p)| {
            let observed = Coloring::of(secret, guess);
            let posterior = filter_consistent(sample, guess, observed);
            p * (current_entropy - posterior.entropy())
        })
        .sum()
}
