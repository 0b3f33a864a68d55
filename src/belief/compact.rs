//! Sampling-based compaction of a belief distribution
//!
//! Guess evaluation is quadratic in the candidate count, so large beliefs are
//! first resampled down to a bounded-size empirical approximation. The output
//! is Monte-Carlo noisy; it is only ever used to score guesses, never kept as
//! session state.

use super::Belief;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rustc_hash::FxHashMap;

/// Default number of weighted draws used to approximate a large belief
///
/// Bounds guess evaluation at `cap²` coloring/prune steps regardless of the
/// true candidate count.
pub const DEFAULT_SAMPLE_CAP: usize = 200;

/// Resample a belief down to at most `cap` distinct words
///
/// When the support already fits within `cap`, the belief is returned
/// unchanged and no approximation error is introduced. Otherwise `cap`
/// weighted draws with replacement are taken and each drawn word gets mass
/// `count / cap`.
///
/// The support is ordered before sampling, so a fixed seed yields a fixed
/// sample regardless of map iteration order.
#[must_use]
pub fn compact<R: Rng + ?Sized>(belief: &Belief, cap: usize, rng: &mut R) -> Belief {
    if belief.support_size() <= cap {
        return belief.clone();
    }

    let entries = belief.sorted_entries();
    let index = WeightedIndex::new(entries.iter().map(|(_, p)| *p))
        .expect("normalized belief weights sum to 1");

    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    for _ in 0..cap {
        *counts.entry(index.sample(rng)).or_insert(0) += 1;
    }

    let weights: FxHashMap<_, _> = counts
        .into_iter()
        .map(|(i, count)| (entries[i].0.clone(), count as f64 / cap as f64))
        .collect();

    Belief::normalized(weights).unwrap_or_else(|_| Belief::empty())
}
