//! Belief update: condition a distribution on an observed coloring
//!
//! Pruning keeps exactly the candidates whose own coloring against the guess
//! reproduces the observation, then renormalizes. An empty survivor set is
//! the terminal signal that the secret lies outside the modeled space; it is
//! returned as the canonical empty belief, not as an error.

use super::{Belief, compact};
use crate::core::{Coloring, Word};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Accuracy/cost tradeoff for pruning
///
/// `Exact` conditions the full candidate set and is the path real-game
/// feedback must take. `Sampled` first compacts the belief to at most `cap`
/// words, trading fidelity for speed; it exists for the inner loop of guess
/// evaluation, where the result is treated as a noisy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneStrategy {
    /// Condition the full candidate set
    Exact,
    /// Compact to at most `cap` words first
    Sampled { cap: usize },
}

/// Condition `belief` on observing `observed` after playing `guess`
///
/// Survivors keep their prior weights and are renormalized. Returns the
/// canonical empty belief when no candidate is consistent with the
/// observation.
#[must_use]
pub fn prune<R: Rng + ?Sized>(
    belief: &Belief,
    guess: &Word,
    observed: Coloring,
    strategy: PruneStrategy,
    rng: &mut R,
) -> Belief {
    match strategy {
        PruneStrategy::Exact => filter_consistent(belief, guess, observed),
        PruneStrategy::Sampled { cap } => {
            let sample = compact(belief, cap, rng);
            filter_consistent(&sample, guess, observed)
        }
    }
}

/// Keep the words whose coloring against `guess` matches `observed`
///
/// Deterministic core of [`prune`]; also used directly by guess evaluation
/// on a pre-compacted sample.
pub(crate) fn filter_consistent(belief: &Belief, guess: &Word, observed: Coloring) -> Belief {
    let survivors: FxHashMap<Word, f64> = belief
        .iter()
        .filter(|(candidate, _)| Coloring::of(candidate, guess) == observed)
        .map(|(candidate, p)| (candidate.clone(), p))
        .collect();

    // A survivor set with zero total mass cannot explain the evidence either;
    // both collapse to the one terminal signal.
    Belief::normalized(survivors).unwrap_or_else(|_| Belief::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn belief_of(words: &[&str]) -> Belief {
        Belief::uniform(words.iter().map(|s| word(s)))
    }

    #[test]
    fn prune_retains_true_secret() {
        let belief = belief_of(&["crane", "slate", "irate", "grate", "trace"]);
        let secret = word("irate");
        let guess = word("crane");
        let observed = Coloring::of(&secret, &guess);

        let mut rng = StdRng::seed_from_u64(1);
        let posterior = prune(&belief, &guess, observed, PruneStrategy::Exact, &mut rng);

        assert!(posterior.contains(&secret));
    }

    #[test]
    fn prune_discards_inconsistent_words() {
        let belief = belief_of(&["crane", "slate", "irate"]);
        let guess = word("crane");
        // All-exact for CRANE: only CRANE itself survives
        let mut rng = StdRng::seed_from_u64(1);
        let posterior = prune(
            &belief,
            &guess,
            Coloring::PERFECT,
            PruneStrategy::Exact,
            &mut rng,
        );

        assert_eq!(posterior.support_size(), 1);
        assert_eq!(posterior.sole_candidate().unwrap().text(), "crane");
    }

    #[test]
    fn prune_renormalizes_survivors() {
        let belief = belief_of(&["crane", "slate", "irate", "grate"]);
        let secret = word("grate");
        let guess = word("crane");
        let observed = Coloring::of(&secret, &guess);

        let mut rng = StdRng::seed_from_u64(1);
        let posterior = prune(&belief, &guess, observed, PruneStrategy::Exact, &mut rng);

        assert!(!posterior.is_empty());
        let total: f64 = posterior.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prune_empty_when_nothing_survives() {
        let belief = belief_of(&["crane", "slate"]);
        let guess = word("zzzzz");
        // Claiming all-exact for ZZZZZ excludes every candidate
        let mut rng = StdRng::seed_from_u64(1);
        let posterior = prune(
            &belief,
            &guess,
            Coloring::PERFECT,
            PruneStrategy::Exact,
            &mut rng,
        );

        assert!(posterior.is_empty());
    }

    #[test]
    fn prune_idempotent_when_all_survive() {
        let belief = belief_of(&["crane", "slate", "irate", "grate"]);
        let secret = word("grate");
        let guess = word("crane");
        let observed = Coloring::of(&secret, &guess);

        let mut rng = StdRng::seed_from_u64(1);
        let once = prune(&belief, &guess, observed, PruneStrategy::Exact, &mut rng);
        let twice = prune(&once, &guess, observed, PruneStrategy::Exact, &mut rng);

        // Every survivor already satisfies the coloring; pruning again is a no-op
        assert_eq!(once, twice);
    }

    #[test]
    fn prune_preserves_relative_weights() {
        let weights: FxHashMap<Word, f64> =
            [("crate", 3.0), ("grate", 1.0), ("zzzzz", 6.0)]
                .into_iter()
                .map(|(s, p)| (word(s), p))
                .collect();
        let belief = Belief::normalized(weights).unwrap();

        // IRATE against secret CRATE and secret GRATE colors identically,
        // so both survive and keep their 3:1 ratio
        let guess = word("irate");
        let observed = Coloring::of(&word("crate"), &guess);

        let mut rng = StdRng::seed_from_u64(1);
        let posterior = prune(&belief, &guess, observed, PruneStrategy::Exact, &mut rng);

        assert_eq!(posterior.support_size(), 2);
        let crate_p = posterior.weight(&word("crate"));
        let grate_p = posterior.weight(&word("grate"));
        assert!((crate_p / grate_p - 3.0).abs() < 1e-9);
    }

    #[test]
    fn sampled_prune_small_belief_matches_exact() {
        // Support below the cap: sampled mode introduces no approximation
        let belief = belief_of(&["crane", "slate", "irate", "grate"]);
        let secret = word("grate");
        let guess = word("crane");
        let observed = Coloring::of(&secret, &guess);

        let mut rng = StdRng::seed_from_u64(1);
        let exact = prune(&belief, &guess, observed, PruneStrategy::Exact, &mut rng);
        let sampled = prune(
            &belief,
            &guess,
            observed,
            PruneStrategy::Sampled { cap: 200 },
            &mut rng,
        );

        assert_eq!(exact, sampled);
    }

    #[test]
    fn sampled_prune_support_bounded_by_cap() {
        // Many words colored identically by an unrelated guess
        let words: Vec<String> = (0..60)
            .map(|i| {
                format!(
                    "zy{}{}x",
                    char::from(b'a' + (i / 26) as u8),
                    char::from(b'a' + (i % 26) as u8)
                )
            })
            .collect();
        let belief = Belief::uniform(words.iter().map(|s| word(s)));

        let guess = word("qqqqq");
        let observed: Coloring = "00000".parse().unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let posterior = prune(
            &belief,
            &guess,
            observed,
            PruneStrategy::Sampled { cap: 20 },
            &mut rng,
        );

        assert!(posterior.support_size() <= 20);
        assert!(!posterior.is_empty());
    }
}
