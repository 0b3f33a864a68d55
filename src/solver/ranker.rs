//! Guess ranking
//!
//! Scores a universe of legal guesses by expected information gain and
//! returns a short best-first list. One compacted sample is drawn up front
//! and shared by every score, so ranking is deterministic given the sample
//! and parallelizes cleanly.

use super::gain::gain_over_sample;
use crate::belief::{Belief, DEFAULT_SAMPLE_CAP, compact};
use crate::core::Word;
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Maximum number of guesses returned by [`rank_guesses`]
pub const SHORTLIST_LEN: usize = 5;

/// A scored guess
#[derive(Debug, Clone)]
pub struct RankedGuess {
    pub word: Word,
    /// Expected entropy reduction in nats
    pub expected_gain: f64,
    /// Prior probability that this guess is itself the secret
    pub prior: f64,
}

/// Tuning knobs for ranking
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Score every allowed word instead of only the sampled candidates
    pub exhaustive: bool,
    /// Compaction budget for the hypothesized-secret sample
    pub cap: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            exhaustive: false,
            cap: DEFAULT_SAMPLE_CAP,
        }
    }
}

/// Rank legal guesses by expected information gain, best first
///
/// The guess universe is every word in `allowed` when `options.exhaustive`,
/// otherwise the intersection of the compacted candidate sample with
/// `allowed` (cheaper, but can miss a globally optimal probe that is not
/// currently believed plausible).
///
/// Ordering: descending expected gain; among exactly tied gains, descending
/// prior probability (a guess that might be the answer outranks an equally
/// informative one that cannot be); alphabetical last so output is stable.
/// Truncated to [`SHORTLIST_LEN`].
#[must_use]
pub fn rank_guesses<R: Rng + ?Sized>(
    candidates: &Belief,
    allowed: &FxHashSet<Word>,
    options: &RankOptions,
    rng: &mut R,
) -> Vec<RankedGuess> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let sample = compact(candidates, options.cap, rng);
    let current_entropy = candidates.entropy();

    let universe: Vec<&Word> = if options.exhaustive {
        let mut all: Vec<&Word> = allowed.iter().collect();
        all.sort_by(|a, b| a.text().cmp(b.text()));
        all
    } else {
        sample
            .sorted_entries()
            .into_iter()
            .map(|(w, _)| w)
            .filter(|w| allowed.contains(*w))
            .collect()
    };

    let mut ranked: Vec<RankedGuess> = universe
        .par_iter()
        .map(|&guess| RankedGuess {
            word: guess.clone(),
            expected_gain: gain_over_sample(current_entropy, &sample, guess),
            prior: candidates.weight(guess),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.expected_gain
            .total_cmp(&a.expected_gain)
            .then_with(|| b.prior.total_cmp(&a.prior))
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
    ranked.truncate(SHORTLIST_LEN);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn allowed_of(words: &[&str]) -> FxHashSet<Word> {
        words.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn best_guess_is_most_separating() {
        let candidates = Belief::uniform(["aaaaa", "bbbbb", "ccccc"].map(word));
        // ABCXY separates everything; ZZZZZ separates nothing
        let allowed = allowed_of(&["aaaaa", "bbbbb", "ccccc", "abcxy", "zzzzz"]);

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &options, &mut rng);

        assert_eq!(ranked[0].word.text(), "abcxy");
        assert!(ranked[0].expected_gain > 0.0);
    }

    #[test]
    fn ranking_descends_by_gain() {
        let candidates = Belief::uniform(["aaaaa", "bbbbb", "ccccc"].map(word));
        let allowed = allowed_of(&["aaaaa", "bbbbb", "ccccc", "abcxy", "axxxx", "zzzzz"]);

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &options, &mut rng);

        for pair in ranked.windows(2) {
            assert!(pair[0].expected_gain >= pair[1].expected_gain);
        }
    }

    #[test]
    fn exact_ties_broken_by_prior() {
        // AAAAA and BBBBB split {aaaaa, bbbbb} identically (perfect vs all
        // absent), so their gains tie exactly; the likelier word must win
        let weights: rustc_hash::FxHashMap<Word, f64> = [("aaaaa", 1.0), ("bbbbb", 3.0)]
            .into_iter()
            .map(|(s, p)| (word(s), p))
            .collect();
        let candidates = Belief::normalized(weights).unwrap();
        let allowed = allowed_of(&["aaaaa", "bbbbb"]);

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &options, &mut rng);

        assert!(
            (ranked[0].expected_gain - ranked[1].expected_gain).abs() < f64::EPSILON,
            "both guesses fully resolve the pair"
        );
        assert_eq!(ranked[0].word.text(), "bbbbb");
    }

    #[test]
    fn shortlist_truncated_to_five() {
        let words = [
            "aback", "abase", "abate", "abbey", "abbot", "abhor", "abide", "abled",
        ];
        let candidates = Belief::uniform(words.map(word));
        let allowed = allowed_of(&words);

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &options, &mut rng);

        assert_eq!(ranked.len(), SHORTLIST_LEN);
    }

    #[test]
    fn empty_candidates_rank_nothing() {
        let allowed = allowed_of(&["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&Belief::empty(), &allowed, &RankOptions::default(), &mut rng);
        assert!(ranked.is_empty());
    }

    #[test]
    fn sampled_universe_restricted_to_allowed() {
        let candidates = Belief::uniform(["aaaaa", "bbbbb", "ccccc"].map(word));
        // Only BBBBB is a legal guess
        let allowed = allowed_of(&["bbbbb"]);

        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &RankOptions::default(), &mut rng);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word.text(), "bbbbb");
    }

    #[test]
    fn exhaustive_scores_words_outside_belief() {
        // The probe ABCXY is not a plausible secret but is the best guess;
        // only exhaustive mode can find it
        let candidates = Belief::uniform(["aaaaa", "bbbbb", "ccccc"].map(word));
        let allowed = allowed_of(&["aaaaa", "bbbbb", "ccccc", "abcxy"]);

        let mut rng = StdRng::seed_from_u64(1);
        let sampled = rank_guesses(&candidates, &allowed, &RankOptions::default(), &mut rng);
        assert!(sampled.iter().all(|r| r.word.text() != "abcxy"));

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let exhaustive = rank_guesses(&candidates, &allowed, &options, &mut rng);
        assert_eq!(exhaustive[0].word.text(), "abcxy");
    }

    #[test]
    fn no_negative_gain_above_positive() {
        let candidates = Belief::uniform(["aaaaa", "bbbbb", "ccccc", "ddddd"].map(word));
        let allowed = allowed_of(&["aaaaa", "bbbbb", "ccccc", "ddddd", "abcdx", "zzzzz"]);

        let options = RankOptions {
            exhaustive: true,
            ..RankOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ranked = rank_guesses(&candidates, &allowed, &options, &mut rng);

        let mut seen_nonpositive = false;
        for r in &ranked {
            if r.expected_gain <= 0.0 {
                seen_nonpositive = true;
            } else {
                assert!(
                    !seen_nonpositive,
                    "positive-gain guess ranked below a non-positive one"
                );
            }
        }
    }

    #[test]
    fn ranking_reproducible_with_seed() {
        let words: Vec<String> = (0..40)
            .map(|i| {
                format!(
                    "pl{}{}t",
                    char::from(b'a' + (i / 26) as u8),
                    char::from(b'a' + (i % 26) as u8)
                )
            })
            .collect();
        let candidates = Belief::uniform(words.iter().map(|s| word(s)));
        let allowed: FxHashSet<Word> = words.iter().map(|s| word(s)).collect();

        let options = RankOptions {
            exhaustive: false,
            cap: 15,
        };

        let a = rank_guesses(&candidates, &allowed, &options, &mut StdRng::seed_from_u64(4));
        let b = rank_guesses(&candidates, &allowed, &options, &mut StdRng::seed_from_u64(4));

        let texts =
            |v: &[RankedGuess]| v.iter().map(|r| r.word.text().to_string()).collect::<Vec<_>>();
        assert_eq!(texts(&a), texts(&b));
    }
}
