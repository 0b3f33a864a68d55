//! Main advisor interface
//!
//! Bundles the allowed-guess set, ranking options, opener table, and the
//! sampling RNG into one session-scoped object. The belief itself stays
//! outside: every method takes it by reference and returns new values, so
//! the caller owns the only mutable game state.

use super::openers::OpenerTable;
use super::ranker::{RankOptions, RankedGuess, rank_guesses};
use crate::belief::{Belief, PruneStrategy, prune};
use crate::core::{Coloring, Word};
use crate::priors::PriorKind;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Guess advisor for one session
pub struct Advisor<'a, R: Rng> {
    allowed: &'a FxHashSet<Word>,
    options: RankOptions,
    openers: OpenerTable,
    prior_kind: PriorKind,
    use_opener: bool,
    rng: R,
}

impl<'a, R: Rng> Advisor<'a, R> {
    /// Create a new advisor
    ///
    /// # Parameters
    /// - `allowed`: the words the game accepts as guesses
    /// - `prior_kind`: which prior seeded the session (selects the opener)
    /// - `options`: ranking cost/accuracy knobs
    /// - `rng`: source for all compaction sampling; seed it for
    ///   reproducible recommendations
    pub fn new(
        allowed: &'a FxHashSet<Word>,
        prior_kind: PriorKind,
        options: RankOptions,
        rng: R,
    ) -> Self {
        Self {
            allowed,
            options,
            openers: OpenerTable::default(),
            prior_kind,
            use_opener: true,
            rng,
        }
    }

    /// Replace the opener table
    #[must_use]
    pub fn with_openers(mut self, openers: OpenerTable) -> Self {
        self.openers = openers;
        self
    }

    /// Always recompute round 1 instead of consulting the opener table
    #[must_use]
    pub fn without_opener(mut self) -> Self {
        self.use_opener = false;
        self
    }

    /// The precomputed opener, when `round` is 1 and one applies
    #[must_use]
    pub fn opener(&self, round: usize) -> Option<&Word> {
        if round != 1 || !self.use_opener {
            return None;
        }
        self.openers
            .opener_for(self.prior_kind)
            .filter(|w| self.allowed.contains(*w))
    }

    /// Rank the guess universe against the current belief, best first
    pub fn shortlist(&mut self, belief: &Belief) -> Vec<RankedGuess> {
        rank_guesses(belief, self.allowed, &self.options, &mut self.rng)
    }

    /// The single guess to play this round
    ///
    /// Round 1 uses the precomputed opener when one applies. A determined
    /// answer (singleton belief) is guessed directly. Returns `None` when
    /// the belief is empty or no legal guess can be scored.
    pub fn recommend(&mut self, belief: &Belief, round: usize) -> Option<Word> {
        if belief.is_empty() {
            return None;
        }

        if let Some(sole) = belief.sole_candidate()
            && self.allowed.contains(sole)
        {
            return Some(sole.clone());
        }

        if let Some(opener) = self.opener(round) {
            return Some(opener.clone());
        }

        self.shortlist(belief).into_iter().next().map(|r| r.word)
    }

    /// Apply real-game feedback: condition the belief on the observation
    ///
    /// Always the exact path; approximation is reserved for hypothetical
    /// posteriors during scoring. Returns the empty belief when the secret
    /// lies outside the modeled space.
    pub fn observe(&mut self, belief: &Belief, guess: &Word, observed: Coloring) -> Belief {
        prune(belief, guess, observed, PruneStrategy::Exact, &mut self.rng)
    }
}
