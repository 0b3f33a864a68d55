//! Belief distribution over candidate secrets
//!
//! A `Belief` maps each candidate word to the probability that it is the
//! secret. The invariant is that weights sum to 1, or the belief is the
//! canonical empty belief: the terminal "no word fits the evidence" state.
//! Raw (unnormalized) weights exist only as input to [`Belief::normalized`].

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for distribution construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeliefError {
    /// Weights were supplied but sum to zero, so no posterior exists
    Impossible,
}

impl fmt::Display for BeliefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Impossible => {
                write!(f, "Weights sum to zero; no candidate can carry any probability")
            }
        }
    }
}

impl std::error::Error for BeliefError {}

/// A normalized probability distribution over candidate secrets
///
/// Immutable once built; every update operation returns a new `Belief`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Belief {
    weights: FxHashMap<Word, f64>,
}

impl Belief {
    /// The canonical empty belief: no word is consistent with the evidence
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize raw non-negative weights into a belief
    ///
    /// An empty input yields the canonical empty belief. A nonempty input
    /// whose weights sum to zero yields [`BeliefError::Impossible`] rather
    /// than a division by zero.
    ///
    /// # Errors
    /// Returns `BeliefError::Impossible` when the weight sum is not positive.
    pub fn normalized(weights: FxHashMap<Word, f64>) -> Result<Self, BeliefError> {
        if weights.is_empty() {
            return Ok(Self::empty());
        }

        let sum: f64 = weights.values().sum();
        if sum <= 0.0 {
            return Err(BeliefError::Impossible);
        }

        let weights = weights.into_iter().map(|(w, p)| (w, p / sum)).collect();
        Ok(Self { weights })
    }

    /// Build a uniform belief over the given words
    ///
    /// Duplicates collapse to a single entry; an empty iterator yields the
    /// canonical empty belief.
    #[must_use]
    pub fn uniform(words: impl IntoIterator<Item = Word>) -> Self {
        let weights: FxHashMap<Word, f64> = words.into_iter().map(|w| (w, 1.0)).collect();

        // Uniform weights are trivially normalizable unless empty
        Self::normalized(weights).unwrap_or_else(|_| Self::empty())
    }

    /// Number of words carrying probability mass
    #[inline]
    #[must_use]
    pub fn support_size(&self) -> usize {
        self.weights.len()
    }

    /// True when no word is consistent with the observed evidence
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The single remaining candidate, if the answer is already determined
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&Word> {
        if self.weights.len() == 1 {
            self.weights.keys().next()
        } else {
            None
        }
    }

    /// Probability assigned to `word` (0 if outside the support)
    #[inline]
    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// True if `word` carries probability mass
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.weights.contains_key(word)
    }

    /// Iterate over (word, probability) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.weights.iter().map(|(w, &p)| (w, p))
    }

    /// Support sorted alphabetically with probabilities
    ///
    /// Gives deterministic ordering for sampling and display.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&Word, f64)> {
        let mut entries: Vec<(&Word, f64)> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.text().cmp(b.text()));
        entries
    }

    /// Support sorted by descending probability, alphabetical among equals
    #[must_use]
    pub fn by_descending_weight(&self) -> Vec<(&Word, f64)> {
        let mut entries: Vec<(&Word, f64)> = self.iter().collect();
        entries.sort_by(|(wa, pa), (wb, pb)| {
            pb.total_cmp(pa).then_with(|| wa.text().cmp(wb.text()))
        });
        entries
    }

    /// Shannon entropy in nats: `-Σ p·ln(p)`
    ///
    /// Zero-probability entries contribute 0, avoiding `0·ln(0)`. The empty
    /// belief has entropy 0.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        self.weights
            .values()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.ln())
            .sum()
    }
}
