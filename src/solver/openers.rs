//! Precomputed opening guesses
//!
//! Round-1 scoring is invariant across sessions for a fixed prior, so the
//! two canonical priors get a precomputed best first guess instead of a full
//! recomputation. The table is explicit configuration handed to the advisor;
//! callers can opt out to force recomputation, and custom priors never hit
//! the table.

use crate::core::Word;
use crate::priors::PriorKind;
use rustc_hash::FxHashMap;

/// Lookup from prior identity to its precomputed round-1 guess
#[derive(Debug, Clone)]
pub struct OpenerTable {
    entries: FxHashMap<PriorKind, Word>,
}

impl OpenerTable {
    /// An empty table: every prior recomputes round 1
    #[must_use]
    pub fn none() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Override or add the opener for a prior
    pub fn set(&mut self, kind: PriorKind, word: Word) {
        self.entries.insert(kind, word);
    }

    /// The precomputed opener for `kind`, if the table has one
    #[must_use]
    pub fn opener_for(&self, kind: PriorKind) -> Option<&Word> {
        self.entries.get(&kind)
    }
}

impl Default for OpenerTable {
    /// Openers for the two canonical priors
    fn default() -> Self {
        let mut table = Self::none();
        table.set(
            PriorKind::FrequencyWeighted,
            Word::new("tares").expect("static opener is a valid word"),
        );
        table.set(
            PriorKind::UniformSolutions,
            Word::new("raise").expect("static opener is a valid word"),
        );
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_canonical_priors() {
        let table = OpenerTable::default();
        assert_eq!(
            table.opener_for(PriorKind::FrequencyWeighted).unwrap().text(),
            "tares"
        );
        assert_eq!(
            table.opener_for(PriorKind::UniformSolutions).unwrap().text(),
            "raise"
        );
    }

    #[test]
    fn custom_priors_have_no_opener() {
        let table = OpenerTable::default();
        assert!(table.opener_for(PriorKind::Custom).is_none());
    }

    #[test]
    fn set_overrides_default() {
        let mut table = OpenerTable::default();
        table.set(
            PriorKind::UniformSolutions,
            Word::new("salet").unwrap(),
        );
        assert_eq!(
            table.opener_for(PriorKind::UniformSolutions).unwrap().text(),
            "salet"
        );
    }

    #[test]
    fn none_is_empty() {
        let table = OpenerTable::none();
        assert!(table.opener_for(PriorKind::FrequencyWeighted).is_none());
        assert!(table.opener_for(PriorKind::UniformSolutions).is_none());
    }
}
