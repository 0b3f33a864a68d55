//! Coloring (feedback) calculation and representation
//!
//! A coloring encodes the per-letter feedback for a guess using base-3
//! encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The coloring is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Colorings are produced only
//! by [`Coloring::of`] or parsed from validated digit strings; they are never
//! assembled by hand elsewhere.

use super::Word;
use std::fmt;

/// Feedback coloring for a guess against a hypothesized secret
///
/// Value range: 0-242 (3^5 - 1 = 243 possible colorings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coloring(u8);

/// Error type for invalid coloring strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringParseError {
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for ColoringParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Coloring must be exactly 5 digits, got {len}")
            }
            Self::InvalidDigit(ch) => {
                write!(f, "Coloring digits must be 0, 1, or 2, got '{ch}'")
            }
        }
    }
}

impl std::error::Error for ColoringParseError {}

impl Coloring {
    /// All exact matches (solved)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a coloring from a raw base-3 value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        debug_assert!(value < 243, "Coloring value must be < 243");
        Self(value)
    }

    /// Get the raw base-3 value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this coloring is all-exact (the game is solved)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Compute the coloring observed when `guess` is played and `secret` is
    /// the true word
    ///
    /// Implements the game's exact feedback rules, including duplicate-letter
    /// handling. The pass ordering is load-bearing: a guessed letter is
    /// credited Present only up to the number of occurrences in the secret
    /// not already consumed by an Exact match.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact-position matches and decrement that letter's
    ///    remaining count in the secret's letter multiset
    /// 2. Second pass: for non-exact positions, mark Present while the
    ///    remaining count is positive, else Absent
    /// 3. Encode as a base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Coloring, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let coloring = Coloring::of(&secret, &guess);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(coloring.value(), 180);
    /// ```
    #[must_use]
    pub fn of(secret: &Word, guess: &Word) -> Self {
        let mut result = [0u8; 5];
        let mut remaining = secret.char_counts();

        // First pass: exact matches consume from the secret's pool
        // Allow: index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = 2;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, only while letters remain
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == 0 {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            value += digit * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }

        Self(value)
    }

    /// Decode the coloring into its 5 per-position digits (0/1/2)
    #[must_use]
    pub const fn digits(self) -> [u8; 5] {
        let mut digits = [0u8; 5];
        let mut val = self.0;
        let mut i = 0;
        while i < 5 {
            digits[i] = val % 3;
            val /= 3;
            i += 1;
        }
        digits
    }

    /// Count the number of exact-position matches
    #[must_use]
    pub fn count_exact(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 2).count() as u8
    }

    /// Count the number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 1).count() as u8
    }
}

impl std::str::FromStr for Coloring {
    type Err = ColoringParseError;

    /// Parse a coloring from a 5-digit string like "01002"
    ///
    /// Each character must be '0' (absent), '1' (present), or '2' (exact);
    /// any other length or character fails with no coloring produced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return Err(ColoringParseError::InvalidLength(chars.len()));
        }

        let mut value = 0u8;
        let mut multiplier = 1u8;

        for ch in chars {
            let digit = match ch {
                '0' => 0,
                '1' => 1,
                '2' => 2,
                _ => return Err(ColoringParseError::InvalidDigit(ch)),
            };
            value += digit * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Coloring {
    /// Render as the 5-digit feedback string, e.g. "01002"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
