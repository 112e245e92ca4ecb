//! Guess feedback scoring
//!
//! A Score reports how close a guess came to the secret:
//! - well-placed: correct color in the correct position
//! - misplaced: color present in the secret at a different, still-unmatched
//!   position
//!
//! Exact matches are consumed first, then the remaining guess entries are
//! checked against the remaining secret multiset, so a guess that repeats a
//! color can never match more secret occurrences than exist.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one guess against the secret
///
/// Holds the two match counts. `well_placed + misplaced` never exceeds the
/// sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    well_placed: usize,
    misplaced: usize,
}

/// Error type for scoring failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => {
                write!(f, "Guess has {guess} colors but the secret has {secret}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(well_placed: usize, misplaced: usize) -> Self {
        Self {
            well_placed,
            misplaced,
        }
    }

    /// Number of guess positions matching the secret exactly
    #[inline]
    #[must_use]
    pub const fn well_placed(self) -> usize {
        self.well_placed
    }

    /// Number of guess colors present elsewhere in the secret
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Number of guess positions that matched nothing, for a sequence of
    /// `length` colors
    #[inline]
    #[must_use]
    pub const fn absent(self, length: usize) -> usize {
        length - self.well_placed - self.misplaced
    }

    /// Check whether this score wins a game of `length` colors
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.well_placed == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: one left-to-right scan; each exact position match
    ///    increments `well_placed` and consumes both slots. Unconsumed
    ///    secret colors go into a remaining-count pool, unconsumed guess
    ///    colors are kept in original order.
    /// 2. Second pass: each remaining guess color that still has a count in
    ///    the pool increments `misplaced` and removes one occurrence.
    ///
    /// Neither input is mutated.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the sequences differ in
    /// length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Score};
    ///
    /// let secret: Vec<Color> = ["red", "blue", "green", "yellow"]
    ///     .iter()
    ///     .map(|n| Color::from_canonical(n).unwrap())
    ///     .collect();
    /// let guess: Vec<Color> = ["blue", "red", "yellow", "purple"]
    ///     .iter()
    ///     .map(|n| Color::from_canonical(n).unwrap())
    ///     .collect();
    ///
    /// let score = Score::evaluate(&guess, &secret).unwrap();
    /// assert_eq!((score.well_placed(), score.misplaced()), (0, 3));
    /// ```
    pub fn evaluate(guess: &[Color], secret: &[Color]) -> Result<Self, ScoreError> {
        if guess.len() != secret.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let mut well_placed = 0;
        let mut secret_remaining: FxHashMap<Color, usize> = FxHashMap::default();
        let mut guess_remaining: Vec<Color> = Vec::with_capacity(guess.len());

        // First pass: exact matches, consuming slots as they are found
        for (&g, &s) in guess.iter().zip(secret) {
            if g == s {
                well_placed += 1;
            } else {
                *secret_remaining.entry(s).or_insert(0) += 1;
                guess_remaining.push(g);
            }
        }

        // Second pass: remaining guess colors against the remaining pool
        let mut misplaced = 0;
        for color in guess_remaining {
            if let Some(count) = secret_remaining.get_mut(&color)
                && *count > 0
            {
                misplaced += 1;
                *count -= 1;
            }
        }

        Ok(Self {
            well_placed,
            misplaced,
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} well placed, {} misplaced",
            self.well_placed, self.misplaced
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(names: &[&str]) -> Vec<Color> {
        names
            .iter()
            .map(|name| Color::from_canonical(name).unwrap())
            .collect()
    }

    #[test]
    fn score_guess_equals_secret_is_all_well_placed() {
        for names in [
            &["red", "blue", "green", "yellow"][..],
            &["purple", "orange", "pink", "brown", "black", "white"][..],
        ] {
            let secret = colors(names);
            let score = Score::evaluate(&secret, &secret).unwrap();

            assert_eq!(score.well_placed(), names.len());
            assert_eq!(score.misplaced(), 0);
            assert!(score.is_win(names.len()));
        }
    }

    #[test]
    fn score_disjoint_sequences_match_nothing() {
        let secret = colors(&["red", "blue", "green", "yellow"]);
        let guess = colors(&["purple", "orange", "pink", "brown"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(score.well_placed(), 0);
        assert_eq!(score.misplaced(), 0);
        assert_eq!(score.absent(4), 4);
    }

    #[test]
    fn score_all_misplaced_plus_one_absent() {
        // Blue, Red, Yellow all exist in the secret at other positions;
        // Purple does not appear at all
        let secret = colors(&["red", "blue", "green", "yellow"]);
        let guess = colors(&["blue", "red", "yellow", "purple"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(score.well_placed(), 0);
        assert_eq!(score.misplaced(), 3);
        assert_eq!(score.absent(4), 1);
    }

    #[test]
    fn score_duplicate_guess_colors_cannot_overcount() {
        // Red sits at positions 0 and 3; both are consumed as exact matches,
        // leaving no Red for the middle two guess entries
        let secret = colors(&["red", "blue", "green", "red"]);
        let guess = colors(&["red", "red", "red", "red"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(score.well_placed(), 2);
        assert_eq!(score.misplaced(), 0);
    }

    #[test]
    fn score_duplicate_guess_color_matches_at_most_once_elsewhere() {
        // One Blue in the secret, two in the guess, neither well placed:
        // only the first unconsumed occurrence counts
        let secret = colors(&["red", "blue", "green", "yellow"]);
        let guess = colors(&["blue", "green", "blue", "red"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(score.well_placed(), 0);
        assert_eq!(score.misplaced(), 3);
    }

    #[test]
    fn score_exact_match_consumes_before_misplaced_scan() {
        // The well-placed Blue at position 1 must consume the secret's only
        // Blue, so the guess's other Blue scores nothing
        let secret = colors(&["red", "blue", "green", "yellow"]);
        let guess = colors(&["blue", "blue", "yellow", "green"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(score.well_placed(), 1);
        assert_eq!(score.misplaced(), 2);
    }

    #[test]
    fn score_sum_never_exceeds_length() {
        let secret = colors(&["red", "blue", "green", "yellow", "purple"]);
        let guesses = [
            colors(&["red", "blue", "green", "yellow", "purple"]),
            colors(&["purple", "yellow", "green", "blue", "red"]),
            colors(&["red", "red", "red", "red", "red"]),
            colors(&["white", "black", "brown", "pink", "orange"]),
            colors(&["blue", "blue", "green", "green", "purple"]),
        ];

        for guess in &guesses {
            let score = Score::evaluate(guess, &secret).unwrap();
            assert!(score.well_placed() + score.misplaced() <= secret.len());
        }
    }

    #[test]
    fn score_single_color_case_insensitive_parse() {
        let secret = colors(&["Red"]);
        let guess = colors(&["red"]);

        let score = Score::evaluate(&guess, &secret).unwrap();

        assert_eq!((score.well_placed(), score.misplaced()), (1, 0));
    }

    #[test]
    fn score_length_mismatch_fails_fast() {
        let secret = colors(&["red", "blue", "green", "yellow"]);
        let guess = colors(&["red", "blue", "green"]);

        assert!(matches!(
            Score::evaluate(&guess, &secret),
            Err(ScoreError::LengthMismatch {
                guess: 3,
                secret: 4
            })
        ));
    }

    #[test]
    fn score_inputs_not_mutated() {
        let secret = colors(&["red", "blue", "green", "red"]);
        let guess = colors(&["red", "red", "red", "red"]);
        let secret_before = secret.clone();
        let guess_before = guess.clone();

        Score::evaluate(&guess, &secret).unwrap();

        assert_eq!(secret, secret_before);
        assert_eq!(guess, guess_before);
    }

    #[test]
    fn score_display() {
        let score = Score::new(2, 1);
        assert_eq!(format!("{score}"), "2 well placed, 1 misplaced");
    }
}
