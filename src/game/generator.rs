//! Secret sequence generation
//!
//! Draws a random secret of distinct colors from the palette by partially
//! shuffling a copy and taking the prefix. Shuffling gives uniqueness for
//! free and randomizes position order, which matters for scoring.

use super::{GameError, MAX_COLORS, MIN_COLORS};
use crate::core::Color;
use crate::palette::Palette;
use rand::Rng;
use rand::seq::SliceRandom;

/// Produces the palette and random secret sequences for a session
#[derive(Debug, Clone, Copy)]
pub struct SequenceGenerator {
    palette: Palette,
}

impl SequenceGenerator {
    /// Create a generator over a session palette
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The fixed, ordered palette for the active locale
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &Palette {
        &self.palette
    }

    /// Draw a random secret of `number_of_colors` distinct colors
    ///
    /// The randomness source is an explicit parameter so generation stays
    /// deterministic under a seeded RNG in tests.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `number_of_colors` is
    /// outside `4..=10` or exceeds the palette size.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        number_of_colors: usize,
        rng: &mut R,
    ) -> Result<Vec<Color>, GameError> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&number_of_colors)
            || number_of_colors > self.palette.len()
        {
            return Err(GameError::InvalidConfiguration {
                field: "number of colors",
                value: number_of_colors,
                min: MIN_COLORS,
                max: MAX_COLORS.min(self.palette.len()),
            });
        }

        let mut pool = self.palette.colors();
        let (secret, _) = pool.partial_shuffle(rng, number_of_colors);
        Ok(secret.to_vec())
    }
}
