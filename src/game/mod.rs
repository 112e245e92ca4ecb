//! Game session: configuration bounds, error taxonomy, and the turn state
//! machine that owns the secret.

mod generator;

pub use generator::SequenceGenerator;

use crate::core::{Color, Score, ScoreError};
use crate::palette::{Locale, Palette};
use std::fmt;

/// Minimum secret length
pub const MIN_COLORS: usize = 4;
/// Maximum secret length
pub const MAX_COLORS: usize = 10;
/// Minimum number of attempts per game
pub const MIN_ATTEMPTS: usize = 10;
/// Maximum number of attempts per game
pub const MAX_ATTEMPTS: usize = 100;

/// Configuration for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub number_of_colors: usize,
    pub max_attempts: usize,
    pub locale: Locale,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            number_of_colors: MIN_COLORS,
            max_attempts: MIN_ATTEMPTS,
            locale: Locale::default(),
        }
    }
}

impl GameConfig {
    /// Check the configured bounds
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` naming the offending field
    /// if `number_of_colors` is outside `4..=10` or `max_attempts` is
    /// outside `10..=100`.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.number_of_colors < MIN_COLORS || self.number_of_colors > MAX_COLORS {
            return Err(GameError::InvalidConfiguration {
                field: "number of colors",
                value: self.number_of_colors,
                min: MIN_COLORS,
                max: MAX_COLORS,
            });
        }
        if self.max_attempts < MIN_ATTEMPTS || self.max_attempts > MAX_ATTEMPTS {
            return Err(GameError::InvalidConfiguration {
                field: "max attempts",
                value: self.max_attempts,
                min: MIN_ATTEMPTS,
                max: MAX_ATTEMPTS,
            });
        }
        Ok(())
    }
}

/// Error type for game-level failures
///
/// All variants are non-fatal: the interactive loop reports them and
/// re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    LengthMismatch {
        guess: usize,
        secret: usize,
    },
    UnknownColor {
        tokens: Vec<String>,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "Invalid {field}: {value} (must be between {min} and {max})")
            }
            Self::LengthMismatch { guess, secret } => {
                write!(f, "Guess has {guess} colors but the secret has {secret}")
            }
            Self::UnknownColor { tokens } => {
                write!(f, "Unknown colors: {}", tokens.join(", "))
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<ScoreError> for GameError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::LengthMismatch { guess, secret } => Self::LengthMismatch { guess, secret },
        }
    }
}

/// Result of one scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Guess matched the secret exactly
    Won,
    /// Attempts exhausted; carries the revealed secret
    Lost(Vec<Color>),
    /// Attempts remain
    InProgress,
}

/// Feedback for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub score: Score,
    pub attempts_used: usize,
    pub outcome: Outcome,
}

/// One game session
///
/// Owns the secret for its whole lifetime; the secret only leaves through
/// the loss outcome, which deliberately reveals it.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    palette: Palette,
    secret: Vec<Color>,
    attempts_used: usize,
}

impl Game {
    /// Start a game with a freshly drawn secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` for out-of-bounds config
    /// values.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let palette = Palette::new(config.locale);
        let secret =
            SequenceGenerator::new(palette).generate(config.number_of_colors, &mut rand::rng())?;

        Ok(Self {
            config,
            palette,
            secret,
            attempts_used: 0,
        })
    }

    /// Start a game with a known secret (deterministic tests)
    #[cfg(test)]
    pub(crate) fn with_secret(config: GameConfig, secret: Vec<Color>) -> Self {
        Self {
            config,
            palette: Palette::new(config.locale),
            secret,
            attempts_used: 0,
        }
    }

    /// The session palette
    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The session configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Attempts played so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.config.max_attempts - self.attempts_used
    }

    /// Split free-text input into color tokens and resolve them against the
    /// palette
    ///
    /// Accepts whitespace- or comma-separated names, case-insensitive.
    ///
    /// # Errors
    /// Returns `GameError::UnknownColor` listing every token that is not a
    /// palette color. `GameError::LengthMismatch` if the token count differs
    /// from the secret length.
    pub fn parse_guess(&self, input: &str) -> Result<Vec<Color>, GameError> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let unknown: Vec<String> = tokens
            .iter()
            .filter(|token| self.palette.parse(token).is_none())
            .map(|token| (*token).to_string())
            .collect();
        if !unknown.is_empty() {
            return Err(GameError::UnknownColor { tokens: unknown });
        }

        if tokens.len() != self.config.number_of_colors {
            return Err(GameError::LengthMismatch {
                guess: tokens.len(),
                secret: self.config.number_of_colors,
            });
        }

        Ok(tokens
            .iter()
            .filter_map(|token| self.palette.parse(token))
            .collect())
    }

    /// Score one guess and advance the attempt counter
    ///
    /// A length-mismatched guess fails fast without consuming an attempt.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the guess length differs from
    /// the secret length.
    pub fn play_guess(&mut self, guess: &[Color]) -> Result<TurnReport, GameError> {
        let score = Score::evaluate(guess, &self.secret)?;
        self.attempts_used += 1;

        let outcome = if score.is_win(self.secret.len()) {
            Outcome::Won
        } else if self.attempts_used >= self.config.max_attempts {
            Outcome::Lost(self.secret.clone())
        } else {
            Outcome::InProgress
        };

        Ok(TurnReport {
            score,
            attempts_used: self.attempts_used,
            outcome,
        })
    }
}
