//! Mastermind
//!
//! A single-player code-breaking game: the program draws a hidden sequence
//! of distinct colors and scores each guess with duplicate-safe two-pass
//! feedback (well-placed, misplaced).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Color, Score};
//!
//! let secret = vec![
//!     Color::from_canonical("red").unwrap(),
//!     Color::from_canonical("blue").unwrap(),
//!     Color::from_canonical("green").unwrap(),
//!     Color::from_canonical("yellow").unwrap(),
//! ];
//! let guess = vec![
//!     Color::from_canonical("red").unwrap(),
//!     Color::from_canonical("green").unwrap(),
//!     Color::from_canonical("blue").unwrap(),
//!     Color::from_canonical("white").unwrap(),
//! ];
//!
//! let score = Score::evaluate(&guess, &secret).unwrap();
//! assert_eq!((score.well_placed(), score.misplaced()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Game session and secret generation
pub mod game;

// Color palettes and locale display names
pub mod palette;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
