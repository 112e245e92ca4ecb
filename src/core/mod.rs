//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero I/O
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod color;
mod score;

pub use color::{Color, ColorError, PALETTE_SIZE};
pub use score::{Score, ScoreError};
