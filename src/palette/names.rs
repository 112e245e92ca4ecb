//! Embedded locale display-name tables
//!
//! One table per locale, aligned with the canonical palette order. Scoring
//! never reads these; they exist only for parsing player input and rendering.

use crate::core::PALETTE_SIZE;

/// English display names, canonical palette order
pub const ENGLISH: [&str; PALETTE_SIZE] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown", "Black", "White",
];

/// French display names, canonical palette order
pub const FRENCH: [&str; PALETTE_SIZE] = [
    "Rouge", "Bleu", "Vert", "Jaune", "Violet", "Orange", "Rose", "Marron", "Noir", "Blanc",
];
