//! Formatting utilities for terminal output

use crate::core::{Color, Score};
use crate::palette::Palette;

/// Marker for a well-placed color
pub const WELL_PLACED_MARKER: char = '●';
/// Marker for a misplaced color
pub const MISPLACED_MARKER: char = '○';
/// Marker for a color matching nothing
pub const ABSENT_MARKER: char = '·';

/// Format a score as a three-bucket marker string
///
/// Well-placed markers first, then misplaced, then one neutral marker per
/// position that matched nothing.
#[must_use]
pub fn feedback_markers(score: Score, number_of_colors: usize) -> String {
    let mut result = String::with_capacity(number_of_colors * 3);

    for _ in 0..score.well_placed() {
        result.push(WELL_PLACED_MARKER);
    }
    for _ in 0..score.misplaced() {
        result.push(MISPLACED_MARKER);
    }
    for _ in 0..score.absent(number_of_colors) {
        result.push(ABSENT_MARKER);
    }

    result
}

/// Format the palette's display names as one comma-separated line
#[must_use]
pub fn palette_line(palette: &Palette) -> String {
    palette.display_names().join(", ")
}

/// Format a secret sequence in the palette's locale
#[must_use]
pub fn sequence_line(palette: &Palette, sequence: &[Color]) -> String {
    sequence
        .iter()
        .map(|&color| palette.name(color))
        .collect::<Vec<_>>()
        .join(" ")
}
