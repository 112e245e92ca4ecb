//! Display functions for game output

use super::formatters::{
    ABSENT_MARKER, MISPLACED_MARKER, WELL_PLACED_MARKER, palette_line, sequence_line,
};
use crate::core::{Color, Score};
use crate::palette::Palette;
use colored::Colorize;

/// Print the colored three-bucket feedback for one turn
///
/// Buckets are rendered in order: well-placed, misplaced, neither.
pub fn print_turn_feedback(
    score: Score,
    number_of_colors: usize,
    attempts_used: usize,
    max_attempts: usize,
) {
    let well = WELL_PLACED_MARKER
        .to_string()
        .repeat(score.well_placed())
        .green()
        .bold();
    let mis = MISPLACED_MARKER
        .to_string()
        .repeat(score.misplaced())
        .yellow();
    let absent = ABSENT_MARKER
        .to_string()
        .repeat(score.absent(number_of_colors))
        .bright_black();

    println!(
        "  [{well}{mis}{absent}]  {} well placed, {} misplaced  ({attempts_used}/{max_attempts} attempts)",
        score.well_placed().to_string().green().bold(),
        score.misplaced().to_string().yellow()
    );
}

/// Print the palette of valid color names
pub fn print_palette(palette: &Palette) {
    println!(
        "\n{} {}\n",
        "Available colors:".bright_cyan().bold(),
        palette_line(palette)
    );
}

/// Print the win banner
pub fn print_win(attempts_used: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  C O D E   B R O K E N !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Secret found in {} {}\n",
        attempts_used.to_string().bright_cyan().bold(),
        if attempts_used == 1 {
            "attempt"
        } else {
            "attempts"
        }
    );
}

/// Print the loss banner with the revealed secret
pub fn print_loss(palette: &Palette, secret: &[Color]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    Out of attempts!    ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The secret was: {}\n",
        sequence_line(palette, secret).bright_yellow().bold()
    );
}
