//! Terminal output formatting
//!
//! Display utilities for game feedback and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_loss, print_palette, print_turn_feedback, print_win};
