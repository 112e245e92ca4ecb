//! Canonical color tokens
//!
//! A Color is an opaque identifier into the fixed canonical palette table.
//! Display names for each locale live in the `palette` module; scoring never
//! touches presentation strings.

use std::fmt;

/// Canonical color keys, in palette order.
///
/// The table is sized to the maximum supported secret length, so every valid
/// `number_of_colors` fits inside one palette.
pub(crate) const CANONICAL: [&str; 10] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "brown", "black", "white",
];

/// Number of colors in the canonical palette
pub const PALETTE_SIZE: usize = CANONICAL.len();

/// An opaque color token from the fixed palette
///
/// Stores a canonical index rather than a display string, so equality is
/// case- and locale-insensitive by construction: any spelling of a color
/// name parses to the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

/// Error type for invalid color tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    OutOfRange(usize),
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(index) => {
                write!(f, "Color index {index} out of range (palette has {PALETTE_SIZE} colors)")
            }
            Self::UnknownName(name) => write!(f, "Unknown color name: {name}"),
        }
    }
}

impl std::error::Error for ColorError {}

impl Color {
    /// Create a color from its canonical palette index
    ///
    /// # Errors
    /// Returns `ColorError::OutOfRange` if `index >= PALETTE_SIZE`.
    pub fn new(index: usize) -> Result<Self, ColorError> {
        if index >= PALETTE_SIZE {
            return Err(ColorError::OutOfRange(index));
        }
        Ok(Self(index as u8))
    }

    /// Look up a color by canonical (English) key, case-insensitively
    ///
    /// # Errors
    /// Returns `ColorError::UnknownName` if the name is not in the canonical
    /// table.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// let a = Color::from_canonical("Red").unwrap();
    /// let b = Color::from_canonical("red").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Color::from_canonical("mauve").is_err());
    /// ```
    pub fn from_canonical(name: &str) -> Result<Self, ColorError> {
        CANONICAL
            .iter()
            .position(|key| key.eq_ignore_ascii_case(name))
            .map(|index| Self(index as u8))
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    /// Get the canonical palette index (0-based)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the canonical key for this color
    #[inline]
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        CANONICAL[self.0 as usize]
    }

    /// Iterate the full canonical palette in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PALETTE_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_new_valid_indices() {
        for i in 0..PALETTE_SIZE {
            let color = Color::new(i).unwrap();
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn color_new_out_of_range() {
        assert!(matches!(
            Color::new(PALETTE_SIZE),
            Err(ColorError::OutOfRange(_))
        ));
        assert!(Color::new(usize::MAX).is_err());
    }

    #[test]
    fn color_from_canonical_case_insensitive() {
        let lower = Color::from_canonical("red").unwrap();
        let upper = Color::from_canonical("RED").unwrap();
        let mixed = Color::from_canonical("Red").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.canonical(), "red");
    }

    #[test]
    fn color_from_canonical_unknown() {
        assert!(matches!(
            Color::from_canonical("mauve"),
            Err(ColorError::UnknownName(_))
        ));
        assert!(Color::from_canonical("").is_err());
    }

    #[test]
    fn color_all_distinct_and_ordered() {
        let colors: Vec<Color> = Color::all().collect();
        assert_eq!(colors.len(), PALETTE_SIZE);

        for (i, color) in colors.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn color_display_uses_canonical_key() {
        let color = Color::from_canonical("Blue").unwrap();
        assert_eq!(format!("{color}"), "blue");
    }

    #[test]
    fn palette_size_covers_max_secret_length() {
        assert!(PALETTE_SIZE >= 10);
    }
}
