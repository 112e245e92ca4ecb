//! Color palettes and localized display names
//!
//! A Palette is the ordered set of selectable colors for one game session,
//! labeled in the session's locale. Tokens parse case-insensitively against
//! the locale's names; the resulting `Color` values are canonical, so the
//! scoring code never sees a display string.

mod names;

use crate::core::{Color, PALETTE_SIZE};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    /// Parse a locale code like "en" or "fr"
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "fr" | "french" => Some(Self::French),
            _ => None,
        }
    }

    /// Short code for this locale
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Display-name table for this locale, in canonical palette order
    #[must_use]
    const fn names(self) -> &'static [&'static str; PALETTE_SIZE] {
        match self {
            Self::English => &names::ENGLISH,
            Self::French => &names::FRENCH,
        }
    }
}

/// The ordered palette of selectable colors for one session
///
/// Immutable once constructed; a locale change means constructing a new
/// palette for the next session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    locale: Locale,
}

impl Palette {
    /// Build the palette for a locale
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale this palette labels colors in
    #[inline]
    #[must_use]
    pub const fn locale(self) -> Locale {
        self.locale
    }

    /// Number of selectable colors
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        PALETTE_SIZE
    }

    /// Palettes are never empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// The palette colors, in their fixed order
    #[must_use]
    pub fn colors(self) -> Vec<Color> {
        Color::all().collect()
    }

    /// Localized display name for a color
    #[must_use]
    pub fn name(self, color: Color) -> &'static str {
        self.locale.names()[color.index()]
    }

    /// All localized display names, in palette order
    #[must_use]
    pub const fn display_names(self) -> &'static [&'static str; PALETTE_SIZE] {
        self.locale.names()
    }

    /// Parse a player token against this palette, case-insensitively
    ///
    /// Returns `None` for tokens that are not a color name in the palette's
    /// locale.
    ///
    /// # Examples
    /// ```
    /// use mastermind::palette::{Locale, Palette};
    ///
    /// let palette = Palette::new(Locale::English);
    /// let red = palette.parse("red").unwrap();
    /// assert_eq!(palette.parse("RED"), Some(red));
    /// assert_eq!(palette.parse("rouge"), None);
    /// ```
    #[must_use]
    pub fn parse(self, token: &str) -> Option<Color> {
        self.locale
            .names()
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|index| Color::new(index).expect("name tables are palette sized"))
    }
}
