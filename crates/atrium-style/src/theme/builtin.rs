//! Built-in themes.

use std::path::Path;

use super::ColorPalette;
use crate::rules::Stylesheet;
use crate::tokens::{Literal, TokenTable};
use crate::types::Color;
use crate::Result;

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// A complete theme: a palette and the token table derived from it.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
    /// The frozen token table style rules resolve against.
    tokens: TokenTable,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Create a high-contrast theme.
    pub fn high_contrast() -> Self {
        Self::custom(ThemeMode::HighContrast, ColorPalette::high_contrast())
    }

    /// Create a theme from a palette.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        let tokens = TokenTable::from_palette(&palette);
        Self {
            mode,
            palette,
            tokens,
        }
    }

    /// Load a theme's token table from a declaration file.
    ///
    /// The file's custom properties replace the built-in token set; the
    /// palette stays the mode's default for direct color access.
    pub fn from_file(path: impl AsRef<Path>, mode: ThemeMode) -> Result<Self> {
        let sheet = Stylesheet::from_file(path)?;
        let palette = match mode {
            ThemeMode::Light => ColorPalette::light(),
            ThemeMode::Dark => ColorPalette::dark(),
            ThemeMode::HighContrast => ColorPalette::high_contrast(),
        };

        Ok(Self {
            mode,
            palette,
            tokens: sheet.into_tokens(),
        })
    }

    /// The theme's token table.
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Resolve a token against this theme.
    pub fn resolve(&self, name: &str) -> Result<&Literal> {
        self.tokens.resolve(name)
    }

    /// Get the brand color.
    pub fn brand(&self) -> Color {
        self.palette.brand
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.palette.background
    }

    /// Get the text color.
    pub fn text(&self) -> Color {
        self.palette.text
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
