//! Color palette definitions.

use crate::types::Color;

/// The color palette behind a theme's token table.
///
/// Fields are named for the roles the site chrome needs, not for hues;
/// the semantic tokens in [`TokenTable::from_palette`] alias onto them.
///
/// [`TokenTable::from_palette`]: crate::tokens::TokenTable::from_palette
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // Brand
    /// Main brand color.
    pub brand: Color,
    /// Subdued brand variant for large fills.
    pub brand_muted: Color,
    /// Accent color for highlights and markers.
    pub accent: Color,

    // Surfaces
    /// Page background.
    pub background: Color,
    /// Raised surface (navigation bar, footer, cards).
    pub surface: Color,

    // Text
    /// Primary text color.
    pub text: Color,
    /// Secondary/muted text color.
    pub text_muted: Color,
    /// Text color for content on brand-colored fills.
    pub text_inverse: Color,

    // Links
    /// Link color.
    pub link: Color,
    /// Link hover color.
    pub link_hover: Color,

    // Lines
    /// Standard border color.
    pub border: Color,
    /// Divider/separator color.
    pub divider: Color,
}

impl ColorPalette {
    /// Create a light palette.
    pub fn light() -> Self {
        Self {
            brand: Color::from_hex("#274C77").unwrap(),
            brand_muted: Color::from_hex("#4A6FA5").unwrap(),
            accent: Color::from_hex("#E07A5F").unwrap(),

            background: Color::from_hex("#FFFFFF").unwrap(),
            surface: Color::from_hex("#F5F7FA").unwrap(),

            text: Color::from_hex("#212529").unwrap(),
            text_muted: Color::from_hex("#6C757D").unwrap(),
            text_inverse: Color::from_hex("#FFFFFF").unwrap(),

            link: Color::from_hex("#1B6EC2").unwrap(),
            link_hover: Color::from_hex("#14508D").unwrap(),

            border: Color::from_hex("#DEE2E6").unwrap(),
            divider: Color::from_hex("#CED4DA").unwrap(),
        }
    }

    /// Create a dark palette.
    pub fn dark() -> Self {
        Self {
            brand: Color::from_hex("#5B8DEF").unwrap(),
            brand_muted: Color::from_hex("#3D64AD").unwrap(),
            accent: Color::from_hex("#E8896F").unwrap(),

            background: Color::from_hex("#16181D").unwrap(),
            surface: Color::from_hex("#20242B").unwrap(),

            text: Color::from_hex("#E8EAED").unwrap(),
            text_muted: Color::from_hex("#9AA0A6").unwrap(),
            text_inverse: Color::from_hex("#16181D").unwrap(),

            link: Color::from_hex("#6CA9E8").unwrap(),
            link_hover: Color::from_hex("#8FC0F2").unwrap(),

            border: Color::from_hex("#32363E").unwrap(),
            divider: Color::from_hex("#3C4048").unwrap(),
        }
    }

    /// Create a high-contrast palette.
    pub fn high_contrast() -> Self {
        Self {
            brand: Color::from_hex("#0000CC").unwrap(),
            brand_muted: Color::from_hex("#000099").unwrap(),
            accent: Color::from_hex("#CC0000").unwrap(),

            background: Color::WHITE,
            surface: Color::WHITE,

            text: Color::BLACK,
            text_muted: Color::from_hex("#333333").unwrap(),
            text_inverse: Color::WHITE,

            link: Color::from_hex("#0000EE").unwrap(),
            link_hover: Color::from_hex("#0000AA").unwrap(),

            border: Color::BLACK,
            divider: Color::BLACK,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
