//! The built-in token table derived from a palette.

use super::ColorPalette;
use crate::tokens::{Literal, TokenTable, TokenValue};
use crate::types::Length;
use crate::Result;

impl TokenTable {
    /// Build the standard token set from a color palette.
    ///
    /// Base tokens (palette colors, spacing, radii, type scale) are
    /// literals; the chrome-facing tokens (`banner-*`, `nav-*`,
    /// `footer-*`, `list-*`) are aliases onto them, so restyling a
    /// region means re-pointing one reference.
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self::try_from_palette(palette).expect("built-in token set is internally consistent")
    }

    fn try_from_palette(palette: &ColorPalette) -> Result<Self> {
        let mut b = Self::builder();

        // Palette colors
        b.define("brand", palette.brand)?;
        b.define("brand-muted", palette.brand_muted)?;
        b.define("accent", palette.accent)?;
        b.define("background", palette.background)?;
        b.define("surface", palette.surface)?;
        b.define("text", palette.text)?;
        b.define("text-muted", palette.text_muted)?;
        b.define("text-inverse", palette.text_inverse)?;
        b.define("link", palette.link)?;
        b.define("link-hover", palette.link_hover)?;
        b.define("border", palette.border)?;
        b.define("divider", palette.divider)?;

        // Spacing scale
        b.define("spacing-xs", Length::px(4.0))?;
        b.define("spacing-sm", Length::px(8.0))?;
        b.define("spacing-md", Length::px(16.0))?;
        b.define("spacing-lg", Length::px(24.0))?;
        b.define("spacing-xl", Length::px(32.0))?;

        // Border radius
        b.define("radius-sm", Length::px(4.0))?;
        b.define("radius-md", Length::px(8.0))?;
        b.define("radius-lg", Length::px(12.0))?;
        b.define("radius-full", Length::px(9999.0))?;

        // Type scale
        b.define("font-size-xs", Length::px(12.0))?;
        b.define("font-size-sm", Length::px(14.0))?;
        b.define("font-size-md", Length::px(16.0))?;
        b.define("font-size-lg", Length::px(18.0))?;
        b.define("font-size-xl", Length::px(24.0))?;
        b.define("font-size-2xl", Length::px(32.0))?;
        b.define(
            "font-body",
            Literal::raw("'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif"),
        )?;
        b.define(
            "font-heading",
            Literal::raw("'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif"),
        )?;
        b.define("line-height-body", Literal::Number(1.5))?;
        b.define("line-height-heading", Literal::Number(1.2))?;

        // Banner
        b.define("banner-background", TokenValue::reference("brand"))?;
        b.define("banner-text", TokenValue::reference("text-inverse"))?;
        b.define("banner-accent", TokenValue::reference("accent"))?;

        // Navigation
        b.define("nav-background", TokenValue::reference("surface"))?;
        b.define("nav-link", TokenValue::reference("link"))?;
        b.define("nav-link-hover", TokenValue::reference("link-hover"))?;
        b.define("nav-border", TokenValue::reference("border"))?;

        // Footer
        b.define("footer-background", TokenValue::reference("surface"))?;
        b.define("footer-text", TokenValue::reference("text-muted"))?;
        b.define("footer-link", TokenValue::reference("link"))?;
        b.define("footer-divider", TokenValue::reference("divider"))?;

        // Inline lists
        b.define("list-marker", TokenValue::reference("accent"))?;
        b.define("list-gap", TokenValue::reference("spacing-sm"))?;

        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Literal;

    #[test]
    fn palette_tables_fully_resolve() {
        for palette in [
            ColorPalette::light(),
            ColorPalette::dark(),
            ColorPalette::high_contrast(),
        ] {
            let table = TokenTable::from_palette(&palette);
            for (name, _) in table.iter() {
                assert!(table.resolve(name).is_ok(), "token '{name}' must resolve");
            }
        }
    }

    #[test]
    fn chrome_tokens_alias_palette_colors() {
        let palette = ColorPalette::light();
        let table = TokenTable::from_palette(&palette);

        assert_eq!(
            table.resolve("banner-background").unwrap(),
            &Literal::Color(palette.brand)
        );
        assert_eq!(
            table.resolve("footer-text").unwrap(),
            &Literal::Color(palette.text_muted)
        );
        // list-gap chains through the spacing scale.
        assert_eq!(
            table.resolve("list-gap").unwrap(),
            &Literal::Length(Length::px(8.0))
        );
    }
}
