//! RGBA color values.

/// An RGBA color with components in the nominal 0.0-1.0 range.
///
/// Components are stored exactly as declared and are never clamped:
/// a channel written as `rgb(265, 100, 51)` keeps its out-of-range
/// value. Gamut handling belongs to the rendering engine that consumes
/// the theme, not to this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`, with or
    /// without the leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        let (r, g, b, a) = match hex.len() {
            3 | 4 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|n| n << 4 | n)
                };
                (
                    nibble(0)?,
                    nibble(1)?,
                    nibble(2)?,
                    if hex.len() == 4 { nibble(3)? } else { 255 },
                )
            }
            6 | 8 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                (
                    byte(0)?,
                    byte(2)?,
                    byte(4)?,
                    if hex.len() == 8 { byte(6)? } else { 255 },
                )
            }
            _ => return None,
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Serialize to CSS notation.
    ///
    /// Opaque in-gamut colors serialize as `#RRGGBB`; anything else
    /// falls back to `rgb()`/`rgba()` so out-of-range channels survive
    /// a round trip.
    pub fn to_css(&self) -> String {
        let r = self.r * 255.0;
        let g = self.g * 255.0;
        let b = self.b * 255.0;
        let in_gamut = |v: f32| (0.0..=255.0).contains(&v);

        if self.a >= 1.0 && in_gamut(r) && in_gamut(g) && in_gamut(b) {
            format!(
                "#{:02X}{:02X}{:02X}",
                r.round() as u8,
                g.round() as u8,
                b.round() as u8
            )
        } else if self.a >= 1.0 {
            format!(
                "rgb({}, {}, {})",
                fmt_channel(r),
                fmt_channel(g),
                fmt_channel(b)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                fmt_channel(r),
                fmt_channel(g),
                fmt_channel(b),
                self.a
            )
        }
    }
}

/// Format a channel value, dropping the fraction when it is an integer.
fn fmt_channel(v: f32) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-3 {
        format!("{}", rounded as i64)
    } else {
        format!("{v}")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_long_form() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::RED);

        let c = Color::from_hex("00FF0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn from_hex_short_form() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#f00").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("#0f08").unwrap().a, 136.0 / 255.0);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn to_css_round_trips_hex() {
        let c = Color::from_hex("#1A2B3C").unwrap();
        assert_eq!(c.to_css(), "#1A2B3C");
    }

    #[test]
    fn out_of_gamut_channel_survives() {
        // Channel beyond 255 stays as declared.
        let c = Color::from_rgb(265.0 / 255.0, 100.0 / 255.0, 51.0 / 255.0);
        assert_eq!(c.to_css(), "rgb(265, 100, 51)");
    }

    #[test]
    fn translucent_serializes_as_rgba() {
        let c = Color::new(1.0, 0.0, 0.0, 0.5);
        assert_eq!(c.to_css(), "rgba(255, 0, 0, 0.5)");
    }
}
