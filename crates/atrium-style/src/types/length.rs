//! CSS-like length values.

/// A length value with its declared unit.
///
/// Units are carried through unchanged; converting relative units to
/// device pixels requires font-size and viewport context that only the
/// rendering engine has.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Relative to the current font size.
    Em(f32),
    /// Relative to the root font size.
    Rem(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    Auto,
    /// Zero length.
    #[default]
    Zero,
}

impl Length {
    /// Create a pixel length.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create an em length.
    #[inline]
    pub const fn em(value: f32) -> Self {
        Self::Em(value)
    }

    /// Create a rem length.
    #[inline]
    pub const fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    /// Create a percentage length.
    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Whether this length is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Zero => true,
            Self::Px(v) | Self::Em(v) | Self::Rem(v) | Self::Percent(v) => *v == 0.0,
            Self::Auto => false,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Em(v) => write!(f, "{v}em"),
            Self::Rem(v) => write!(f, "{v}rem"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Auto => f.write_str("auto"),
            Self::Zero => f.write_str("0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_unit() {
        assert_eq!(Length::px(16.0).to_string(), "16px");
        assert_eq!(Length::em(1.5).to_string(), "1.5em");
        assert_eq!(Length::rem(2.0).to_string(), "2rem");
        assert_eq!(Length::percent(50.0).to_string(), "50%");
        assert_eq!(Length::Auto.to_string(), "auto");
        assert_eq!(Length::Zero.to_string(), "0");
    }

    #[test]
    fn zero_detection() {
        assert!(Length::Zero.is_zero());
        assert!(Length::px(0.0).is_zero());
        assert!(!Length::px(1.0).is_zero());
        assert!(!Length::Auto.is_zero());
    }
}
