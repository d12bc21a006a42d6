//! Token values: literals and alias references.

use crate::types::{Color, Length};

/// The value side of a token definition.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A terminal literal value.
    Literal(Literal),
    /// An alias of another token, stored without the `--` prefix.
    Reference(String),
}

impl TokenValue {
    /// Create a reference to another token.
    ///
    /// A leading `--` on the target name is accepted and stripped.
    pub fn reference(target: impl AsRef<str>) -> Self {
        let target = target.as_ref();
        Self::Reference(target.strip_prefix("--").unwrap_or(target).to_string())
    }

    /// Get the literal if this value is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Reference(_) => None,
        }
    }

    /// Get the alias target if this value is a reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(target) => Some(target),
            Self::Literal(_) => None,
        }
    }
}

impl From<Literal> for TokenValue {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Color> for TokenValue {
    fn from(value: Color) -> Self {
        Self::Literal(Literal::Color(value))
    }
}

impl From<Length> for TokenValue {
    fn from(value: Length) -> Self {
        Self::Literal(Literal::Length(value))
    }
}

/// A terminal literal value.
///
/// `Keyword` covers single-identifier values (`bold`, `center`, `flex`);
/// `Raw` carries anything this crate does not model as a typed value,
/// such as font stacks or multi-part shorthands, verbatim for the
/// rendering engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Color(Color),
    Length(Length),
    Number(f32),
    Keyword(String),
    Raw(String),
}

impl Literal {
    /// Get the color if this literal is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the length if this literal is one.
    pub fn as_length(&self) -> Option<Length> {
        match self {
            Self::Length(l) => Some(*l),
            _ => None,
        }
    }

    /// Create a keyword literal.
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword(value.into())
    }

    /// Create a raw passthrough literal.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }
}

impl From<Color> for Literal {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Length> for Literal {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Length(l) => write!(f, "{l}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Keyword(s) | Self::Raw(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_strips_prefix() {
        assert_eq!(
            TokenValue::reference("--brand"),
            TokenValue::Reference("brand".to_string())
        );
        assert_eq!(
            TokenValue::reference("brand"),
            TokenValue::Reference("brand".to_string())
        );
    }

    #[test]
    fn literal_display() {
        assert_eq!(Literal::from(Color::RED).to_string(), "#FF0000");
        assert_eq!(Literal::from(Length::px(8.0)).to_string(), "8px");
        assert_eq!(Literal::from(1.4f32).to_string(), "1.4");
        assert_eq!(Literal::keyword("bold").to_string(), "bold");
        assert_eq!(
            Literal::raw("'Inter', sans-serif").to_string(),
            "'Inter', sans-serif"
        );
    }
}
