//! Single style rule definition.

use crate::tokens::Literal;

/// A style rule mapping a selector to a list of declarations.
///
/// The selector (and the optional media condition) are carried as
/// opaque strings: matching them against a document and deciding which
/// rule wins is the rendering engine's job. This crate only guarantees
/// that by the time a rule reaches the engine, every declaration value
/// is a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The selector text, verbatim from the source.
    pub selector: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
    /// Media-query condition the rule was declared under, verbatim.
    pub media: Option<String>,
    /// Source order (for stable hand-off to the engine).
    pub order: u32,
}

impl StyleRule {
    /// Create a new rule.
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>, order: u32) -> Self {
        Self {
            selector: selector.into(),
            declarations,
            media: None,
            order,
        }
    }

    /// Attach a media condition.
    pub fn with_media(mut self, condition: impl Into<String>) -> Self {
        self.media = Some(condition.into());
        self
    }

    /// Whether the rule only applies under a media condition.
    pub fn is_responsive(&self) -> bool {
        self.media.is_some()
    }

    /// Iterate over the token names this rule references.
    pub fn referenced_tokens(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().filter_map(|d| d.value.as_var())
    }
}

/// One `property: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: DeclValue,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: DeclValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

/// A declaration value: either a token reference or a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclValue {
    /// A `var(--name)` reference, stored without the `--` prefix.
    Var(String),
    /// A literal value.
    Literal(Literal),
}

impl DeclValue {
    /// Create a token reference, stripping a leading `--` if present.
    pub fn var(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self::Var(name.strip_prefix("--").unwrap_or(name).to_string())
    }

    /// Get the referenced token name, if this is a reference.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            Self::Literal(_) => None,
        }
    }

    /// Get the literal, if this is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Var(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Length;

    #[test]
    fn rule_tracks_source_order_and_media() {
        let rule = StyleRule::new(".banner", vec![], 3).with_media("(max-width: 600px)");
        assert_eq!(rule.order, 3);
        assert!(rule.is_responsive());
        assert_eq!(rule.media.as_deref(), Some("(max-width: 600px)"));
    }

    #[test]
    fn referenced_tokens_skips_literals() {
        let rule = StyleRule::new(
            "nav a",
            vec![
                Declaration::new("color", DeclValue::var("--nav-link")),
                Declaration::new("padding", DeclValue::Literal(Length::px(8.0).into())),
                Declaration::new("background-color", DeclValue::var("nav-background")),
            ],
            0,
        );

        let refs: Vec<&str> = rule.referenced_tokens().collect();
        assert_eq!(refs, ["nav-link", "nav-background"]);
    }
}
