//! Substitution of token references with their terminal literals.
//!
//! The contract with the rendering engine is that every value it sees
//! is a literal: selectors and media conditions pass through verbatim,
//! but no `var()` survives. Substitution fails fast on the first
//! reference that does not resolve; a partially themed sheet is not a
//! useful outcome.

use std::fmt::Write as _;

use crate::rules::{DeclValue, Stylesheet};
use crate::tokens::{Literal, TokenTable};
use crate::Result;

/// A declaration whose value is guaranteed to be a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDeclaration {
    pub property: String,
    pub value: Literal,
}

/// A rule with every token reference substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub selector: String,
    pub media: Option<String>,
    pub declarations: Vec<ResolvedDeclaration>,
    pub order: u32,
}

/// A stylesheet ready for the rendering engine: literal values only.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSheet {
    rules: Vec<ResolvedRule>,
}

impl ResolvedSheet {
    /// Substitute using the stylesheet's own token table.
    pub fn resolve(sheet: &Stylesheet) -> Result<Self> {
        Self::resolve_with(sheet, sheet.tokens())
    }

    /// Substitute against an external table, e.g. a built-in theme's.
    pub fn resolve_with(sheet: &Stylesheet, tokens: &TokenTable) -> Result<Self> {
        let mut rules = Vec::with_capacity(sheet.len());
        let mut substituted = 0usize;

        for rule in sheet.iter() {
            let mut declarations = Vec::with_capacity(rule.declarations.len());
            for decl in &rule.declarations {
                let value = match &decl.value {
                    DeclValue::Var(name) => {
                        substituted += 1;
                        tokens.resolve(name)?.clone()
                    }
                    DeclValue::Literal(lit) => lit.clone(),
                };
                declarations.push(ResolvedDeclaration {
                    property: decl.property.clone(),
                    value,
                });
            }
            rules.push(ResolvedRule {
                selector: rule.selector.clone(),
                media: rule.media.clone(),
                declarations,
                order: rule.order,
            });
        }

        tracing::debug!(
            rules = rules.len(),
            substituted,
            "resolved stylesheet for hand-off"
        );

        Ok(Self { rules })
    }

    /// The resolved rules, in source order.
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serialize back to CSS text, references already substituted.
    ///
    /// Rules declared under a media condition are each emitted inside
    /// their own `@media` block, preserving source order.
    pub fn to_css(&self) -> String {
        let mut out = String::new();

        for rule in &self.rules {
            let indent = if rule.media.is_some() { "  " } else { "" };

            if let Some(condition) = &rule.media {
                let _ = writeln!(out, "@media {condition} {{");
            }
            let _ = writeln!(out, "{indent}{} {{", rule.selector);
            for decl in &rule.declarations {
                let _ = writeln!(out, "{indent}  {}: {};", decl.property, decl.value);
            }
            let _ = writeln!(out, "{indent}}}");
            if rule.media.is_some() {
                let _ = writeln!(out, "}}");
            }
            out.push('\n');
        }

        out
    }
}
