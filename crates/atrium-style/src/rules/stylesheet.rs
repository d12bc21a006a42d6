//! Stylesheet loading and the parsed document model.

use std::path::{Path, PathBuf};

use crate::parser;
use crate::rules::StyleRule;
use crate::tokens::{TokenTable, TokenTableBuilder};
use crate::{Error, Result};

/// A parsed theme declaration file: the token table it defines plus the
/// style rules that consume those tokens.
///
/// Construction is fail-fast: a duplicate token or a forward reference
/// in the source aborts the load with the offending token named, rather
/// than deferring the problem to render time.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    tokens: TokenTable,
    rules: Vec<StyleRule>,
    source_path: Option<PathBuf>,
}

impl Stylesheet {
    /// Load a stylesheet from a file.
    ///
    /// The source path is stored for hot-reload tracking.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut sheet = Self::from_css(&content)?;
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        let parsed = parser::parse_theme(css)?;

        let mut builder = TokenTableBuilder::new();
        for definition in parsed.definitions {
            builder.define(definition.name, definition.value)?;
        }

        tracing::debug!(
            tokens = builder.len(),
            rules = parsed.rules.len(),
            "parsed theme stylesheet"
        );

        Ok(Self {
            tokens: builder.build(),
            rules: parsed.rules,
            source_path: None,
        })
    }

    /// The token table defined by this stylesheet.
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Consume the stylesheet, keeping only its token table.
    pub fn into_tokens(self) -> TokenTable {
        self.tokens
    }

    /// The style rules, in source order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Source file path, if the stylesheet was loaded from disk.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Substitute every token reference with its terminal literal.
    pub fn resolve(&self) -> Result<crate::resolve::ResolvedSheet> {
        crate::resolve::ResolvedSheet::resolve(self)
    }
}
