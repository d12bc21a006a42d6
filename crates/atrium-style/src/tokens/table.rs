//! The validated token table and its builder.

use std::collections::{HashMap, HashSet};

use super::{Literal, TokenValue};
use crate::{Error, Result};

/// Builder for a [`TokenTable`].
///
/// Definitions are validated as they arrive: a name may only be defined
/// once, and a reference may only point at a name that is already
/// present. Together with [`build`](Self::build) freezing the table,
/// this keeps every alias chain acyclic and terminating in a literal.
#[derive(Debug, Clone, Default)]
pub struct TokenTableBuilder {
    entries: HashMap<String, TokenValue>,
    order: Vec<String>,
}

impl TokenTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a token.
    ///
    /// Fails with [`Error::DuplicateToken`] if `name` is already
    /// defined, and with [`Error::UnknownReference`] if the value is an
    /// alias of a name that has not been defined yet. Leading `--`
    /// prefixes on names are stripped.
    pub fn define(&mut self, name: impl AsRef<str>, value: impl Into<TokenValue>) -> Result<()> {
        let name = strip_prefix(name.as_ref()).to_string();
        let value = value.into();

        if self.entries.contains_key(&name) {
            return Err(Error::duplicate_token(name));
        }
        if let TokenValue::Reference(target) = &value
            && !self.entries.contains_key(target)
        {
            return Err(Error::unknown_reference(name, target.clone()));
        }

        self.order.push(name.clone());
        self.entries.insert(name, value);
        Ok(())
    }

    /// Number of definitions so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no token has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Freeze the definitions into an immutable table.
    pub fn build(self) -> TokenTable {
        TokenTable {
            entries: self.entries,
            order: self.order,
        }
    }
}

/// An immutable mapping from token names to values.
///
/// Built once at load time through [`TokenTableBuilder`] and read-only
/// afterwards, so any number of threads may resolve from it without
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    entries: HashMap<String, TokenValue>,
    order: Vec<String>,
}

impl TokenTable {
    /// Start building a table.
    pub fn builder() -> TokenTableBuilder {
        TokenTableBuilder::new()
    }

    /// Resolve a token name to its terminal literal value.
    ///
    /// Alias chains are followed iteratively. Fails with
    /// [`Error::UnknownToken`] if `name` (or any link of the chain) is
    /// absent, and with [`Error::Cycle`] if the chain revisits a token.
    /// The cycle guard is unreachable for tables built through
    /// [`TokenTableBuilder`], which rejects forward references, but
    /// resolution must not trust its input enough to loop forever.
    pub fn resolve(&self, name: &str) -> Result<&Literal> {
        let mut current = strip_prefix(name);
        let mut visited: HashSet<&str> = HashSet::new();

        loop {
            if !visited.insert(current) {
                return Err(Error::cycle(strip_prefix(name)));
            }
            match self.entries.get(current) {
                None => return Err(Error::unknown_token(current)),
                Some(TokenValue::Literal(lit)) => return Ok(lit),
                Some(TokenValue::Reference(target)) => current = target,
            }
        }
    }

    /// Get a token's declared value, without following aliases.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries.get(strip_prefix(name))
    }

    /// Check if a token is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(strip_prefix(name))
    }

    /// Iterate over tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), &self.entries[name]))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn strip_prefix(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn define_and_resolve_literal() {
        let mut builder = TokenTable::builder();
        builder.define("brand", Color::from_hex("#007AFF").unwrap()).unwrap();
        let table = builder.build();

        assert_eq!(
            table.resolve("brand").unwrap().as_color(),
            Color::from_hex("#007AFF")
        );
        // The `--` prefix is accepted on lookup too.
        assert!(table.resolve("--brand").is_ok());
    }

    #[test]
    fn alias_chain_resolves_to_terminal_literal() {
        let mut builder = TokenTable::builder();
        builder
            .define("a", Literal::raw("rgb(1,1,1)"))
            .unwrap();
        builder.define("b", TokenValue::reference("a")).unwrap();
        builder.define("c", TokenValue::reference("b")).unwrap();
        let table = builder.build();

        assert_eq!(table.resolve("c").unwrap(), &Literal::raw("rgb(1,1,1)"));
    }

    #[test]
    fn forward_reference_is_rejected() {
        let mut builder = TokenTable::builder();
        let err = builder
            .define("b", TokenValue::reference("c"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownReference { name, target }
            if name == "b" && target == "c"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut builder = TokenTable::builder();
        builder.define("a", Literal::keyword("bold")).unwrap();
        let err = builder.define("--a", Literal::keyword("normal")).unwrap_err();
        assert!(matches!(err, Error::DuplicateToken { name } if name == "a"));
    }

    #[test]
    fn unknown_token_on_resolve() {
        let table = TokenTable::builder().build();
        let err = table.resolve("missing").unwrap_err();
        assert!(matches!(err, Error::UnknownToken { name } if name == "missing"));
    }

    #[test]
    fn cycle_guard_terminates() {
        // The builder cannot produce a cycle; construct one directly to
        // prove resolution still terminates with an error.
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), TokenValue::Reference("b".to_string()));
        entries.insert("b".to_string(), TokenValue::Reference("a".to_string()));
        let table = TokenTable {
            entries,
            order: vec!["a".to_string(), "b".to_string()],
        };

        let err = table.resolve("a").unwrap_err();
        assert!(matches!(err, Error::Cycle { name } if name == "a"));
    }

    #[test]
    fn every_token_in_a_valid_table_resolves() {
        let mut builder = TokenTable::builder();
        builder.define("base", Color::BLACK).unwrap();
        builder.define("text", TokenValue::reference("base")).unwrap();
        builder.define("heading", TokenValue::reference("text")).unwrap();
        builder.define("gap", crate::types::Length::px(16.0)).unwrap();
        let table = builder.build();

        for (name, _) in table.iter() {
            assert!(table.resolve(name).is_ok(), "token '{name}' must resolve");
        }
    }

    #[test]
    fn iteration_preserves_declaration_order() {
        let mut builder = TokenTable::builder();
        builder.define("z", Literal::Number(1.0)).unwrap();
        builder.define("a", Literal::Number(2.0)).unwrap();
        builder.define("m", TokenValue::reference("z")).unwrap();
        let table = builder.build();

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}
