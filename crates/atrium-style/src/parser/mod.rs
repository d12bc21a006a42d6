//! Theme declaration file parsing.

mod css_parser;

pub use css_parser::{ParsedTheme, TokenDefinition, parse_theme};
