//! Design-token resolution and CSS-style theming for Atrium.
//!
//! This crate loads a theme declaration file, containing design tokens
//! (custom properties) and the style rules for a site's chrome, into a
//! validated, immutable token table, and substitutes `var()` references
//! with their terminal literal values. What it hands off is a
//! stylesheet the rendering engine can apply without ever seeing a
//! symbolic name:
//!
//! - **Tokens**: named design values with alias indirection, validated
//!   at load time (duplicates and forward references are rejected)
//! - **Stylesheets**: selectors and `@media` conditions carried
//!   verbatim; matching and cascading stay with the rendering engine
//! - **Themes**: built-in light / dark / high-contrast token tables
//! - **Hot Reload**: re-parse theme files on change during development
//!
//! # Example
//!
//! ```
//! use atrium_style::prelude::*;
//!
//! let css = r#"
//!     :root {
//!         --brand: #274C77;
//!         --banner-background: var(--brand);
//!     }
//!     .banner { background-color: var(--banner-background); }
//! "#;
//!
//! let sheet = Stylesheet::from_css(css)?;
//! let resolved = ResolvedSheet::resolve(&sheet)?;
//!
//! assert_eq!(
//!     resolved.rules()[0].declarations[0].value.to_string(),
//!     "#274C77",
//! );
//! # Ok::<(), atrium_style::Error>(())
//! ```

pub mod parser;
pub mod resolve;
pub mod rules;
pub mod theme;
pub mod tokens;
pub mod types;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::{ResolvedDeclaration, ResolvedRule, ResolvedSheet};
    pub use crate::rules::{DeclValue, Declaration, StyleRule, Stylesheet};
    pub use crate::theme::{ColorPalette, Theme, ThemeMode};
    pub use crate::tokens::{Literal, TokenTable, TokenTableBuilder, TokenValue};
    pub use crate::types::{Color, Length};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::ThemeWatcher;
}
