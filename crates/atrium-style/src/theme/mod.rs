//! Built-in themes and their token tables.

mod builtin;
mod palette;
mod tokens;

pub use builtin::{Theme, ThemeMode};
pub use palette::ColorPalette;
