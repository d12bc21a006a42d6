//! Theme file hot-reload support.
//!
//! Gated behind the `hot-reload` cargo feature.

mod watcher;

pub use watcher::{ChangeKind, ThemeChangeEvent, ThemeWatcher};
