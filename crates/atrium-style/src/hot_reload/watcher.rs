//! File watching for theme hot-reload.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::rules::Stylesheet;
use crate::{Error, Result};

/// Event indicating a theme file changed.
#[derive(Debug, Clone)]
pub struct ThemeChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was modified.
    Modified,
    /// File was created.
    Created,
    /// File was removed.
    Removed,
}

/// Watches theme declaration files for changes.
///
/// # Example
///
/// ```ignore
/// let mut watcher = ThemeWatcher::new()?;
/// watcher.watch("themes/site.css")?;
///
/// // In your event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply_changes(&mut stylesheet, &changes);
/// }
/// ```
pub struct ThemeWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched_paths: HashSet<PathBuf>,
}

impl ThemeWatcher {
    /// Create a new theme watcher.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched_paths: HashSet::new(),
        })
    }

    /// Start watching a theme file.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| Error::io(path.as_ref(), e))?;

        if !self.watched_paths.contains(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;

            self.watched_paths.insert(path.clone());
            tracing::info!("watching theme file: {}", path.display());
        }

        Ok(())
    }

    /// Stop watching a theme file.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = match path.as_ref().canonicalize() {
            Ok(p) => p,
            Err(_) => return Ok(()), // File doesn't exist, nothing to unwatch
        };

        if self.watched_paths.remove(&path) {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!("stopped watching theme file: {}", path.display());
        }

        Ok(())
    }

    /// Poll for theme file changes.
    ///
    /// Returns the changed files. Call this from your event loop.
    pub fn poll(&mut self) -> Vec<ThemeChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind == DebouncedEventKind::Any {
                            let kind = if event.path.exists() {
                                ChangeKind::Modified
                            } else {
                                ChangeKind::Removed
                            };

                            if self.watched_paths.contains(&event.path) {
                                changes.push(ThemeChangeEvent {
                                    path: event.path,
                                    kind,
                                });
                            }
                        }
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("file watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("file watcher disconnected");
                    break;
                }
            }
        }

        // The same file may have produced several events
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Apply changes by re-parsing the stylesheet.
    ///
    /// A file that fails to parse or validate leaves the previous
    /// stylesheet in place; a broken edit should not blank the site.
    pub fn apply_changes(&self, sheet: &mut Stylesheet, changes: &[ThemeChangeEvent]) {
        for change in changes {
            match change.kind {
                ChangeKind::Modified | ChangeKind::Created => {
                    match Stylesheet::from_file(&change.path) {
                        Ok(reloaded) => {
                            tracing::info!(
                                "reloaded theme {} ({} tokens, {} rules)",
                                change.path.display(),
                                reloaded.tokens().len(),
                                reloaded.len(),
                            );
                            *sheet = reloaded;
                        }
                        Err(e) => {
                            tracing::error!(
                                "failed to reload theme {}: {}",
                                change.path.display(),
                                e
                            );
                        }
                    }
                }
                ChangeKind::Removed => {
                    tracing::info!(
                        "theme file removed, keeping last loaded theme: {}",
                        change.path.display()
                    );
                }
            }
        }
    }

    /// Get the number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched_paths.len()
    }

    /// Get the watched paths.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched_paths.iter().map(|p| p.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    const THEME_CSS: &str = ":root { --brand: #274C77; } .banner { color: var(--brand); }";

    #[test]
    fn watcher_creation() {
        let watcher = ThemeWatcher::new();
        assert!(watcher.is_ok());
    }

    #[test]
    fn watch_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("site.css");
        fs::write(&file_path, THEME_CSS).unwrap();

        let mut watcher = ThemeWatcher::new().unwrap();
        let result = watcher.watch(&file_path);
        assert!(result.is_ok());
        assert_eq!(watcher.watched_count(), 1);

        // Watching the same path twice is a no-op.
        watcher.watch(&file_path).unwrap();
        assert_eq!(watcher.watched_count(), 1);
    }

    #[test]
    fn unwatch_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("site.css");
        fs::write(&file_path, THEME_CSS).unwrap();

        let mut watcher = ThemeWatcher::new().unwrap();
        watcher.watch(&file_path).unwrap();
        assert_eq!(watcher.watched_count(), 1);

        watcher.unwatch(&file_path).unwrap();
        assert_eq!(watcher.watched_count(), 0);
    }

    #[test]
    fn broken_edit_keeps_previous_sheet() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("site.css");
        fs::write(&file_path, THEME_CSS).unwrap();

        let watcher = ThemeWatcher::new().unwrap();
        let mut sheet = Stylesheet::from_file(&file_path).unwrap();

        // Duplicate token definition: reload must fail validation.
        fs::write(&file_path, ":root { --brand: #111111; --brand: #222222; }").unwrap();
        watcher.apply_changes(
            &mut sheet,
            &[ThemeChangeEvent {
                path: file_path.clone(),
                kind: ChangeKind::Modified,
            }],
        );

        assert!(sheet.tokens().contains("brand"));
        assert_eq!(sheet.len(), 1, "previous rules must survive a bad reload");
    }
}
