//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors a set of files
//! for changes using the `notify` crate, with debounced notifications.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};
use vrhome_common::ConfigError;

/// Quiet period after the last change before a reload is signalled.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

fn matches_any(files: &[PathBuf], changed: &Path) -> bool {
    files
        .iter()
        .any(|f| f.file_name().is_some() && f.file_name() == changed.file_name())
}

/// Wait until `quiet` passes with no further change events, restarting the
/// timer on every event. Returns `false` if the channel closed first.
pub(crate) async fn settle(rx: &mut mpsc::Receiver<()>, quiet: Duration) -> bool {
    let timer = tokio::time::sleep(quiet);
    tokio::pin!(timer);
    loop {
        tokio::select! {
            _ = &mut timer => return true,
            msg = rx.recv() => {
                if msg.is_none() {
                    return false;
                }
                timer.as_mut().reset(Instant::now() + quiet);
            }
        }
    }
}

/// Watches config-related files for changes and sends notifications.
pub struct ConfigWatcher {
    files: Vec<PathBuf>,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        Self::with_files(vec![path])
    }

    /// Create a watcher over several files; a change to any of them triggers a reload.
    pub fn with_files(files: Vec<PathBuf>) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Err(ConfigError::WatchError("no files to watch".into()));
        }
        for path in &files {
            if !path.exists() {
                warn!(
                    "{} does not exist yet, will watch for creation",
                    path.display()
                );
            }
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Directories that must be registered with `notify`, deduplicated.
    pub(crate) fn watch_dirs(&self) -> BTreeSet<PathBuf> {
        self.files
            .iter()
            .map(|p| match p.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            })
            .collect()
    }

    /// Whether an event path refers to one of the watched files.
    pub(crate) fn is_watched(&self, changed: &Path) -> bool {
        matches_any(&self.files, changed)
    }

    /// Watch the files for changes, sending a signal on the broadcast channel.
    ///
    /// Runs until the notify channel closes. Changes are debounced with
    /// [`DEBOUNCE`] so that editors doing an atomic save (write + rename)
    /// produce one reload.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);
        let files: Vec<PathBuf> = self.files.clone();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    if event.paths.iter().any(|p| matches_any(&files, p)) {
                        debug!("watched file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        for dir in self.watch_dirs() {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display()))
                })?;
            info!("watching {} for config changes", dir.display());
        }

        while notify_rx.recv().await.is_some() {
            if !settle(&mut notify_rx, DEBOUNCE).await {
                return Ok(());
            }

            info!("config changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
