//! Core reload manager implementation.
//!
//! Contains the [`ReloadManager`] struct and its methods for loading,
//! watching, and reloading settings from disk.

use crate::settings::Settings;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};
use vrhome_common::ConfigError;

/// Manages live config reloading.
///
/// Watches the config file (plus a custom theme file, if one is selected)
/// and publishes new [`Settings`] via a [`tokio::sync::watch`] channel.
/// A reload that fails to parse or validate is logged and dropped; the
/// previous settings stay current.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load the initial settings from the given path and start watching for changes.
    ///
    /// Returns the initial settings and a watch receiver that will receive
    /// updated settings whenever a watched file changes on disk. Must be
    /// called from within a tokio runtime.
    pub fn start(config_path: PathBuf) -> (Settings, watch::Receiver<Settings>) {
        let initial = Settings::load_or_default(&config_path);
        let (settings_tx, settings_rx) = watch::channel(initial.clone());

        let files = initial.watched_files(&config_path);
        tokio::spawn(async move {
            let manager = ReloadManager::new(config_path);
            manager.run_watch_loop(files, settings_tx).await;
        });

        (initial, settings_rx)
    }

    async fn run_watch_loop(&self, files: Vec<PathBuf>, settings_tx: watch::Sender<Settings>) {
        let watcher = match ConfigWatcher::with_files(files) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => match self.reload() {
                    Ok(settings) => {
                        if settings_tx.send(settings).is_err() {
                            info!("all settings receivers dropped, stopping reload manager");
                            break;
                        }
                    }
                    Err(e) => warn!("config reload failed: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Re-read settings from disk, applying theme and validation.
    pub fn reload(&self) -> Result<Settings, ConfigError> {
        info!("reloading config from {}", self.config_path.display());
        Settings::load(&self.config_path)
    }
}
