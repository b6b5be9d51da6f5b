//! The watch session manager.
//!
//! [`WatchSession`] is the control surface the shell talks to: it owns the
//! reference to the current [`DirectoryWatcher`] (or none), starts watches,
//! and stops them. At most one watch is active per session; starting a new
//! one supersedes the previous target after a bounded stop-and-wait, so the
//! old subscription is released before the new one is installed.

use std::sync::Arc;
use std::time::Duration;

use camino::Utf8Path;

use dw_core::WatchConfig;

use crate::error::WatchError;
use crate::sink::{EventSink, LogSink};
use crate::watcher::DirectoryWatcher;

/// Manages at most one active directory watch.
///
/// The session is the seam between the request shell and the watch loop: the
/// shell validates its own inputs (a non-blank path string) and forwards
/// here; the session validates what the loop needs (existence,
/// directory-ness, via [`DirectoryWatcher::spawn`]).
///
/// # Replacement policy
///
/// Overlapping starts supersede: the previous loop is stopped and awaited,
/// bounded by [`WatchConfig::stop_timeout_ms`], before the new watch is
/// installed. Last one wins.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use dw_core::WatchConfig;
/// use dw_watcher::WatchSession;
///
/// # async fn example() -> Result<(), dw_watcher::WatchError> {
/// let mut session = WatchSession::new(WatchConfig::default());
/// session.start_watching(Utf8Path::new("/srv/drop")).await?;
/// assert!(session.is_watching());
///
/// session.stop_watching().await?;
/// assert!(!session.is_watching());
/// # Ok(())
/// # }
/// ```
pub struct WatchSession {
    /// Watch loop configuration applied to every watch this session starts.
    config: WatchConfig,

    /// Sink handed to each spawned loop.
    sink: Arc<dyn EventSink>,

    /// The current watch, if any.
    current: Option<DirectoryWatcher>,
}

impl std::fmt::Debug for WatchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSession")
            .field("config", &self.config)
            .field("watch_path", &self.watch_path())
            .finish_non_exhaustive()
    }
}

impl WatchSession {
    /// Creates a session that reports through the default [`LogSink`].
    #[must_use]
    pub fn new(config: WatchConfig) -> Self {
        Self::with_sink(config, Arc::new(LogSink))
    }

    /// Creates a session with an injected sink.
    ///
    /// The sink is shared across every watch the session starts, including
    /// replacements.
    #[must_use]
    pub fn with_sink(config: WatchConfig, sink: Arc<dyn EventSink>) -> Self {
        Self {
            config,
            sink,
            current: None,
        }
    }

    /// Starts watching `path`, superseding any active watch.
    ///
    /// An active previous watch is stopped and awaited first (bounded by the
    /// configured stop timeout) so its subscription is released before the
    /// replacement is installed. If spawning the new watch fails, the
    /// previous one is already gone and the session is left idle.
    ///
    /// # Errors
    ///
    /// Returns the [`WatchError`] from [`DirectoryWatcher::spawn`] when the
    /// target is unusable.
    pub async fn start_watching(&mut self, path: &Utf8Path) -> Result<(), WatchError> {
        if let Some(previous) = self.current.take() {
            let old_path = previous.watch_path().to_owned();
            if let Err(error) = previous.shutdown(self.stop_timeout()).await {
                tracing::warn!(path = %old_path, error = %error, "Previous watch did not stop cleanly");
            } else {
                tracing::info!(path = %old_path, "Superseded previous watch");
            }
        }

        let watcher = DirectoryWatcher::spawn(path, &self.config, Arc::clone(&self.sink))?;
        self.current = Some(watcher);
        Ok(())
    }

    /// Stops the active watch, if any, waiting for the loop to exit.
    ///
    /// # Errors
    ///
    /// Returns any error the loop task reported on shutdown.
    pub async fn stop_watching(&mut self) -> Result<(), WatchError> {
        if let Some(watcher) = self.current.take() {
            watcher.shutdown(self.stop_timeout()).await?;
        }
        Ok(())
    }

    /// Signals the active watch to stop without waiting.
    ///
    /// The loop exits within one poll interval. The session still considers
    /// the watch current until [`stop_watching`](Self::stop_watching) or a
    /// replacing [`start_watching`](Self::start_watching) reaps it.
    pub fn request_stop(&self) {
        if let Some(watcher) = &self.current {
            watcher.request_stop();
        }
    }

    /// Returns `true` while a watch loop is installed and running.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.current.as_ref().is_some_and(DirectoryWatcher::is_running)
    }

    /// Returns the current watch target, if any.
    #[must_use]
    pub fn watch_path(&self) -> Option<&Utf8Path> {
        self.current.as_ref().map(DirectoryWatcher::watch_path)
    }

    fn stop_timeout(&self) -> Duration {
        Duration::from_millis(self.config.stop_timeout_ms)
    }
}
