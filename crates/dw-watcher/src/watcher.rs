//! The directory watch loop.
//!
//! This module provides [`DirectoryWatcher`], which owns one watch of one
//! directory: a `notify` subscription feeding a channel, drained by a
//! poll/sleep loop on a blocking task.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │ notify backend (RecommendedWatcher)                            │
//! │   raw events ──► std::sync::mpsc channel                       │
//! └──────────────────────────────│─────────────────────────────────┘
//!                                │ try_recv (drain until empty)
//!                                ▼
//! ┌────────────────────────────────────────────────────────────────┐
//! │ Blocking task (spawn_blocking)                                 │
//! │   loop: check cancel ─► drain ─► classify ─► dedupe ─► sink    │
//! │         │                        └─► extract (create/modify)   │
//! │         └─ sleep poll_interval                                 │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The subscription handle lives inside the blocking task, so it is released
//! exactly when the loop exits. The only state shared with the controlling
//! caller is the cancellation token.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use dw_core::{fx_hash_set, ChangeKind, FxHashSet, WatchConfig};

use crate::classify::classify;
use crate::error::WatchError;
use crate::events::ChangeEvent;
use crate::extract::extract;
use crate::sink::EventSink;

/// One running watch of one directory.
///
/// # Lifecycle
///
/// 1. **Spawn**: [`DirectoryWatcher::spawn`] validates the target, registers
///    the subscription, launches the loop on a blocking task, and returns
///    immediately. Nothing that happens inside the loop afterwards
///    propagates back to the caller.
///
/// 2. **Running**: the loop drains all pending notifications, reports them
///    through the sink, then sleeps one poll interval. The stop request is
///    checked once per iteration boundary, so worst-case stop latency is
///    one interval.
///
/// 3. **Stop**: [`request_stop`](Self::request_stop) is fire-and-forget;
///    [`shutdown`](Self::shutdown) additionally awaits loop exit with a
///    bounded timeout.
pub struct DirectoryWatcher {
    /// Cooperative stop signal shared with the loop.
    cancel: CancellationToken,

    /// Handle to the blocking loop task, taken during shutdown.
    task_handle: Option<JoinHandle<Result<(), WatchError>>>,

    /// The canonicalized watch target.
    watch_path: Utf8PathBuf,
}

impl std::fmt::Debug for DirectoryWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryWatcher")
            .field("watch_path", &self.watch_path)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl DirectoryWatcher {
    /// Starts watching `path` for create/modify/delete events.
    ///
    /// Validates synchronously that the target exists and is a directory,
    /// registers a non-recursive `notify` subscription, then launches the
    /// drain loop on a blocking task and returns. The caller gets no stream
    /// of results back; observable output flows through `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::PathNotFound`] or [`WatchError::NotADirectory`]
    /// when the target is unusable, and [`WatchError::Notify`] when the
    /// subscription cannot be registered. All of these occur before the
    /// background task starts.
    pub fn spawn<S: EventSink>(
        path: &Utf8Path,
        config: &WatchConfig,
        sink: S,
    ) -> Result<Self, WatchError> {
        if !path.exists() {
            return Err(WatchError::path_not_found(path));
        }
        if !path.is_dir() {
            return Err(WatchError::not_a_directory(path));
        }

        let watch_path = path.canonicalize_utf8()?;

        // Raw notifications flow through a std channel; the loop drains it
        // non-blockingly once per poll interval.
        let (raw_tx, raw_rx) = std::sync::mpsc::channel();
        let mut backend = notify::recommended_watcher(raw_tx)?;
        backend.watch(watch_path.as_std_path(), RecursiveMode::NonRecursive)?;

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let task_path = watch_path.clone();
        let poll_interval = Duration::from_millis(config.poll_interval_ms);

        let task_handle = tokio::task::spawn_blocking(move || {
            run_watch_loop(task_path, backend, raw_rx, task_cancel, poll_interval, sink)
        });

        Ok(Self {
            cancel,
            task_handle: Some(task_handle),
            watch_path,
        })
    }

    /// Returns the canonicalized path being watched.
    #[must_use]
    pub fn watch_path(&self) -> &Utf8Path {
        &self.watch_path
    }

    /// Returns `true` while the loop task is alive and no stop has been
    /// requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
            && self.task_handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Requests the loop to stop; never blocks.
    ///
    /// The loop observes the request at its next iteration boundary, so it
    /// exits within one poll interval.
    pub fn request_stop(&self) {
        self.cancel.cancel();
    }

    /// Stops the loop and waits for it to exit, bounded by `timeout`.
    ///
    /// On timeout the task is detached rather than killed; the stop request
    /// is already set, so the loop still exits within one poll interval and
    /// releases its subscription then.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::TaskFailed`] if the loop task panicked, or any
    /// error the loop itself returned.
    pub async fn shutdown(mut self, timeout: Duration) -> Result<(), WatchError> {
        self.cancel.cancel();

        if let Some(handle) = self.task_handle.take() {
            match tokio::time::timeout(timeout, handle).await {
                Ok(Ok(result)) => result?,
                Ok(Err(_join_error)) => return Err(WatchError::TaskFailed),
                Err(_elapsed) => {
                    tracing::warn!(
                        path = %self.watch_path,
                        "Watch loop did not stop within the timeout; detaching"
                    );
                }
            }
        }

        Ok(())
    }
}

impl Drop for DirectoryWatcher {
    fn drop(&mut self) {
        // Cooperative only; Drop is sync, so the loop winds down on its own
        // within one poll interval.
        self.cancel.cancel();
    }
}

/// Runs the drain/sleep cycle until stopped.
///
/// Owns the `notify` backend so the subscription is released when this
/// function returns. A disconnected event channel (the backend died) ends
/// the loop cleanly, the same as an explicit stop.
fn run_watch_loop<S: EventSink>(
    path: Utf8PathBuf,
    backend: RecommendedWatcher,
    raw_rx: Receiver<notify::Result<notify::Event>>,
    cancel: CancellationToken,
    poll_interval: Duration,
    sink: S,
) -> Result<(), WatchError> {
    tracing::info!(path = %path, "Directory watch started");

    loop {
        if cancel.is_cancelled() {
            break;
        }
        if !drain_pending(&path, &raw_rx, &sink) {
            break;
        }
        std::thread::sleep(poll_interval);
    }

    drop(backend);
    tracing::info!(path = %path, "Directory watch stopped");
    Ok(())
}

/// Drains every currently pending notification without blocking.
///
/// Duplicate `(kind, file_name)` pairs within a single drain are suppressed;
/// backends frequently deliver bursts of identical signals for one logical
/// change. Returns `false` when the channel has disconnected and the loop
/// should exit.
fn drain_pending<S: EventSink>(
    dir: &Utf8Path,
    raw_rx: &Receiver<notify::Result<notify::Event>>,
    sink: &S,
) -> bool {
    let mut seen: FxHashSet<(ChangeKind, String)> = fx_hash_set();

    loop {
        match raw_rx.try_recv() {
            Ok(Ok(raw)) => {
                let kind = classify(&raw.kind);
                for path in &raw.paths {
                    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                        tracing::warn!(
                            path = %path.display(),
                            "Skipping notification with non-UTF-8 entry name"
                        );
                        continue;
                    };

                    if !seen.insert((kind, file_name.to_owned())) {
                        continue;
                    }

                    handle_event(dir, ChangeEvent::new(kind, file_name), sink);
                }
            }
            Ok(Err(error)) => {
                tracing::warn!(error = %error, "Watch backend error");
            }
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => {
                tracing::debug!("Event channel closed, stopping watch loop");
                return false;
            }
        }
    }
}

/// Reports one classified event, running extraction where warranted.
///
/// Extraction failures are reported and swallowed; a vanished or unreadable
/// file must never take the loop down.
fn handle_event<S: EventSink>(dir: &Utf8Path, event: ChangeEvent, sink: &S) {
    sink.change(&event);

    if !event.kind.triggers_extraction() {
        return;
    }

    match extract(&dir.join(&event.file_name)) {
        Ok(rendition) => sink.rendition(&rendition),
        Err(error) => sink.read_failed(&event.file_name, &error),
    }
}
