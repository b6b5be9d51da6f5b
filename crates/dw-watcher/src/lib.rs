//! Directory watch engine with classification and content extraction.
//!
//! This crate implements the core of dirwatch: watch one directory for
//! create/modify/delete events, classify each raw notification, debounce
//! duplicate signals, and for creations and modifications emit a
//! format-tagged rendition of the file's content.
//!
//! # Overview
//!
//! - [`classify`] maps raw `notify` event kinds onto the total
//!   [`ChangeKind`](dw_core::ChangeKind) vocabulary.
//! - [`extract`] produces a [`FileRendition`] from a file path based on the
//!   closed extension table in [`dw_core::FileFormat`].
//! - [`DirectoryWatcher`] owns one watch: a non-recursive `notify`
//!   subscription drained by a poll/sleep loop on a blocking task.
//! - [`WatchSession`] is the control surface: at most one active watch,
//!   replaceable, with bounded-wait supersession.
//! - [`EventSink`] decouples the loop from its output; [`LogSink`] emits the
//!   human-readable log lines in production.
//!
//! # Usage
//!
//! ```no_run
//! use camino::Utf8Path;
//! use dw_core::WatchConfig;
//! use dw_watcher::WatchSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dw_watcher::WatchError> {
//!     let mut session = WatchSession::new(WatchConfig::default());
//!     session.start_watching(Utf8Path::new("/srv/drop")).await?;
//!
//!     // ... the loop reports events through the sink until stopped ...
//!
//!     session.stop_watching().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency model
//!
//! One blocking worker per active watch. The drain is non-blocking
//! (`try_recv` until empty), the sleep is a plain timed suspension, and the
//! stop signal is a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! checked once per iteration boundary — worst-case stop latency is one poll
//! interval. Nothing that happens inside a running loop propagates to the
//! caller that started it; per-file read failures are reported through the
//! sink and the loop continues.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod events;
pub mod extract;
pub mod session;
pub mod sink;
pub mod watcher;

// Re-export the classifier
pub use classify::classify;

// Re-export error types
pub use error::WatchError;

// Re-export event types
pub use events::ChangeEvent;

// Re-export extraction types
pub use extract::{extract, FileRendition, INVALID_FILE, UNSUPPORTED_FORMAT};

// Re-export session types
pub use session::WatchSession;

// Re-export sink types
pub use sink::{EventSink, LogSink};

// Re-export watcher types
pub use watcher::DirectoryWatcher;
