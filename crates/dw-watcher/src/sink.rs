//! Event reporting for the watch loop.
//!
//! The loop never prints directly; everything it observes goes through an
//! injected [`EventSink`]. Production code uses [`LogSink`], which emits the
//! human-readable lines via `tracing`; tests inject channel-backed sinks so
//! loop behavior is observable without capturing process output.

use std::sync::Arc;

use crate::events::ChangeEvent;
use crate::extract::FileRendition;

/// Receiver for everything the watch loop observes.
///
/// Implementations must be shareable across successive loops (the session
/// manager hands one sink to each watch it starts) and usable from the
/// blocking watcher thread.
///
/// # Examples
///
/// ```
/// use dw_watcher::{ChangeEvent, EventSink, FileRendition};
///
/// struct CountingSink(std::sync::atomic::AtomicUsize);
///
/// impl EventSink for CountingSink {
///     fn change(&self, _event: &ChangeEvent) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
///     fn rendition(&self, _rendition: &FileRendition) {}
///     fn read_failed(&self, _file_name: &str, _error: &std::io::Error) {}
/// }
/// ```
pub trait EventSink: Send + Sync + 'static {
    /// Called once per classified change event, including unknown kinds.
    fn change(&self, event: &ChangeEvent);

    /// Called with the extraction result for create/modify events.
    fn rendition(&self, rendition: &FileRendition);

    /// Called when extraction failed for a create/modify event.
    ///
    /// Files are often transient; this is the expected steady-state failure
    /// mode and never stops the loop.
    fn read_failed(&self, file_name: &str, error: &std::io::Error);
}

/// The production sink: emits the watch log lines via `tracing`.
///
/// One line per event (`{kind}. File affected: {file_name}`), the rendition
/// content for create/modify, and a warn-level line when a file could not be
/// read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn change(&self, event: &ChangeEvent) {
        tracing::info!("{}. File affected: {}", event.kind, event.file_name);
    }

    fn rendition(&self, rendition: &FileRendition) {
        tracing::info!("{}", rendition.content);
    }

    fn read_failed(&self, file_name: &str, error: &std::io::Error) {
        tracing::warn!(error = %error, "Failed to read file: {file_name}");
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn change(&self, event: &ChangeEvent) {
        (**self).change(event);
    }

    fn rendition(&self, rendition: &FileRendition) {
        (**self).rendition(rendition);
    }

    fn read_failed(&self, file_name: &str, error: &std::io::Error) {
        (**self).read_failed(file_name, error);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn change(&self, event: &ChangeEvent) {
        (**self).change(event);
    }

    fn rendition(&self, rendition: &FileRendition) {
        (**self).rendition(rendition);
    }

    fn read_failed(&self, file_name: &str, error: &std::io::Error) {
        (**self).read_failed(file_name, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dw_core::ChangeKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSink {
        changes: AtomicUsize,
        renditions: AtomicUsize,
        failures: AtomicUsize,
    }

    impl EventSink for CountingSink {
        fn change(&self, _event: &ChangeEvent) {
            self.changes.fetch_add(1, Ordering::Relaxed);
        }

        fn rendition(&self, _rendition: &FileRendition) {
            self.renditions.fetch_add(1, Ordering::Relaxed);
        }

        fn read_failed(&self, _file_name: &str, _error: &std::io::Error) {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_arc_sink_forwards() {
        let sink = Arc::new(CountingSink::default());

        let arc: Arc<CountingSink> = Arc::clone(&sink);
        arc.change(&ChangeEvent::new(ChangeKind::Created, "a.txt"));
        arc.rendition(&FileRendition::new("a.txt", "Text File Content:\nhi"));
        arc.read_failed(
            "b.txt",
            &std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );

        assert_eq!(sink.changes.load(Ordering::Relaxed), 1);
        assert_eq!(sink.renditions.load(Ordering::Relaxed), 1);
        assert_eq!(sink.failures.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_boxed_dyn_sink_forwards() {
        let boxed: Box<dyn EventSink> = Box::new(LogSink);
        // Must not panic when dispatched through the trait object.
        boxed.change(&ChangeEvent::new(ChangeKind::Unknown, "x"));
        boxed.rendition(&FileRendition::new("x", "Invalid file."));
    }
}
