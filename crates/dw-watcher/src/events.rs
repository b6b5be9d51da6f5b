//! Event types for classified directory changes.
//!
//! This module provides the [`ChangeEvent`] type produced by the watch loop
//! after classifying a raw filesystem notification.

use std::time::Instant;

use dw_core::ChangeKind;

/// A classified change to an entry in the watched directory.
///
/// Produced once per raw notification and consumed immediately by the event
/// sink; never persisted. The `file_name` is the entry's name relative to
/// the watch target, not an absolute path.
///
/// # Examples
///
/// ```
/// use dw_core::ChangeKind;
/// use dw_watcher::ChangeEvent;
///
/// let event = ChangeEvent::new(ChangeKind::Created, "a.txt");
/// assert_eq!(event.file_name, "a.txt");
/// assert!(event.kind.triggers_extraction());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The classified kind of this change.
    pub kind: ChangeKind,

    /// The changed entry's name, relative to the watch target.
    pub file_name: String,

    /// When the loop observed this notification.
    ///
    /// Monotonic; suitable for measuring elapsed time, not wall-clock
    /// display.
    pub timestamp: Instant,
}

impl ChangeEvent {
    /// Creates a new change event stamped with the current instant.
    #[inline]
    #[must_use]
    pub fn new(kind: ChangeKind, file_name: impl Into<String>) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            timestamp: Instant::now(),
        }
    }

    /// Returns the file extension of the changed entry, if it has a usable
    /// one.
    ///
    /// Follows the extractor's rule: the substring after the last `.`, valid
    /// only when the dot is neither the first nor the last character.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_core::ChangeKind;
    /// use dw_watcher::ChangeEvent;
    ///
    /// let event = ChangeEvent::new(ChangeKind::Modified, "report.pdf");
    /// assert_eq!(event.extension(), Some("pdf"));
    ///
    /// let hidden = ChangeEvent::new(ChangeKind::Modified, ".gitignore");
    /// assert_eq!(hidden.extension(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        crate::extract::file_extension(&self.file_name)
    }
}
