//! Classification of raw filesystem notifications.
//!
//! This module maps `notify`'s event kinds onto the workspace's
//! [`ChangeKind`] vocabulary. The mapping is total: every possible input
//! resolves to exactly one output, with unrecognized kinds collapsing to
//! [`ChangeKind::Unknown`] instead of being dropped.

use dw_core::ChangeKind;
use notify::EventKind;

/// Classifies a raw notification kind.
///
/// Pure function with no side effects. Creations, modifications, and
/// removals map to their respective kinds regardless of the backend's
/// sub-classification (file vs. folder, data vs. metadata); access
/// notifications and backend-specific kinds map to
/// [`ChangeKind::Unknown`].
///
/// The result drives both the log line and the extraction decision: only
/// [`ChangeKind::Created`] and [`ChangeKind::Modified`] warrant reading the
/// file.
///
/// # Examples
///
/// ```
/// use dw_core::ChangeKind;
/// use dw_watcher::classify;
/// use notify::event::{CreateKind, EventKind};
///
/// assert_eq!(
///     classify(&EventKind::Create(CreateKind::File)),
///     ChangeKind::Created
/// );
/// assert_eq!(classify(&EventKind::Any), ChangeKind::Unknown);
/// ```
#[must_use]
pub fn classify(kind: &EventKind) -> ChangeKind {
    match kind {
        EventKind::Create(_) => ChangeKind::Created,
        EventKind::Modify(_) => ChangeKind::Modified,
        EventKind::Remove(_) => ChangeKind::Deleted,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => ChangeKind::Unknown,
    }
}
