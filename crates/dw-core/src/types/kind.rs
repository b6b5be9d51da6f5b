//! Change classification types.
//!
//! This module provides the [`ChangeKind`] enum, the result of classifying a
//! raw filesystem notification.

use serde::{Deserialize, Serialize};

/// The classified kind of a filesystem change event.
///
/// Every raw notification resolves to exactly one variant; notification
/// kinds the classifier does not recognize map to [`Unknown`](Self::Unknown)
/// rather than being dropped.
///
/// # Examples
///
/// ```
/// use dw_core::ChangeKind;
///
/// let kind = ChangeKind::Created;
/// assert!(kind.triggers_extraction());
/// assert_eq!(kind.to_string(), "created");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A new directory entry appeared.
    Created,

    /// An existing entry's content or metadata changed.
    Modified,

    /// An entry was removed.
    Deleted,

    /// The notification kind was not one of the recognized three.
    ///
    /// Still logged, never silently discarded.
    #[default]
    Unknown,
}

impl ChangeKind {
    /// Returns `true` if events of this kind warrant content extraction.
    ///
    /// Only creations and modifications do; deleted entries have no content
    /// to show and unknown events carry no reliable file identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_core::ChangeKind;
    ///
    /// assert!(ChangeKind::Created.triggers_extraction());
    /// assert!(ChangeKind::Modified.triggers_extraction());
    /// assert!(!ChangeKind::Deleted.triggers_extraction());
    /// assert!(!ChangeKind::Unknown.triggers_extraction());
    /// ```
    #[inline]
    #[must_use]
    pub const fn triggers_extraction(self) -> bool {
        matches!(self, Self::Created | Self::Modified)
    }

    /// Returns the lowercase label used in log lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_core::ChangeKind;
    ///
    /// assert_eq!(ChangeKind::Deleted.label(), "deleted");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
