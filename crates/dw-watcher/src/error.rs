//! Error types for the dw-watcher crate.
//!
//! This module provides the [`WatchError`] type for errors that can occur
//! while establishing or tearing down a directory watch.
//!
//! Per-file read failures during content extraction are deliberately *not*
//! represented here: they are the expected steady-state failure mode, routed
//! through the event sink as plain [`std::io::Error`]s so the loop keeps
//! running.

use camino::Utf8PathBuf;

/// Errors that can occur during watch setup and shutdown.
///
/// All of these are surfaced synchronously to the controlling caller; once a
/// watch loop is running, nothing it encounters propagates back out through
/// this type except via [`shutdown`](crate::DirectoryWatcher::shutdown).
///
/// # Examples
///
/// ```
/// use dw_watcher::WatchError;
///
/// let err = WatchError::path_not_found("/no/such/dir");
/// assert!(err.to_string().contains("/no/such/dir"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Failed to initialize or register the notify watcher.
    #[error("notify watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// The watch target does not exist.
    #[error("path does not exist: {0}")]
    PathNotFound(Utf8PathBuf),

    /// The watch target exists but is not a directory.
    #[error("path is not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    /// The watch loop task panicked or was cancelled before completing.
    #[error("watch loop task ended abnormally")]
    TaskFailed,

    /// An I/O error occurred while validating the watch target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatchError {
    /// Creates a new [`WatchError::PathNotFound`] error.
    #[inline]
    pub fn path_not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::PathNotFound(path.into())
    }

    /// Creates a new [`WatchError::NotADirectory`] error.
    #[inline]
    pub fn not_a_directory(path: impl Into<Utf8PathBuf>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Returns the watch target associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::PathNotFound(path) | Self::NotADirectory(path) => Some(path),
            Self::Notify(_) | Self::TaskFailed | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display() {
        let err = WatchError::path_not_found("/missing");
        assert_eq!(err.to_string(), "path does not exist: /missing");
        assert_eq!(err.path().map(|p| p.as_str()), Some("/missing"));
    }

    #[test]
    fn test_not_a_directory_display() {
        let err = WatchError::not_a_directory("/etc/hosts");
        assert!(err.to_string().contains("not a directory"));
        assert_eq!(err.path().map(|p| p.as_str()), Some("/etc/hosts"));
    }

    #[test]
    fn test_task_failed_has_no_path() {
        let err = WatchError::TaskFailed;
        assert!(err.path().is_none());
        assert!(err.to_string().contains("ended abnormally"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WatchError::from(io);
        assert!(matches!(err, WatchError::Io(_)));
        assert!(err.path().is_none());
    }
}
