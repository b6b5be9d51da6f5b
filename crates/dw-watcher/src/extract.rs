//! Format-tagged content extraction.
//!
//! This module turns a file path into a [`FileRendition`]: a descriptive
//! string pairing a format label from the [`FileFormat`] table with the
//! file's decoded content. Renditions are recomputed on every call; nothing
//! is cached.

use camino::Utf8Path;
use dw_core::FileFormat;

/// The rendition content for names with no usable extension.
pub const INVALID_FILE: &str = "Invalid file.";

/// The rendition content for extensions outside the format table.
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format.";

/// A format-tagged rendition of a file's content.
///
/// Transient: produced per create/modify event, handed to the sink, and
/// dropped. The same file changing twice yields two independently computed
/// renditions.
///
/// # Examples
///
/// ```
/// use dw_watcher::FileRendition;
///
/// let rendition = FileRendition::new("a.txt", "Text File Content:\nhello");
/// assert_eq!(rendition.file_name, "a.txt");
/// assert!(rendition.content.starts_with("Text File Content:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRendition {
    /// The file's name (no directory component).
    pub file_name: String,

    /// The descriptive content: a format label, optionally followed by a
    /// newline and the decoded text, or one of the fixed markers.
    pub content: String,
}

impl FileRendition {
    /// Creates a new rendition.
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Extracts a format-tagged rendition of the file at `path`.
///
/// The extension is the substring after the last `.` in the file name, valid
/// only when that dot is neither the first nor the last character. Names
/// without a usable extension yield the `"Invalid file."` rendition without
/// any read being attempted. Otherwise the file is read (the only operation
/// that can fail) and decoded lossily as UTF-8, so binary content never
/// fails extraction by itself. Known formats get their label, with the body
/// appended for everything except PDF; extensions outside the table yield
/// `"Unsupported file format."`.
///
/// # Errors
///
/// Returns the underlying [`std::io::Error`] when the file cannot be read
/// (vanished between notification and extraction, permission denied). The
/// watch loop reports such failures through the sink and keeps running.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use dw_watcher::extract;
///
/// let rendition = extract(Utf8Path::new("/watched/notes.txt"))?;
/// assert!(rendition.content.starts_with("Text File Content:"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn extract(path: &Utf8Path) -> Result<FileRendition, std::io::Error> {
    let file_name = path.file_name().unwrap_or_default().to_owned();

    let Some(extension) = file_extension(&file_name) else {
        return Ok(FileRendition::new(file_name, INVALID_FILE));
    };

    // The read happens before the table lookup, so unreadable files surface
    // their I/O error even when the extension turns out to be unsupported.
    let bytes = std::fs::read(path.as_std_path())?;

    let content = match FileFormat::from_extension(extension) {
        Some(format) if format.includes_body() => {
            let text = String::from_utf8_lossy(&bytes);
            format!("{}\n{}", format.label(), text)
        }
        Some(format) => format.label().to_owned(),
        None => UNSUPPORTED_FORMAT.to_owned(),
    };

    Ok(FileRendition::new(file_name, content))
}

/// Returns the usable extension of a file name, if any.
///
/// The extension is everything after the last `.`, but only when that dot is
/// neither the first character (dotfiles have no extension) nor the last
/// (trailing dots leave nothing to match).
pub(crate) fn file_extension(file_name: &str) -> Option<&str> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot == file_name.len() - 1 {
        return None;
    }
    Some(&file_name[dot + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        Utf8PathBuf::from_path_buf(path).expect("non-UTF-8 temp path")
    }

    #[test]
    fn test_file_extension_rules() {
        assert_eq!(file_extension("a.txt"), Some("txt"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("data"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(""), None);
    }

    #[test]
    fn test_extract_text_file_includes_body() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "a.txt", b"hello");

        let rendition = extract(&path).unwrap();
        assert_eq!(rendition.file_name, "a.txt");
        assert_eq!(rendition.content, "Text File Content:\nhello");
    }

    #[test]
    fn test_extract_csv_and_json_labels() {
        let dir = TempDir::new().unwrap();

        let csv = extract(&write_file(&dir, "rows.csv", b"a,b\n1,2")).unwrap();
        assert_eq!(csv.content, "CSV File Content:\na,b\n1,2");

        let json = extract(&write_file(&dir, "obj.json", b"{}")).unwrap();
        assert_eq!(json.content, "JSON File Content:\n{}");
    }

    #[test]
    fn test_extract_pdf_is_label_only() {
        let dir = TempDir::new().unwrap();
        // Binary content must not leak into the rendition nor fail decoding.
        let path = write_file(&dir, "report.pdf", &[0x25, 0x50, 0x44, 0x46, 0xff, 0x00, 0xfe]);

        let rendition = extract(&path).unwrap();
        assert_eq!(rendition.content, "PDF File Content:");
    }

    #[test]
    fn test_extract_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tool.exe", b"MZ");

        let rendition = extract(&path).unwrap();
        assert_eq!(rendition.content, UNSUPPORTED_FORMAT);
    }

    #[test]
    fn test_extract_uppercase_extension_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "NOTES.TXT", b"shouting");

        let rendition = extract(&path).unwrap();
        assert_eq!(rendition.content, UNSUPPORTED_FORMAT);
    }

    #[test]
    fn test_extract_invalid_names_skip_the_read() {
        // These paths do not exist; extraction must still succeed because no
        // read is attempted for names without a usable extension.
        for name in ["data", ".hidden", "trailing."] {
            let path = Utf8PathBuf::from("/nonexistent-dir").join(name);
            let rendition = extract(&path).unwrap();
            assert_eq!(rendition.content, INVALID_FILE, "name: {name}");
            assert_eq!(rendition.file_name, name);
        }
    }

    #[test]
    fn test_extract_missing_file_with_extension_is_io_error() {
        let result = extract(Utf8Path::new("/nonexistent-dir/gone.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "stable.xml", b"<root/>");

        let first = extract(&path).unwrap();
        let second = extract(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_binary_text_file_is_lossy_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "weird.txt", &[0x68, 0x69, 0xff]);

        let rendition = extract(&path).unwrap();
        assert!(rendition.content.starts_with("Text File Content:\nhi"));
    }
}
