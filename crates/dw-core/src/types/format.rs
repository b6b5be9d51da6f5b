//! The closed table of recognized file formats.
//!
//! This module provides the [`FileFormat`] enum mapping file extensions to
//! the descriptive labels used in content renditions. Adding a format is a
//! table edit here, not a new type hierarchy.

use serde::{Deserialize, Serialize};

/// A recognized file format, identified by extension.
///
/// The extension lookup is case-sensitive on the lowercase literal: `TXT`
/// does not match [`Text`](Self::Text). Formats outside this table are
/// reported as unsupported by the extractor.
///
/// # Examples
///
/// ```
/// use dw_core::FileFormat;
///
/// assert_eq!(FileFormat::from_extension("csv"), Some(FileFormat::Csv));
/// assert_eq!(FileFormat::from_extension("CSV"), None);
/// assert_eq!(FileFormat::from_extension("exe"), None);
/// assert_eq!(FileFormat::Csv.label(), "CSV File Content:");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// Plain text (`txt`).
    Text,
    /// Comma-separated values (`csv`).
    Csv,
    /// XML documents (`xml`).
    Xml,
    /// JSON documents (`json`).
    Json,
    /// Word documents (`docx`).
    Docx,
    /// PDF documents (`pdf`). Detected but never decoded.
    Pdf,
}

impl FileFormat {
    /// Looks up a format by its file extension.
    ///
    /// The match is exact and case-sensitive; only the lowercase extensions
    /// in the table are recognized.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Returns the rendition label for this format.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text File Content:",
            Self::Csv => "CSV File Content:",
            Self::Xml => "XML File Content:",
            Self::Json => "JSON File Content:",
            Self::Docx => "Word (DOCX) File Content:",
            Self::Pdf => "PDF File Content:",
        }
    }

    /// Returns `true` if renditions of this format include the file body.
    ///
    /// PDF is label-only: the format is detected but the (binary) content is
    /// never appended.
    #[inline]
    #[must_use]
    pub const fn includes_body(self) -> bool {
        !matches!(self, Self::Pdf)
    }

    /// All formats in the table, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Text,
            Self::Csv,
            Self::Xml,
            Self::Json,
            Self::Docx,
            Self::Pdf,
        ]
    }
}
