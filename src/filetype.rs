//! The supported file type registry.
//!
//! fstack only merges files whose type it can determine from the file
//! extension. The registry is a closed enum so that every dispatch site is
//! checked for exhaustiveness at compile time: adding a new kind forces the
//! merge dispatcher and every other match to handle it.

use std::fmt;
use std::path::Path;

/// Classification of an input file, resolved from its extension.
///
/// Each variant carries a fixed, case-insensitive extension set. The first
/// input file's kind determines the expected kind for a whole merge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Plain text files, concatenated with a banner per source file.
    Text,
    /// PDF documents, merged page-by-page into one document.
    Pdf,
    /// Raster images, re-encoded as sequential pages of one PDF.
    Image,
}

impl FileKind {
    /// All supported kinds, in registry order.
    pub const ALL: [FileKind; 3] = [FileKind::Text, FileKind::Pdf, FileKind::Image];

    /// The extensions recognized as this kind (lowercase, without the dot).
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["txt", "log", "md"],
            Self::Pdf => &["pdf"],
            Self::Image => &["jpg", "jpeg", "png"],
        }
    }

    /// Classify a path by its extension.
    ///
    /// Returns `None` if the path has no extension or the extension is not
    /// in any kind's set. Matching is case-insensitive; no filesystem access
    /// is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fstack::filetype::FileKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileKind::from_path(Path::new("notes.md")), Some(FileKind::Text));
    /// assert_eq!(FileKind::from_path(Path::new("scan.PDF")), Some(FileKind::Pdf));
    /// assert_eq!(FileKind::from_path(Path::new("data.csv")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    /// Check whether a path's extension belongs to this kind's set.
    pub fn matches(&self, path: &Path) -> bool {
        FileKind::from_path(path) == Some(*self)
    }

    /// The lowercase registry tag for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
