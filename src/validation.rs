//! Input validation for fstack.
//!
//! Every merge request is validated up front, before any output is touched.
//! Validation enforces the type-homogeneity invariant: all inputs must
//! resolve to the same [`FileKind`], determined by the first file's
//! extension. Any failure is terminal for the whole request; partial merges
//! are never attempted.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StackError};
use crate::filetype::FileKind;

/// Summary of a successfully validated merge request.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    /// Kind resolved from the first input file.
    pub kind: FileKind,

    /// Number of validated input files.
    pub file_count: usize,

    /// Total size of all input files in bytes.
    pub total_size: u64,
}

impl ValidationSummary {
    /// Format the total input size as a human-readable string.
    pub fn format_total_size(&self) -> String {
        format_file_size(self.total_size)
    }
}

/// Validator for merge request inputs.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single input file against an expected kind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The path is not a regular file
    /// - The file's extension does not belong to `expected`'s set
    pub fn validate_file(&self, path: &Path, expected: FileKind) -> Result<u64> {
        if !path.exists() {
            return Err(StackError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(StackError::not_a_file(path.to_path_buf()));
        }

        if !expected.matches(path) {
            return Err(StackError::mixed_types(path.to_path_buf(), expected));
        }

        let metadata = fs::metadata(path).map_err(|e| StackError::FileNotAccessible {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(
            "validated {} ({} bytes, {})",
            path.display(),
            metadata.len(),
            expected
        );

        Ok(metadata.len())
    }

    /// Validate a complete ordered input sequence.
    ///
    /// The expected kind is resolved from the first file's extension and
    /// enforced against every file in the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sequence is empty
    /// - The first file's extension is not in the supported type registry
    /// - Any file fails [`Validator::validate_file`]
    pub fn validate_inputs(&self, files: &[PathBuf]) -> Result<ValidationSummary> {
        let first = files.first().ok_or(StackError::NoFilesToStack)?;

        let kind = FileKind::from_path(first)
            .ok_or_else(|| StackError::unsupported_type(first.clone()))?;

        let mut total_size = 0;
        for file in files {
            total_size += self.validate_file(file, kind)?;
        }

        Ok(ValidationSummary {
            kind,
            file_count: files.len(),
            total_size,
        })
    }
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_validate_empty_sequence() {
        let validator = Validator::new();
        let result = validator.validate_inputs(&[]);

        assert!(matches!(result, Err(StackError::NoFilesToStack)));
    }

    #[test]
    fn test_validate_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = create_file(&temp_dir, "a.txt", b"hello");
        let missing = temp_dir.path().join("missing.txt");

        let validator = Validator::new();
        let result = validator.validate_inputs(&[existing, missing]);

        assert!(matches!(result, Err(StackError::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let csv = create_file(&temp_dir, "data.csv", b"a,b,c");

        let validator = Validator::new();
        let result = validator.validate_inputs(&[csv]);

        assert!(matches!(result, Err(StackError::UnsupportedType { .. })));
    }

    #[test]
    fn test_validate_mixed_types() {
        let temp_dir = TempDir::new().unwrap();
        let text = create_file(&temp_dir, "a.txt", b"hello");
        let image = create_file(&temp_dir, "b.png", b"not really a png");

        let validator = Validator::new();
        let result = validator.validate_inputs(&[text, image]);

        match result {
            Err(StackError::MixedTypes { expected, .. }) => {
                assert_eq!(expected, FileKind::Text);
            }
            other => panic!("expected MixedTypes, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("folder.txt");
        fs::create_dir(&dir_path).unwrap();

        let validator = Validator::new();
        let result = validator.validate_inputs(&[dir_path]);

        assert!(matches!(result, Err(StackError::NotAFile { .. })));
    }

    #[test]
    fn test_validate_homogeneous_text_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_file(&temp_dir, "a.txt", b"aaaa");
        let b = create_file(&temp_dir, "b.log", b"bb");
        let c = create_file(&temp_dir, "c.md", b"c");

        let validator = Validator::new();
        let summary = validator.validate_inputs(&[a, b, c]).unwrap();

        assert_eq!(summary.kind, FileKind::Text);
        assert_eq!(summary.file_count, 3);
        assert_eq!(summary.total_size, 7);
    }

    #[test]
    fn test_validate_kind_from_first_file() {
        let temp_dir = TempDir::new().unwrap();
        let jpg = create_file(&temp_dir, "a.jpg", b"");
        let txt = create_file(&temp_dir, "b.txt", b"");

        let validator = Validator::new();
        let result = validator.validate_inputs(&[jpg, txt]);

        match result {
            Err(StackError::MixedTypes { expected, .. }) => {
                assert_eq!(expected, FileKind::Image);
            }
            other => panic!("expected MixedTypes, got {other:?}"),
        }
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(500), "500 bytes");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.00 GB");
    }
}
