//! Error types for fstack.
//!
//! All fallible operations in the crate return [`StackError`]. Variants are
//! grouped into three classes that drive the process exit code:
//!
//! - **Validation errors**: empty input list, unsupported extension, missing
//!   file, mixed types
//! - **I/O / codec errors**: read failures, corrupt or encrypted PDFs,
//!   undecodable images, write failures
//! - **Configuration errors**: invalid flag combinations, refused overwrite

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::filetype::FileKind;

/// Result type alias for fstack operations.
pub type Result<T> = std::result::Result<T, StackError>;

/// Main error type for fstack operations.
#[derive(Debug, Error)]
pub enum StackError {
    /// No input files were provided for stacking.
    #[error("No input files specified for stacking")]
    NoFilesToStack,

    /// The file's extension is not in the supported type registry.
    #[error("Unsupported file type: {}", .path.display())]
    UnsupportedType {
        /// Path whose extension was not recognized.
        path: PathBuf,
    },

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file's type differs from the type of the first input.
    #[error("Mixed file types not supported: {} is not a {expected} file", .path.display())]
    MixedTypes {
        /// Path with the mismatched extension.
        path: PathBuf,
        /// Type resolved from the first input.
        expected: FileKind,
    },

    /// Input file is not accessible (permission denied, etc.).
    #[error("Cannot access file: {}\n  Reason: {source}", .path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to read an input file's contents.
    #[error("Failed to read input: {}\n  Reason: {source}", .path.display())]
    FailedToRead {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to load a PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", .path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Failed to decode a raster image.
    #[error("Failed to decode image: {}\n  Reason: {reason}", .path.display())]
    FailedToDecodeImage {
        /// Path to the image file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Output file already exists and overwriting is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Remove --no-clobber or choose a different output path",
        .path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl From<anyhow::Error> for StackError {
    fn from(err: anyhow::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl StackError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create an UnsupportedType error.
    pub fn unsupported_type(path: PathBuf) -> Self {
        Self::UnsupportedType { path }
    }

    /// Create a MixedTypes error.
    pub fn mixed_types(path: PathBuf, expected: FileKind) -> Self {
        Self::MixedTypes { path, expected }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a FailedToDecodeImage error.
    pub fn failed_to_decode_image(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToDecodeImage {
            path,
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error comes from pre-merge validation.
    ///
    /// Validation errors mean no output was attempted at all.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoFilesToStack
                | Self::UnsupportedType { .. }
                | Self::FileNotFound { .. }
                | Self::NotAFile { .. }
                | Self::MixedTypes { .. }
        )
    }

    /// Get the exit code for this error.
    ///
    /// Returns the appropriate process exit code based on error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoFilesToStack => 2,
            Self::UnsupportedType { .. } => 2,
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::MixedTypes { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::FailedToRead { .. } => 3,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::FailedToDecodeImage { .. } => 3,
            Self::MergeFailed { .. } => 6,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::InvalidConfig { .. } => 1,
        }
    }
}
