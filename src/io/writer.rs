//! Atomic output writing.
//!
//! All merge routines produce their output through [`OutputWriter`], which
//! writes to a temporary sibling file and renames it over the final path on
//! commit. A merge that fails midway never leaves a truncated output file
//! behind; at worst a `.tmp` sibling remains.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::debug;

use crate::error::{Result, StackError};

/// Options for writing output files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }
}

/// Output writer with configurable behavior.
#[derive(Debug, Default)]
pub struct OutputWriter {
    options: WriteOptions,
}

/// An open output file, not yet committed to its final path.
///
/// Implements [`Write`]. Call [`OutputFile::commit`] to flush and move the
/// file into place; dropping without committing leaves the temporary file
/// on disk and the final path untouched.
pub struct OutputFile {
    writer: BufWriter<File>,
    write_path: PathBuf,
    final_path: PathBuf,
    atomic: bool,
}

impl OutputWriter {
    /// Create a new writer with default options (atomic).
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Open an output file for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file (or its temporary sibling) cannot be
    /// created.
    pub fn open(&self, path: &Path) -> Result<OutputFile> {
        let final_path = path.to_path_buf();
        let write_path = if self.options.atomic {
            temp_sibling(path)
        } else {
            final_path.clone()
        };

        let file = File::create(&write_path).map_err(|e| StackError::FailedToCreateOutput {
            path: write_path.clone(),
            source: e,
        })?;

        Ok(OutputFile {
            writer: BufWriter::with_capacity(self.options.buffer_size, file),
            write_path,
            final_path,
            atomic: self.options.atomic,
        })
    }

    /// Save a PDF document to a file through the atomic path.
    ///
    /// The document is saved as-is; compression and renumbering are the
    /// merge routines' responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_pdf(&self, document: &mut Document, path: &Path) -> Result<u64> {
        let mut out = self.open(path)?;

        document
            .save_to(&mut out)
            .map_err(|e| StackError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        out.commit()
    }
}

impl OutputFile {
    /// Flush, finalize, and move the file into place.
    ///
    /// Returns the size of the written file in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing or the final rename fails.
    pub fn commit(mut self) -> Result<u64> {
        self.writer.flush().map_err(|e| StackError::FailedToWrite {
            path: self.write_path.clone(),
            source: e,
        })?;
        drop(self.writer);

        if self.atomic {
            std::fs::rename(&self.write_path, &self.final_path).map_err(|e| {
                StackError::FailedToWrite {
                    path: self.final_path.clone(),
                    source: e,
                }
            })?;
            debug!(
                "committed {} -> {}",
                self.write_path.display(),
                self.final_path.display()
            );
        }

        let file_size = std::fs::metadata(&self.final_path)
            .map(|m| m.len())
            .unwrap_or(0);

        Ok(file_size)
    }

    /// The final path this file will be committed to.
    pub fn path(&self) -> &Path {
        &self.final_path
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Temporary sibling path used for atomic writes.
///
/// Appends `.tmp` to the full file name instead of replacing the extension,
/// so `report.pdf` and `report.txt` in the same directory never collide on
/// the same temp file.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
