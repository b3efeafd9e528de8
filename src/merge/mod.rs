//! The merge dispatcher.
//!
//! [`Merger`] runs a single merge request as a linear pipeline: classify the
//! request by the first input's extension, validate every input against that
//! kind, prepare the output location, then dispatch to the format-specific
//! routine. There are no retries and no intermediate state; each request is
//! independent.

pub mod image;
pub mod pdf;
pub mod text;

use std::fs;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{Config, OverwriteMode};
use crate::error::{Result, StackError};
use crate::filetype::FileKind;
use crate::io::OutputWriter;
use crate::validation::Validator;

/// What a format-specific merge routine reports back to the dispatcher.
#[derive(Debug, Clone)]
pub(crate) struct MergeOutcome {
    /// Pages in the output document, for PDF-producing merges.
    pub page_count: Option<usize>,

    /// Size of the written output in bytes.
    pub output_size: u64,
}

/// Report of a completed merge operation.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Kind of files that were merged.
    pub kind: FileKind,

    /// Number of input files merged.
    pub files_merged: usize,

    /// Total input size in bytes.
    pub input_size: u64,

    /// Pages in the output document (PDF outputs only).
    pub page_count: Option<usize>,

    /// Size of the written output in bytes.
    pub output_size: u64,

    /// Total time taken for the merge.
    pub elapsed: Duration,
}

/// Merge dispatcher combining validation, output preparation, and
/// format-specific merging.
pub struct Merger {
    validator: Validator,
    writer: OutputWriter,
}

impl Merger {
    /// Create a new merger with default settings (atomic output writes).
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
            writer: OutputWriter::new(),
        }
    }

    /// Create a merger that writes output in place instead of atomically.
    pub fn non_atomic() -> Self {
        Self {
            validator: Validator::new(),
            writer: OutputWriter::non_atomic(),
        }
    }

    /// Run a merge request end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails (empty inputs, unsupported or
    /// mixed types, missing files), if the output exists under
    /// `--no-clobber`, or if any read/decode/write step fails. Validation
    /// failures are detected before the output location is touched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fstack::config::{Config, OverwriteMode};
    /// use fstack::merge::Merger;
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> fstack::Result<()> {
    /// let config = Config {
    ///     inputs: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
    ///     output: PathBuf::from("combined.txt"),
    ///     dry_run: false,
    ///     verbose: false,
    ///     quiet: false,
    ///     overwrite_mode: OverwriteMode::Overwrite,
    /// };
    ///
    /// let report = Merger::new().merge(&config)?;
    /// println!("merged {} files", report.files_merged);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&self, config: &Config) -> Result<MergeReport> {
        let start = Instant::now();

        let summary = self.validator.validate_inputs(&config.inputs)?;
        info!(
            "validated {} {} file(s), {}",
            summary.file_count,
            summary.kind,
            summary.format_total_size()
        );

        if config.output.exists() && config.overwrite_mode == OverwriteMode::NoClobber {
            return Err(StackError::output_exists(config.output.clone()));
        }

        self.prepare_output_dir(config)?;

        let outcome = match summary.kind {
            FileKind::Text => text::stack_text(&config.inputs, &config.output, &self.writer)?,
            FileKind::Pdf => pdf::stack_pdfs(&config.inputs, &config.output, &self.writer)?,
            FileKind::Image => image::stack_images(&config.inputs, &config.output, &self.writer)?,
        };

        Ok(MergeReport {
            kind: summary.kind,
            files_merged: summary.file_count,
            input_size: summary.total_size,
            page_count: outcome.page_count,
            output_size: outcome.output_size,
            elapsed: start.elapsed(),
        })
    }

    /// Create the output path's parent directories if they are missing.
    fn prepare_output_dir(&self, config: &Config) -> Result<()> {
        if let Some(parent) = config.output.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            debug!("creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| StackError::FailedToCreateOutput {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}
