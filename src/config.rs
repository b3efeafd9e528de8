//! Configuration module for fstack.
//!
//! This module transforms CLI arguments into a validated, normalized
//! configuration that drives a single merge request. It handles:
//! - Validation of argument combinations
//! - Resolution of the overwrite mode
//! - Selection of the log verbosity

use anyhow::{Result, bail};
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Overwrite an existing output file without asking (default).
    #[default]
    Overwrite,
    /// Never overwrite, error if the output file exists.
    NoClobber,
}

/// Complete configuration for a single merge request.
///
/// This structure contains all settings needed to perform a merge,
/// derived and validated from CLI arguments. Input order is significant:
/// it determines the order of sections or pages in the output.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file paths, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output file path.
    pub output: PathBuf,

    /// Dry run mode - validate without creating output.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - Verbose and quiet modes are both enabled
    /// - The output path is also listed as an input
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        for input in &self.inputs {
            if input == &self.output {
                bail!(
                    "Output file cannot be the same as an input file: {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    /// The log level implied by the verbosity flags.
    ///
    /// The level is carried as an explicit value and handed to the
    /// subscriber at startup rather than mutated through global state.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::INFO
        }
    }
}
