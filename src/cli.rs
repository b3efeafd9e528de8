//! CLI argument parsing for fstack.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OverwriteMode};
use crate::error::Result;

/// Stack multiple files of the same type into a single output file.
///
/// fstack merges plain text files, PDF documents, or raster images.
/// All inputs must share one type: text files are concatenated with a
/// banner per source, PDFs are merged page-by-page, and images become
/// sequential pages of a single PDF.
#[derive(Parser, Debug)]
#[command(name = "fstack")]
#[command(version)]
#[command(about = "Stack files of the same type into a single output file", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input files to merge (in order, all of the same type)
    ///
    /// Files are merged in the order provided. The first file's
    /// extension determines the expected type for the whole request.
    ///
    /// Examples:
    ///   fstack a.txt b.txt -o combined.txt
    ///   fstack scan1.pdf scan2.pdf -o merged.pdf
    ///   fstack page1.png page2.png -o album.pdf
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Dry run - validate inputs without creating output
    ///
    /// Checks that all inputs exist and share one supported type,
    /// then reports what the merge would do without writing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Useful for scripts and automation.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never overwrite an existing output file
    ///
    /// By default an existing output file is replaced. With this flag,
    /// fstack exits with an error instead.
    #[arg(long)]
    pub no_clobber: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation
    /// (empty inputs, conflicting flags, output listed as an input).
    pub fn to_config(&self) -> Result<Config> {
        let overwrite_mode = if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Overwrite
        };

        let config = Config {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            overwrite_mode,
        };

        config.validate()?;

        Ok(config)
    }
}
