//! fstack - Stack multiple files of the same type into a single output file.
//!
//! This library merges plain text files, PDF documents, or raster images.
//! The core is a thin dispatcher: it classifies a request by the first
//! input's extension, validates that every input exists and shares that
//! type, then hands off to a format-specific merge routine:
//!
//! - **text**: banner-delimited concatenation into one UTF-8 file
//! - **pdf**: page-by-page merge into one PDF (via `lopdf`)
//! - **image**: one page per image in one PDF (via `image` + `lopdf`)
//!
//! Output is written atomically (temp file, then rename), so a failed merge
//! never leaves a truncated output behind.
//!
//! # Examples
//!
//! ```no_run
//! use fstack::config::{Config, OverwriteMode};
//! use fstack::merge::Merger;
//! use std::path::PathBuf;
//!
//! # fn example() -> fstack::Result<()> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("ch1.pdf"), PathBuf::from("ch2.pdf")],
//!     output: PathBuf::from("book.pdf"),
//!     dry_run: false,
//!     verbose: false,
//!     quiet: false,
//!     overwrite_mode: OverwriteMode::Overwrite,
//! };
//!
//! let report = Merger::new().merge(&config)?;
//! println!("merged {} file(s)", report.files_merged);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filetype;
pub mod io;
pub mod merge;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, StackError};
pub use filetype::FileKind;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
