//! Text concatenation.
//!
//! Each input file is copied into the output in order, preceded by a banner
//! naming the source file:
//!
//! ```text
//!
//! ==================================================
//! Content from: notes/a.txt
//! ==================================================
//!
//! <contents of a.txt>
//! ```
//!
//! A trailing newline follows each file's contents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, StackError};
use crate::io::OutputWriter;
use crate::merge::MergeOutcome;

/// Section delimiter, 50 `=` characters.
const BANNER: &str = "==================================================";

/// Concatenate text inputs into a single UTF-8 output file.
pub(crate) fn stack_text(
    inputs: &[PathBuf],
    output: &Path,
    writer: &OutputWriter,
) -> Result<MergeOutcome> {
    let mut out = writer.open(output)?;

    for path in inputs {
        info!("processing {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| StackError::FailedToRead {
            path: path.clone(),
            source: e,
        })?;

        write!(
            out,
            "\n{BANNER}\nContent from: {}\n{BANNER}\n\n",
            path.display()
        )
        .and_then(|()| out.write_all(contents.as_bytes()))
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|e| StackError::FailedToWrite {
            path: output.to_path_buf(),
            source: e,
        })?;
    }

    let output_size = out.commit()?;

    Ok(MergeOutcome {
        page_count: None,
        output_size,
    })
}
