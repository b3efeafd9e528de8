//! fstack - Stack multiple files of the same type into a single output file.

use clap::Parser;
use std::process;

use tracing::{error, info};

use fstack::cli::Cli;
use fstack::config::Config;
use fstack::error::StackError;
use fstack::merge::Merger;
use fstack::validation::Validator;

fn main() {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    };

    init_tracing(&config);

    if let Err(err) = run(&config) {
        error!("{err}");
        process::exit(err.exit_code());
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// The level comes from the parsed configuration rather than mutable global
/// state, so a given flag combination always produces the same verbosity.
fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
fn run(config: &Config) -> Result<(), StackError> {
    if config.dry_run {
        let summary = Validator::new().validate_inputs(&config.inputs)?;
        info!(
            "dry run: would merge {} {} file(s) ({}) into {}",
            summary.file_count,
            summary.kind,
            summary.format_total_size(),
            config.output.display()
        );
        return Ok(());
    }

    let merger = Merger::new();
    let report = merger.merge(config)?;

    match report.page_count {
        Some(pages) => info!(
            "Successfully created {} ({} file(s), {} pages, {:.2}s)",
            config.output.display(),
            report.files_merged,
            pages,
            report.elapsed.as_secs_f64()
        ),
        None => info!(
            "Successfully created {} ({} file(s), {:.2}s)",
            config.output.display(),
            report.files_merged,
            report.elapsed.as_secs_f64()
        ),
    }

    Ok(())
}
