//! ansiprint I/O - Streaming copy and high-level print APIs
//!
//! This crate provides the I/O layer for ansiprint:
//!
//! - Input sources (files, standard input)
//! - Output devices (stdout, the controlling terminal)
//! - The buffered stream copier
//! - High-level print job functions that add the printer wrapper sequences

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod copier;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use ansiprint_format::constants;
pub use ansiprint_format::{
    InputSelection, OutputDevice, PrintConfig, PrintError, Result, SeparatorPolicy,
};
pub use copier::{CopySummary, StreamCopier};
pub use sink::open_sink;
pub use source::{InputSource, Source};

use constants::{PRINT_END, PRINT_START};
use std::io::Write;
use tracing::info;

/// Runs a whole print job against an already open sink.
///
/// Writes the printer-on sequence, copies every configured source, then
/// writes the printer-off sequence. Nothing is written if the configuration
/// is invalid.
pub fn print_job<W: Write>(config: &PrintConfig, sink: &mut W) -> Result<CopySummary> {
    let copier = StreamCopier::new(config)?;
    run_job(copier, config, sink)
}

/// Validates `config`, opens its output device, and runs the job.
///
/// The device is opened only once the configuration is known to be usable.
pub fn execute_print(config: &PrintConfig) -> Result<CopySummary> {
    let copier = StreamCopier::new(config)?;
    let mut sink = open_sink(config.output())?;
    run_job(copier, config, &mut sink)
}

fn run_job<W: Write>(
    mut copier: StreamCopier<'_>,
    config: &PrintConfig,
    sink: &mut W,
) -> Result<CopySummary> {
    if config.control_sequences() {
        sink.write_all(PRINT_START)?;
    }

    let summary = copier.run(sink)?;

    if config.control_sequences() {
        sink.write_all(PRINT_END)?;
    }
    sink.flush()?;

    info!(
        sources = summary.sources,
        bytes_read = summary.bytes_read,
        bytes_written = summary.bytes_written,
        separators = summary.separators,
        "print job finished"
    );
    Ok(summary)
}
