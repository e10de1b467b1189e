//! Output device opener

use std::fs::OpenOptions;
use std::io::{self, Write};

use ansiprint_format::{OutputDevice, PrintError, Result};

/// Opens `device` for writing.
///
/// The returned sink is unbuffered beyond what the device itself does; the
/// copier flushes after every source.
pub fn open_sink(device: OutputDevice) -> Result<Box<dyn Write>> {
    match device {
        OutputDevice::Stdout => Ok(Box::new(io::stdout().lock())),
        OutputDevice::Tty => {
            let tty = OpenOptions::new()
                .write(true)
                .open(OutputDevice::TTY_PATH)
                .map_err(|source| PrintError::OpenSink {
                    device: device.to_string(),
                    source,
                })?;
            Ok(Box::new(tty))
        }
    }
}
