//! Print job configuration
//!
//! [`PrintConfig`] is built once, validated, and then passed by reference to
//! the copier. It never changes while a job runs.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE, MIN_TRANSLATING_BUFFER_SIZE};
use crate::error::{PrintError, Result};

/// Destination for all printed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputDevice {
    /// Process standard output.
    #[default]
    Stdout,
    /// The controlling terminal (`/dev/tty`), for when stdout is captured.
    Tty,
}

impl OutputDevice {
    /// Filesystem path of the terminal device.
    pub const TTY_PATH: &'static str = "/dev/tty";
}

impl fmt::Display for OutputDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputDevice::Stdout => f.write_str("stdout"),
            OutputDevice::Tty => f.write_str(Self::TTY_PATH),
        }
    }
}

/// Where input bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSelection {
    /// A single implicit standard-input stream.
    #[default]
    Stdin,
    /// Named files, printed in order.
    Files(Vec<PathBuf>),
}

impl InputSelection {
    /// Number of sources the copier will drain.
    pub fn len(&self) -> usize {
        match self {
            InputSelection::Stdin => 1,
            InputSelection::Files(paths) => paths.len(),
        }
    }

    /// True only for an empty file list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when reading named files.
    pub fn is_files(&self) -> bool {
        matches!(self, InputSelection::Files(_))
    }
}

/// Resolved configuration for one print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    buffer_size: usize,
    trailing_marker: bool,
    separate_files: bool,
    translate_line_endings: bool,
    control_sequences: bool,
    output: OutputDevice,
    input: InputSelection,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            trailing_marker: false,
            separate_files: true,
            translate_line_endings: false,
            control_sequences: true,
            output: OutputDevice::Stdout,
            input: InputSelection::Stdin,
        }
    }
}

impl PrintConfig {
    /// Creates a configuration with the given buffer capacity.
    ///
    /// Returns an error if the capacity is zero or above [`MAX_BUFFER_SIZE`].
    pub fn new(buffer_size: usize) -> Result<Self> {
        let config = Self {
            buffer_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Appends a form feed after all content.
    pub fn with_trailing_marker(mut self, enabled: bool) -> Self {
        self.trailing_marker = enabled;
        self
    }

    /// Separates files with a page break (`true`) or a newline (`false`).
    pub fn with_separate_files(mut self, enabled: bool) -> Self {
        self.separate_files = enabled;
        self
    }

    /// Rewrites each line feed as line feed + carriage return.
    pub fn with_translate_line_endings(mut self, enabled: bool) -> Self {
        self.translate_line_endings = enabled;
        self
    }

    /// Emits printer control bytes (wrappers, separators, trailing marker).
    pub fn with_control_sequences(mut self, enabled: bool) -> Self {
        self.control_sequences = enabled;
        self
    }

    /// Sets the output device.
    pub fn with_output(mut self, output: OutputDevice) -> Self {
        self.output = output;
        self
    }

    /// Sets the input selection.
    pub fn with_input(mut self, input: InputSelection) -> Self {
        self.input = input;
        self
    }

    /// Checks the combination of settings.
    ///
    /// Call after the last `with_*` method; the builders do not re-validate.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(PrintError::InvalidBufferSize {
                size: self.buffer_size,
                reason: "buffer size must be positive",
            });
        }

        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(PrintError::InvalidBufferSize {
                size: self.buffer_size,
                reason: "buffer size exceeds 16 MiB limit",
            });
        }

        if self.translate_line_endings && self.buffer_size < MIN_TRANSLATING_BUFFER_SIZE {
            return Err(PrintError::InvalidBufferSize {
                size: self.buffer_size,
                reason: "line-ending translation needs a buffer of at least 2 bytes",
            });
        }

        if self.input.is_empty() {
            return Err(PrintError::Usage(
                "file mode requested but no files were named".to_string(),
            ));
        }

        Ok(())
    }

    /// Buffer capacity in bytes.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Bytes requested per read.
    ///
    /// Half the capacity when translating, so a chunk of nothing but line
    /// feeds still fits in `buffer_size` once expanded.
    pub fn read_size(&self) -> usize {
        if self.translate_line_endings {
            self.buffer_size / 2
        } else {
            self.buffer_size
        }
    }

    /// Whether a form feed follows all content.
    pub fn trailing_marker(&self) -> bool {
        self.trailing_marker
    }

    /// Whether files are separated by page breaks.
    pub fn separate_files(&self) -> bool {
        self.separate_files
    }

    /// Whether line endings are translated.
    pub fn translate_line_endings(&self) -> bool {
        self.translate_line_endings
    }

    /// Whether printer control bytes are emitted.
    pub fn control_sequences(&self) -> bool {
        self.control_sequences
    }

    /// Output device.
    pub fn output(&self) -> OutputDevice {
        self.output
    }

    /// Input selection.
    pub fn input(&self) -> &InputSelection {
        &self.input
    }
}
