//! What to write between and after sources

use crate::config::PrintConfig;
use crate::constants::{NEWLINE, PAGE_BREAK, TRAILING_MARKER};

/// Bytes written after an interior source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Form feed; the next file starts on a new page.
    PageBreak,
    /// A single line feed.
    Newline,
}

impl Separator {
    /// Raw bytes of this separator.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Separator::PageBreak => PAGE_BREAK,
            Separator::Newline => NEWLINE,
        }
    }
}

/// Separator rules derived from a [`PrintConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorPolicy {
    separate_files: bool,
    trailing_marker: bool,
    control_sequences: bool,
}

impl SeparatorPolicy {
    /// Builds the policy for `config`.
    pub fn from_config(config: &PrintConfig) -> Self {
        Self {
            separate_files: config.separate_files(),
            trailing_marker: config.trailing_marker(),
            control_sequences: config.control_sequences(),
        }
    }

    /// Separator following file `index` of `total` named files.
    ///
    /// Only interior files get one; the last file never does. Empty files are
    /// treated like any other. Standard input is a single stream and never
    /// asks for a separator.
    pub fn after_file(&self, index: usize, total: usize) -> Option<Separator> {
        if !self.control_sequences || index + 1 >= total {
            return None;
        }

        if self.separate_files {
            Some(Separator::PageBreak)
        } else {
            Some(Separator::Newline)
        }
    }

    /// Marker written once after every source, if requested.
    pub fn trailing(&self) -> Option<&'static [u8]> {
        (self.control_sequences && self.trailing_marker).then_some(TRAILING_MARKER)
    }
}
