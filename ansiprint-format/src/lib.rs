//! ansiprint Format - Core primitives for printing through a terminal
//!
//! This crate holds everything about an ansiprint job that does not touch
//! I/O:
//!
//! - Control bytes and ANSI media-copy wrapper sequences
//! - Print job configuration and validation
//! - Line-ending translation
//! - Separator rules between and after input sources
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod separator;
pub mod transcode;

// Re-export commonly used types
pub use config::{InputSelection, OutputDevice, PrintConfig};
pub use error::{PrintError, Result};
pub use separator::{Separator, SeparatorPolicy};
pub use transcode::LineEndingTranscoder;
