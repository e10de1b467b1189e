//! Input sources
//!
//! A source is opened right before its bytes are copied and dropped (closed)
//! right after. The copier never holds two sources open at once.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use ansiprint_format::{PrintError, Result};

/// Something the copier can open and drain.
pub trait Source {
    /// Reader produced by [`Source::open`].
    type Reader: Read;

    /// Human-readable name used in log events.
    fn describe(&self) -> String;

    /// Opens the source for reading.
    fn open(&self) -> Result<Self::Reader>;
}

/// Input stream named on the command line, or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Process standard input.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Source for InputSource {
    type Reader = Box<dyn Read>;

    fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Path(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> Result<Self::Reader> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Path(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(file)),
                Err(source) => Err(PrintError::OpenSource {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }
}

impl<'a> Source for &'a [u8] {
    type Reader = &'a [u8];

    fn describe(&self) -> String {
        format!("<{} bytes in memory>", self.len())
    }

    fn open(&self) -> Result<Self::Reader> {
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn path_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();

        let source = InputSource::Path(file.path().to_path_buf());
        let mut reader = source.open().unwrap();
        let mut content = Vec::new();
        reader.read_to_end(&mut content).unwrap();
        assert_eq!(content, b"hello");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = InputSource::Path(missing.clone()).open().err().unwrap();
        match err {
            PrintError::OpenSource { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn byte_slice_source_is_reopenable() {
        let data: &[u8] = b"abc";
        let mut first = Vec::new();
        data.open().unwrap().read_to_end(&mut first).unwrap();
        let mut second = Vec::new();
        data.open().unwrap().read_to_end(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(InputSource::Stdin.describe(), "<stdin>");
    }
}
