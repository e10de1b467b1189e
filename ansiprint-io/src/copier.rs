//! Buffered stream copier
//!
//! Drains each source into the sink one bounded chunk at a time, translating
//! line endings when configured, and writes separators between files and the
//! trailing marker at the end.

use std::io::{ErrorKind, Read, Write};

use ansiprint_format::{
    InputSelection, LineEndingTranscoder, PrintConfig, Result, SeparatorPolicy,
};
use tracing::{debug, trace};

use crate::source::{InputSource, Source};

/// Counters describing a finished copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Sources read to exhaustion.
    pub sources: usize,
    /// Content bytes read from all sources.
    pub bytes_read: u64,
    /// Bytes written to the sink, excluding the wrapper sequences.
    pub bytes_written: u64,
    /// Page breaks or newlines written between files.
    pub separators: usize,
}

/// Copies configured sources into a sink.
pub struct StreamCopier<'a> {
    config: &'a PrintConfig,
    policy: SeparatorPolicy,
    buffer: Vec<u8>,
    transcoder: Option<LineEndingTranscoder>,
}

impl<'a> StreamCopier<'a> {
    /// Creates a copier for `config`.
    ///
    /// Fails if the configuration does not validate; the read buffer is sized
    /// from it and must never be empty.
    pub fn new(config: &'a PrintConfig) -> Result<Self> {
        config.validate()?;
        let transcoder = config
            .translate_line_endings()
            .then(|| LineEndingTranscoder::new(config.buffer_size()));
        Ok(Self {
            config,
            policy: SeparatorPolicy::from_config(config),
            buffer: vec![0u8; config.read_size()],
            transcoder,
        })
    }

    /// Copies whatever the configuration's input selection names.
    pub fn run<W: Write>(&mut self, sink: &mut W) -> Result<CopySummary> {
        let config = self.config;
        match config.input() {
            InputSelection::Stdin => self.copy_stdin(&InputSource::Stdin, sink),
            InputSelection::Files(paths) => {
                let sources: Vec<InputSource> =
                    paths.iter().cloned().map(InputSource::Path).collect();
                self.copy_files(&sources, sink)
            }
        }
    }

    /// Copies a single standard-input stream.
    ///
    /// No file separators apply; only the trailing marker, if requested.
    pub fn copy_stdin<S: Source, W: Write>(
        &mut self,
        source: &S,
        sink: &mut W,
    ) -> Result<CopySummary> {
        let mut summary = CopySummary::default();
        self.drain(source, sink, &mut summary)?;
        self.finish(sink, &mut summary)?;
        Ok(summary)
    }

    /// Copies named files in order, separating interior files.
    ///
    /// The first failure to open or read a file aborts the run.
    pub fn copy_files<S: Source, W: Write>(
        &mut self,
        sources: &[S],
        sink: &mut W,
    ) -> Result<CopySummary> {
        let mut summary = CopySummary::default();
        let total = sources.len();

        for (index, source) in sources.iter().enumerate() {
            self.drain(source, sink, &mut summary)?;

            if let Some(separator) = self.policy.after_file(index, total) {
                let bytes = separator.as_bytes();
                sink.write_all(bytes)?;
                summary.bytes_written += bytes.len() as u64;
                summary.separators += 1;
                trace!(?separator, index, "wrote separator");
            }
            sink.flush()?;
        }

        self.finish(sink, &mut summary)?;
        Ok(summary)
    }

    /// Reads `source` until a pull returns zero bytes.
    fn drain<S: Source, W: Write>(
        &mut self,
        source: &S,
        sink: &mut W,
        summary: &mut CopySummary,
    ) -> Result<()> {
        let name = source.describe();
        let mut reader = source.open()?;
        debug!(source = %name, "opened source");

        let copied = self.copy_stream(&mut reader, sink)?;
        drop(reader);

        summary.sources += 1;
        summary.bytes_read += copied.0;
        summary.bytes_written += copied.1;
        sink.flush()?;
        debug!(source = %name, bytes_read = copied.0, bytes_written = copied.1, "drained source");
        Ok(())
    }

    /// Copies one open reader to the sink, returning `(read, written)` byte
    /// counts. A full buffer is not end of input; only a zero-length read is.
    /// Interrupted reads are reissued; any other read error ends the copy.
    pub fn copy_stream<R: Read, W: Write>(
        &mut self,
        reader: &mut R,
        sink: &mut W,
    ) -> Result<(u64, u64)> {
        let mut read_total = 0u64;
        let mut written_total = 0u64;

        loop {
            let n = match reader.read(&mut self.buffer) {
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                result => result?,
            };
            if n == 0 {
                break;
            }

            let chunk = &self.buffer[..n];
            let out = match self.transcoder.as_mut() {
                Some(transcoder) => transcoder.transcode(chunk),
                None => chunk,
            };
            sink.write_all(out)?;
            trace!(read = n, written = out.len(), "copied chunk");

            read_total += n as u64;
            written_total += out.len() as u64;
        }

        Ok((read_total, written_total))
    }

    fn finish<W: Write>(&self, sink: &mut W, summary: &mut CopySummary) -> Result<()> {
        if let Some(marker) = self.policy.trailing() {
            sink.write_all(marker)?;
            summary.bytes_written += marker.len() as u64;
            trace!("wrote trailing marker");
        }
        sink.flush()?;
        Ok(())
    }
}
